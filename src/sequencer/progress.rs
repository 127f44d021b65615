//! Progress reporting out of a running sequencer.
use serde::Serialize;

/// Accepted lines between intermediate progress reports.
pub const PROGRESS_STRIDE: usize = 10;
/// Accepted lines between yields to the OS scheduler.
pub const YIELD_STRIDE: usize = 100;

/// Snapshot of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Lines accepted so far.
    pub completed: usize,
    /// Configured iteration budget.
    pub total: usize,
    pub current_peg: usize,
    /// Set on the single terminal report, whether the budget was exhausted
    /// or the run stopped early.
    pub finished: bool,
}

impl Progress {
    /// Completed share of the budget in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        (self.completed as f64 / self.total as f64).min(1.0)
    }
}

/// Receiver of progress reports. Returning `false` cancels the run.
pub trait ProgressSink {
    fn report(&mut self, progress: Progress) -> bool;
}

impl<F> ProgressSink for F
where
    F: FnMut(Progress) -> bool,
{
    fn report(&mut self, progress: Progress) -> bool {
        self(progress)
    }
}

/// Sink that discards every report.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&mut self, _progress: Progress) -> bool {
        true
    }
}
