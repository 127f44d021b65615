//! Run statistics and the serialisable summary written by the CLI.
use crate::estimate::TimeEstimates;
use crate::sequencer::StringArtParams;
use serde::Serialize;

/// Counters collected by the sequencer over one run.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunStats {
    /// Lines laid.
    pub completed: usize,
    /// Iteration budget.
    pub total: usize,
    /// True when the run stopped before the budget because no line covered
    /// any remaining darkness.
    pub early_stop: bool,
    pub min_peg_distance: usize,
    /// Distinct peg pairs rasterized (line cache misses).
    pub rasterized_lines: usize,
    /// Pair slots the line cache allocated.
    pub cache_slots: usize,
    /// Darkness left in the field at the end of the run.
    pub residual_darkness: u64,
    pub elapsed_ms: f64,
}

/// Report combining the configuration, run statistics and build estimates.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub input: String,
    pub invert: bool,
    pub params: StringArtParams,
    pub total_pegs: usize,
    pub stats: RunStats,
    pub estimates: TimeEstimates,
    pub connections: Vec<usize>,
}
