//! Background execution of a generation run.
//!
//! [`spawn`] moves the darkness field onto a dedicated thread and streams
//! [`WorkerMessage`]s back over a channel. Dropping the [`GenerationHandle`]
//! cancels the run at its next progress report; the field and line cache are
//! owned by the worker and simply dropped with it.
use crate::diagnostics::RunStats;
use crate::error::{Error, Result};
use crate::field::DarknessField;
use crate::sequencer::{Progress, ProgressSink, Sequencer, StringArtParams};
use crate::types::StringArtResult;
use log::debug;
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

/// Message sent from the worker thread.
#[derive(Debug)]
pub enum WorkerMessage {
    Progress(Progress),
    Finished {
        result: Box<StringArtResult>,
        stats: RunStats,
    },
    /// Terminal failure; no result follows.
    Failed(String),
}

impl ProgressSink for Sender<WorkerMessage> {
    fn report(&mut self, progress: Progress) -> bool {
        self.send(WorkerMessage::Progress(progress)).is_ok()
    }
}

/// Caller side of a running generation.
#[derive(Debug)]
pub struct GenerationHandle {
    rx: Receiver<WorkerMessage>,
    thread: Option<JoinHandle<()>>,
}

/// Validate the run and start it on a background thread.
///
/// Configuration errors are returned here, before any thread is spawned.
pub fn spawn(field: DarknessField, params: StringArtParams) -> Result<GenerationHandle> {
    let sequencer = Sequencer::new(field, params)?;
    let (tx, rx) = mpsc::channel();
    let thread = thread::Builder::new()
        .name("string-art".to_string())
        .spawn(move || run_worker(move |sink| run_sequencer(sequencer, sink), tx))
        .map_err(|e| Error::Worker(format!("failed to start worker thread: {e}")))?;
    Ok(GenerationHandle {
        rx,
        thread: Some(thread),
    })
}

fn run_sequencer(
    mut sequencer: Sequencer,
    sink: &mut Sender<WorkerMessage>,
) -> Result<(StringArtResult, RunStats)> {
    sequencer.run(sink)?;
    let stats = sequencer.stats();
    Ok((sequencer.into_result(), stats))
}

/// Run `job` with a progress sender and post exactly one terminal message,
/// unless the job was cancelled.
fn run_worker<F>(job: F, tx: Sender<WorkerMessage>)
where
    F: FnOnce(&mut Sender<WorkerMessage>) -> Result<(StringArtResult, RunStats)>,
{
    let mut sink = tx.clone();
    let outcome = catch_unwind(AssertUnwindSafe(move || job(&mut sink)));
    let message = match outcome {
        Ok(Ok((result, stats))) => WorkerMessage::Finished {
            result: Box::new(result),
            stats,
        },
        Ok(Err(Error::Cancelled)) => {
            debug!("Worker: receiver dropped, run abandoned");
            return;
        }
        Ok(Err(err)) => WorkerMessage::Failed(err.to_string()),
        Err(payload) => WorkerMessage::Failed(panic_message(payload.as_ref())),
    };
    // nobody may be listening any more
    let _ = tx.send(message);
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic in generation worker".to_string()
    }
}

impl GenerationHandle {
    /// Next pending message without blocking.
    ///
    /// Returns `Ok(None)` while the worker is busy and `Err` once it has gone
    /// away without a terminal message.
    pub fn poll(&self) -> Result<Option<WorkerMessage>> {
        match self.rx.try_recv() {
            Ok(msg) => Ok(Some(msg)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(disconnected()),
        }
    }

    /// Block until the run ends, forwarding progress to `on_progress`.
    pub fn wait<F>(mut self, mut on_progress: F) -> Result<(StringArtResult, RunStats)>
    where
        F: FnMut(Progress),
    {
        let outcome = loop {
            match self.rx.recv() {
                Ok(WorkerMessage::Progress(p)) => on_progress(p),
                Ok(WorkerMessage::Finished { result, stats }) => break Ok((*result, stats)),
                Ok(WorkerMessage::Failed(msg)) => break Err(Error::Worker(msg)),
                Err(_) => break Err(disconnected()),
            }
        };
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
        outcome
    }

    /// Abandon the run. Equivalent to dropping the handle.
    pub fn cancel(self) {}
}

fn disconnected() -> Error {
    Error::Worker("worker exited without a result".to_string())
}
