use super::params::StringArtParams;
use super::progress::{Progress, ProgressSink, PROGRESS_STRIDE, YIELD_STRIDE};
use crate::diagnostics::RunStats;
use crate::error::{Error, Result};
use crate::field::DarknessField;
use crate::image::traits::ImageView;
use crate::pegs::{compute_pegs, cyclic_distance, min_peg_distance, Peg};
use crate::raster::LineCache;
use crate::types::StringArtResult;
use log::{debug, info, warn};
use std::thread;
use std::time::Instant;

/// Peg every run starts from.
const START_PEG: usize = 0;

/// Outcome of a single [`Sequencer::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// A line to `peg` was laid; `score` is the darkness it covered.
    Accepted { peg: usize, score: u64 },
    /// No reachable candidate covers any darkness; the run is over.
    Exhausted,
    /// The iteration budget is spent.
    Complete,
}

/// Owns every piece of mutable state of one run: the darkness field, the line
/// cache and the growing connection sequence.
#[derive(Debug)]
pub struct Sequencer {
    params: StringArtParams,
    pegs: Vec<Peg>,
    field: DarknessField,
    cache: LineCache,
    min_distance: usize,
    darkening: u8,
    connections: Vec<usize>,
    exhausted: bool,
    elapsed_ms: f64,
}

impl Sequencer {
    /// Validate `params` against `field` and prepare a run.
    pub fn new(field: DarknessField, params: StringArtParams) -> Result<Self> {
        params.validate()?;
        let expected = params.frame_pixels();
        if field.width() != expected || field.height() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                width: field.width(),
                height: field.height(),
            });
        }

        let pegs = compute_pegs(params.pegs_per_side, params.frame_size);
        let min_distance = min_peg_distance(pegs.len());
        let darkening = params.darkening();
        if darkening == 0 {
            warn!(
                "Sequencer: line_opacity {} removes no darkness; lines will repeat",
                params.line_opacity
            );
        }
        debug!(
            "Sequencer: {} pegs, min distance {}, darkening {}, budget {} lines",
            pegs.len(),
            min_distance,
            darkening,
            params.iterations
        );

        let mut connections = Vec::with_capacity(params.iterations + 1);
        connections.push(START_PEG);
        Ok(Self {
            cache: LineCache::new(pegs.len()),
            params,
            pegs,
            field,
            min_distance,
            darkening,
            connections,
            exhausted: false,
            elapsed_ms: 0.0,
        })
    }

    /// Lines accepted so far.
    #[inline]
    pub fn completed(&self) -> usize {
        self.connections.len() - 1
    }

    #[inline]
    pub fn current_peg(&self) -> usize {
        self.connections[self.connections.len() - 1]
    }

    pub fn is_done(&self) -> bool {
        self.exhausted || self.completed() >= self.params.iterations
    }

    pub fn pegs(&self) -> &[Peg] {
        &self.pegs
    }

    pub fn connections(&self) -> &[usize] {
        &self.connections
    }

    /// Remaining darkness.
    pub fn field(&self) -> &DarknessField {
        &self.field
    }

    pub fn cache(&self) -> &LineCache {
        &self.cache
    }

    pub fn params(&self) -> &StringArtParams {
        &self.params
    }

    /// Choose and lay the next line.
    pub fn step(&mut self) -> Step {
        if self.exhausted {
            return Step::Exhausted;
        }
        if self.completed() >= self.params.iterations {
            return Step::Complete;
        }

        let total = self.pegs.len();
        let current = self.current_peg();
        let from = self.pegs[current];

        let mut best: Option<(usize, u64)> = None;
        for next in 0..total {
            if next == current || cyclic_distance(current, next, total) < self.min_distance {
                continue;
            }
            let line = self.cache.get_or_compute(&from, &self.pegs[next]);
            let score = self.field.sum_along(line);
            // strict comparison: the lowest index wins ties
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((next, score));
            }
        }

        match best {
            Some((peg, score)) if score > 0 => {
                let line = self.cache.get_or_compute(&from, &self.pegs[peg]);
                self.field.subtract_along(line, self.darkening);
                self.connections.push(peg);
                Step::Accepted { peg, score }
            }
            _ => {
                debug!(
                    "Sequencer: no candidate from peg {} covers darkness after {} lines",
                    current,
                    self.completed()
                );
                self.exhausted = true;
                Step::Exhausted
            }
        }
    }

    /// Step until the budget is spent or the field is exhausted, reporting to
    /// `sink`. Fails with [`Error::Cancelled`] if the sink asks to stop.
    pub fn run<S>(&mut self, sink: &mut S) -> Result<()>
    where
        S: ProgressSink + ?Sized,
    {
        let t0 = Instant::now();
        let result = self.run_loop(sink);
        self.elapsed_ms += t0.elapsed().as_secs_f64() * 1000.0;
        result?;

        info!(
            "Sequencer: laid {}/{} lines in {:.1} ms ({} lines rasterized{})",
            self.completed(),
            self.params.iterations,
            self.elapsed_ms,
            self.cache.rasterized(),
            if self.exhausted { ", stopped early" } else { "" }
        );
        // the run is over either way; a refusal here cancels nothing
        sink.report(self.progress(true));
        Ok(())
    }

    fn run_loop<S>(&mut self, sink: &mut S) -> Result<()>
    where
        S: ProgressSink + ?Sized,
    {
        loop {
            match self.step() {
                Step::Accepted { .. } => {
                    let completed = self.completed();
                    if completed % PROGRESS_STRIDE == 0
                        && completed < self.params.iterations
                        && !sink.report(self.progress(false))
                    {
                        debug!("Sequencer: cancelled after {completed} lines");
                        return Err(Error::Cancelled);
                    }
                    if completed % YIELD_STRIDE == 0 {
                        thread::yield_now();
                    }
                }
                Step::Exhausted | Step::Complete => return Ok(()),
            }
        }
    }

    fn progress(&self, finished: bool) -> Progress {
        Progress {
            completed: self.completed(),
            total: self.params.iterations,
            current_peg: self.current_peg(),
            finished,
        }
    }

    pub fn stats(&self) -> RunStats {
        RunStats {
            completed: self.completed(),
            total: self.params.iterations,
            early_stop: self.exhausted,
            min_peg_distance: self.min_distance,
            rasterized_lines: self.cache.rasterized(),
            cache_slots: self.cache.allocated_slots(),
            residual_darkness: self.field.total(),
            elapsed_ms: self.elapsed_ms,
        }
    }

    /// Final connection sequence together with the peg layout.
    pub fn into_result(self) -> StringArtResult {
        StringArtResult {
            connections: self.connections,
            pegs: self.pegs,
            frame_size: self.params.frame_size,
        }
    }
}

/// Run a complete generation on the calling thread.
pub fn generate<S>(
    field: DarknessField,
    params: StringArtParams,
    sink: &mut S,
) -> Result<StringArtResult>
where
    S: ProgressSink + ?Sized,
{
    let mut sequencer = Sequencer::new(field, params)?;
    sequencer.run(sink)?;
    Ok(sequencer.into_result())
}
