//! Greedy thread sequencer.
//!
//! Overview
//! - Lays out pegs once, then walks from peg 0 choosing, at every step, the
//!   reachable peg whose line covers the most remaining darkness.
//! - Candidates closer than [`min_peg_distance`](crate::pegs::min_peg_distance)
//!   along the perimeter are skipped. Ties keep the lowest peg index, so runs
//!   are reproducible.
//! - Each accepted line depletes the field by `floor(opacity × 255)` along its
//!   pixels; the run stops at the iteration budget or as soon as no candidate
//!   covers any darkness.
//! - Progress is reported every [`PROGRESS_STRIDE`] lines plus once at the end;
//!   the thread yields every [`YIELD_STRIDE`] lines.
//!
//! Modules
//! - [`params`] – run configuration, validation and presets.
//! - [`progress`] – progress records and sinks.
//! - `greedy` – the [`Sequencer`] state machine.

mod greedy;
pub mod params;
pub mod progress;

pub use greedy::{generate, Sequencer, Step};
pub use params::{Preset, StringArtParams, MAX_PEGS_PER_SIDE};
pub use progress::{NoProgress, Progress, ProgressSink, PROGRESS_STRIDE, YIELD_STRIDE};
