//! Run configuration for the greedy sequencer.
//!
//! Defaults match the "low" quality preset at an 800 px frame. Presets only
//! touch the peg count, iteration budget and opacity; the frame size is kept.
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Largest accepted `pegs_per_side`; bounds the line cache at
/// `n·(n+1)/2` pairs for `n = 4 × MAX_PEGS_PER_SIDE` pegs.
pub const MAX_PEGS_PER_SIDE: usize = 500;

/// Parameters of a single generation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringArtParams {
    /// Pegs on each side of the square frame (>= 2).
    pub pegs_per_side: usize,
    /// Maximum number of threads (lines) to lay (>= 1).
    pub iterations: usize,
    /// Darkness removed by one thread, as a fraction of full black, in (0, 1].
    pub line_opacity: f64,
    /// Frame edge length in pixels; the source bitmap must be this size.
    pub frame_size: f64,
}

impl Default for StringArtParams {
    fn default() -> Self {
        Self {
            pegs_per_side: 10,
            iterations: 500,
            line_opacity: 0.28,
            frame_size: 800.0,
        }
    }
}

impl StringArtParams {
    #[inline]
    pub fn total_pegs(&self) -> usize {
        self.pegs_per_side.saturating_mul(4)
    }

    /// Darkness subtracted per accepted line: `floor(opacity × 255)`.
    #[inline]
    pub fn darkening(&self) -> u8 {
        (self.line_opacity * 255.0).floor().clamp(0.0, 255.0) as u8
    }

    /// Side length of the expected bitmap in whole pixels.
    #[inline]
    pub fn frame_pixels(&self) -> usize {
        self.frame_size.round() as usize
    }

    pub fn with_preset(mut self, preset: Preset) -> Self {
        let (pegs_per_side, iterations, line_opacity) = preset.values();
        self.pegs_per_side = pegs_per_side;
        self.iterations = iterations;
        self.line_opacity = line_opacity;
        self
    }

    /// Reject configurations the sequencer cannot run.
    pub fn validate(&self) -> Result<()> {
        if !(2..=MAX_PEGS_PER_SIDE).contains(&self.pegs_per_side) {
            return Err(Error::InvalidConfig(format!(
                "pegs_per_side must lie in [2, {MAX_PEGS_PER_SIDE}], got {}",
                self.pegs_per_side
            )));
        }
        let pair_slots = self
            .pegs_per_side
            .checked_mul(4)
            .and_then(|n| n.checked_mul(n + 1));
        if pair_slots.is_none() {
            return Err(Error::InvalidConfig(format!(
                "pegs_per_side {} overflows the peg pair count",
                self.pegs_per_side
            )));
        }
        if self.iterations == 0 {
            return Err(Error::InvalidConfig(
                "iterations must be at least 1".to_string(),
            ));
        }
        if !(self.line_opacity > 0.0 && self.line_opacity <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "line_opacity must lie in (0, 1], got {}",
                self.line_opacity
            )));
        }
        if !(self.frame_size.is_finite() && self.frame_size >= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "frame_size must be a finite size of at least one pixel, got {}",
                self.frame_size
            )));
        }
        Ok(())
    }
}

/// Named quality presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Minimal,
    Low,
    Medium,
    High,
}

impl Preset {
    /// `(pegs_per_side, iterations, line_opacity)`
    pub fn values(self) -> (usize, usize, f64) {
        match self {
            Self::Minimal => (4, 200, 0.3),
            Self::Low => (10, 500, 0.28),
            Self::Medium => (25, 1500, 0.25),
            Self::High => (50, 3000, 0.23),
        }
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(Error::InvalidConfig(format!("unknown preset '{other}'"))),
        }
    }
}
