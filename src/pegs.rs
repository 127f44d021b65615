//! Peg layout around a square frame.
//!
//! Pegs are enumerated by walking the frame clockwise starting at the top-left
//! corner: top (left→right), right (top→bottom), bottom (right→left), left
//! (bottom→top). Consecutive indices are physical neighbours and the last peg
//! neighbours peg 0, so index differences measure distance along the
//! perimeter.
use nalgebra::Point2;
use serde::Serialize;

/// Anchor point on the frame perimeter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Peg {
    pub index: usize,
    /// Frame-local position in pixels.
    pub pos: Point2<f64>,
}

impl Peg {
    #[inline]
    pub fn x(&self) -> f64 {
        self.pos.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.pos.y
    }
}

/// Compute `4 × pegs_per_side` pegs evenly spaced by `frame_size / pegs_per_side`.
///
/// Each side contributes the corner it starts at but not the one it ends at,
/// so every corner appears exactly once.
pub fn compute_pegs(pegs_per_side: usize, frame_size: f64) -> Vec<Peg> {
    let spacing = frame_size / pegs_per_side as f64;
    let mut pegs = Vec::with_capacity(pegs_per_side * 4);

    for side in 0..4 {
        for i in 0..pegs_per_side {
            let d = i as f64 * spacing;
            let pos = match side {
                0 => Point2::new(d, 0.0),
                1 => Point2::new(frame_size, d),
                2 => Point2::new(frame_size - d, frame_size),
                _ => Point2::new(0.0, frame_size - d),
            };
            pegs.push(Peg {
                index: pegs.len(),
                pos,
            });
        }
    }
    pegs
}

/// Minimum perimeter distance (in peg steps) a connection must span.
///
/// Neighbouring pegs produce short chords hugging the frame edge that add
/// little to the picture; small frames are allowed closer connections.
pub fn min_peg_distance(total_pegs: usize) -> usize {
    if total_pegs <= 20 {
        (total_pegs * 5 / 100).max(1)
    } else if total_pegs <= 40 {
        (total_pegs * 8 / 100).max(2)
    } else {
        (total_pegs / 10).max(5)
    }
}

/// Distance between two peg indices along the cyclic perimeter order.
#[inline]
pub fn cyclic_distance(a: usize, b: usize, total_pegs: usize) -> usize {
    let d = a.abs_diff(b);
    d.min(total_pegs - d)
}
