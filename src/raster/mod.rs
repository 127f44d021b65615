//! Line rasterization between pegs and its per-run memoisation.
mod bresenham;
mod cache;

pub use bresenham::rasterize;
pub use cache::LineCache;

use serde::Serialize;

/// Integer pixel coordinate. May fall outside the field; consumers skip such
/// pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
}
