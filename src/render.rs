//! Raster preview of a finished result.
use crate::field::DarknessField;
use crate::image::io::GrayImageU8;
use crate::raster::rasterize;
use crate::types::StringArtResult;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Ink deposited per thread crossing, as a fraction of black.
    pub line_opacity: f64,
    /// Draw only the first `n` lines.
    pub max_lines: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            line_opacity: 0.28,
            max_lines: None,
        }
    }
}

/// Draw the threads of `result` on a white `frame_size²` canvas.
///
/// Overlapping threads accumulate ink up to full black.
pub fn render_result(result: &StringArtResult, opts: &RenderOptions) -> GrayImageU8 {
    let size = result.frame_size.round().max(0.0) as usize;
    let ink = (opts.line_opacity.clamp(0.0, 1.0) * 255.0).floor() as u8;
    let limit = opts.max_lines.unwrap_or(usize::MAX);

    let mut canvas = DarknessField::filled(size, size, 0);
    for (from, to) in result.lines().take(limit) {
        canvas.add_along(&rasterize(from.pos, to.pos), ink);
    }
    canvas.to_grayscale()
}
