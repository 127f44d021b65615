//! RGB(A) → 8-bit luminance conversion.

/// Rec. 601 weights applied to R, G and B.
pub const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// Weighted luminance of a single pixel, rounded like clamped 8-bit storage
/// (nearest, ties to even).
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let [wr, wg, wb] = LUMA_WEIGHTS;
    let v = wr * r as f64 + wg * g as f64 + wb * b as f64;
    v.round_ties_even().clamp(0.0, 255.0) as u8
}

/// Convert a tightly packed RGBA buffer into one luminance byte per pixel.
/// Alpha is ignored.
pub fn luminance_from_rgba(rgba: &[u8], w: usize, h: usize) -> Vec<u8> {
    rgba.chunks_exact(4)
        .take(w * h)
        .map(|px| luma(px[0], px[1], px[2]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_use_weighted_sum() {
        assert_eq!(luma(0, 0, 0), 0);
        assert_eq!(luma(255, 255, 255), 255);
        assert_eq!(luma(255, 0, 0), 76); // 76.245
        assert_eq!(luma(0, 255, 0), 150); // 149.685
        assert_eq!(luma(0, 0, 255), 29); // 29.07
    }

    #[test]
    fn alpha_is_discarded() {
        let rgba = [10u8, 10, 10, 0, 10, 10, 10, 255];
        assert_eq!(luminance_from_rgba(&rgba, 2, 1), vec![10, 10]);
    }
}
