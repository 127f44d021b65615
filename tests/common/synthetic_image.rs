/// White square canvas with a filled black disc.
pub fn disc_u8(size: usize, cx: f64, cy: f64, radius: f64) -> Vec<u8> {
    assert!(size > 0, "image dimensions must be positive");
    assert!(radius > 0.0, "radius must be positive");

    let mut img = vec![255u8; size * size];
    for y in 0..size {
        for x in 0..size {
            let dx = x as f64 + 0.5 - cx;
            let dy = y as f64 + 0.5 - cy;
            if dx * dx + dy * dy <= radius * radius {
                img[y * size + x] = 0;
            }
        }
    }
    img
}

/// Tightly packed RGBA buffer of a single colour.
pub fn solid_rgba(size: usize, rgb: [u8; 3], alpha: u8) -> Vec<u8> {
    let mut buf = Vec::with_capacity(size * size * 4);
    for _ in 0..size * size {
        buf.extend_from_slice(&[rgb[0], rgb[1], rgb[2], alpha]);
    }
    buf
}
