use super::*;
use crate::image::ImageU8;

fn px(x: i32, y: i32) -> Pixel {
    Pixel { x, y }
}

#[test]
fn dark_pixels_need_more_ink() {
    let lum = [0u8, 64, 200, 255];
    let view = ImageU8::from_slice(2, 2, &lum).unwrap();
    let field = DarknessField::from_luminance(&view, false);
    assert_eq!(field.as_slice().unwrap(), &[255, 191, 55, 0]);

    let inverted = DarknessField::from_luminance(&view, true);
    assert_eq!(inverted.as_slice().unwrap(), &lum);
}

#[test]
fn zero_field_scores_zero() {
    let field = DarknessField::filled(8, 8, 0);
    let path: Vec<Pixel> = (0..8).map(|i| px(i, i)).collect();
    assert_eq!(field.sum_along(&path), 0);
    assert_eq!(field.sum_along(&[]), 0);
}

#[test]
fn out_of_bounds_pixels_are_skipped() {
    let mut field = DarknessField::filled(4, 4, 10);
    let path = [px(-1, 0), px(0, 0), px(4, 1), px(3, 3), px(2, 9)];
    assert_eq!(field.sum_along(&path), 20);
    field.subtract_along(&path, 3);
    assert_eq!(field.get(px(0, 0)), 7);
    assert_eq!(field.get(px(3, 3)), 7);
    assert_eq!(field.get(px(4, 1)), 0);
    assert_eq!(field.total(), 14 * 10 + 2 * 7);
}

#[test]
fn subtraction_clamps_at_zero() {
    let mut field = DarknessField::filled(3, 1, 100);
    let path = [px(1, 0), px(1, 0)];
    for _ in 0..5 {
        field.subtract_along(&path, 76);
    }
    assert_eq!(field.get(px(1, 0)), 0);
    assert_eq!(field.get(px(0, 0)), 100);
}

#[test]
fn grayscale_preview_inverts_back() {
    let lum = [30u8, 90, 150, 210];
    let view = ImageU8::from_slice(2, 2, &lum).unwrap();
    let preview = DarknessField::from_luminance(&view, false).to_grayscale();
    assert_eq!(preview.data(), &lum);
}
