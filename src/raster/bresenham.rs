use super::Pixel;
use nalgebra::Point2;

/// Rasterize the segment `p0`–`p1` with integer Bresenham stepping.
///
/// Endpoints are rounded to the nearest pixel and both are included. Stepping
/// always starts from the lexicographically smaller rounded endpoint, so the
/// result does not depend on argument order.
pub fn rasterize(p0: Point2<f64>, p1: Point2<f64>) -> Vec<Pixel> {
    let a = round_point(p0);
    let b = round_point(p1);
    let (start, end) = if a <= b { (a, b) } else { (b, a) };

    let dx = (end.x - start.x).abs();
    let dy = (end.y - start.y).abs();
    let sx = if start.x < end.x { 1 } else { -1 };
    let sy = if start.y < end.y { 1 } else { -1 };
    let mut err = dx - dy;

    let mut pixels = Vec::with_capacity(dx.max(dy) as usize + 1);
    let (mut x, mut y) = (start.x, start.y);
    loop {
        pixels.push(Pixel { x, y });
        if x == end.x && y == end.y {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
    pixels
}

#[inline]
fn round_point(p: Point2<f64>) -> Pixel {
    Pixel {
        x: p.x.round() as i32,
        y: p.y.round() as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    #[test]
    fn horizontal_line_includes_both_endpoints() {
        let line = rasterize(pt(0.0, 2.0), pt(4.0, 2.0));
        let xs: Vec<i32> = line.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0, 1, 2, 3, 4]);
        assert!(line.iter().all(|p| p.y == 2));
    }

    #[test]
    fn diagonal_steps_both_axes() {
        let line = rasterize(pt(0.0, 0.0), pt(3.0, 3.0));
        assert_eq!(
            line,
            vec![
                Pixel { x: 0, y: 0 },
                Pixel { x: 1, y: 1 },
                Pixel { x: 2, y: 2 },
                Pixel { x: 3, y: 3 }
            ]
        );
    }

    #[test]
    fn degenerate_segment_is_single_pixel() {
        let line = rasterize(pt(5.2, 7.4), pt(4.8, 6.6));
        assert_eq!(line, vec![Pixel { x: 5, y: 7 }]);
    }

    #[test]
    fn endpoints_are_rounded() {
        let line = rasterize(pt(0.4, 0.6), pt(9.5, 0.2));
        assert_eq!(line.first(), Some(&Pixel { x: 0, y: 1 }));
        assert_eq!(line.last(), Some(&Pixel { x: 10, y: 0 }));
    }

    #[test]
    fn argument_order_does_not_matter() {
        let cases = [
            (pt(0.0, 0.0), pt(7.0, 3.0)),
            (pt(10.0, 0.0), pt(0.0, 6.0)),
            (pt(3.0, 9.0), pt(8.0, 1.0)),
            (pt(0.0, 12.5), pt(25.0, 0.0)),
        ];
        for (a, b) in cases {
            assert_eq!(rasterize(a, b), rasterize(b, a));
        }
    }

    #[test]
    fn path_is_connected() {
        let line = rasterize(pt(2.0, 17.0), pt(31.0, 4.0));
        for pair in line.windows(2) {
            let ddx = (pair[1].x - pair[0].x).abs();
            let ddy = (pair[1].y - pair[0].y).abs();
            assert!(ddx <= 1 && ddy <= 1 && ddx + ddy > 0, "gap at {pair:?}");
        }
    }
}
