//! Darkness field: remaining "ink demand" per pixel.
//!
//! The field is built once per run from the source luminance (dark source
//! pixels map to high values) and is depleted in place as lines are accepted.
//! Scoring and subtraction take rasterized pixel paths; pixels outside the
//! field are skipped rather than treated as errors, since pegs on the right
//! and bottom edges sit one pixel past the last column/row.
use crate::image::io::GrayImageU8;
use crate::image::traits::ImageView;
use crate::raster::Pixel;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DarknessField {
    w: usize,
    h: usize,
    data: Vec<u8>,
}

impl DarknessField {
    /// Field of the given size filled with `value`.
    pub fn filled(w: usize, h: usize, value: u8) -> Self {
        Self {
            w,
            h,
            data: vec![value; w * h],
        }
    }

    /// Convert a luminance raster into darkness.
    ///
    /// Without `invert` a black pixel (0) becomes 255; with `invert` the
    /// luminance is taken as darkness directly, so light areas attract thread.
    pub fn from_luminance<V>(view: &V, invert: bool) -> Self
    where
        V: ImageView<Pixel = u8> + Sync,
    {
        let (w, h) = (view.width(), view.height());
        let mut data = vec![0u8; w * h];
        if w == 0 || h == 0 {
            return Self { w, h, data };
        }
        let convert = |y: usize, out: &mut [u8]| {
            for (dst, &lum) in out.iter_mut().zip(view.row(y)) {
                *dst = if invert { lum } else { 255 - lum };
            }
        };

        #[cfg(feature = "parallel")]
        data.par_chunks_mut(w)
            .enumerate()
            .for_each(|(y, out)| convert(y, out));

        #[cfg(not(feature = "parallel"))]
        data.chunks_mut(w)
            .enumerate()
            .for_each(|(y, out)| convert(y, out));

        Self { w, h, data }
    }

    #[inline]
    fn index(&self, p: Pixel) -> Option<usize> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        (x < self.w && y < self.h).then_some(y * self.w + x)
    }

    /// Darkness at `p`, or 0 outside the field.
    #[inline]
    pub fn get(&self, p: Pixel) -> u8 {
        self.index(p).map_or(0, |i| self.data[i])
    }

    /// Sum of the darkness under every in-bounds pixel of `path`.
    pub fn sum_along(&self, path: &[Pixel]) -> u64 {
        path.iter().map(|&p| self.get(p) as u64).sum()
    }

    /// Remove `amount` of darkness under every in-bounds pixel of `path`,
    /// saturating at zero.
    pub fn subtract_along(&mut self, path: &[Pixel], amount: u8) {
        for &p in path {
            if let Some(i) = self.index(p) {
                self.data[i] = self.data[i].saturating_sub(amount);
            }
        }
    }

    /// Deposit `amount` under every in-bounds pixel of `path`, saturating at
    /// 255. Used to accumulate drawn thread.
    pub fn add_along(&mut self, path: &[Pixel], amount: u8) {
        for &p in path {
            if let Some(i) = self.index(p) {
                self.data[i] = self.data[i].saturating_add(amount);
            }
        }
    }

    /// Total remaining darkness.
    pub fn total(&self) -> u64 {
        self.data.iter().map(|&v| v as u64).sum()
    }

    /// Displayable grayscale rendition (white where no ink is needed).
    pub fn to_grayscale(&self) -> GrayImageU8 {
        let data = self.data.iter().map(|&v| 255 - v).collect();
        GrayImageU8::new(self.w, self.h, data)
    }
}

impl ImageView for DarknessField {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.w
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        Some(&self.data)
    }
}

#[cfg(test)]
mod tests;
