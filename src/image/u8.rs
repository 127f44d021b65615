//! Borrowed 8-bit luminance view, the input boundary of the engine.
use crate::error::{Error, Result};
use crate::image::traits::ImageView;

#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Tightly packed `w × h` view over `data`.
    pub fn from_slice(w: usize, h: usize, data: &'a [u8]) -> Result<Self> {
        if data.len() < w * h {
            return Err(Error::InvalidConfig(format!(
                "luminance buffer holds {} bytes, {w}x{h} needs {}",
                data.len(),
                w * h
            )));
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }
}

impl<'a> ImageView for ImageU8<'a> {
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
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_buffer_is_rejected() {
        let data = [0u8; 5];
        assert!(ImageU8::from_slice(3, 2, &data).is_err());
        let view = ImageU8::from_slice(2, 2, &data).unwrap();
        assert_eq!(view.rows().count(), 2);
    }

    #[test]
    fn rows_skip_the_stride_padding() {
        let data = [1u8, 2, 9, 3, 4, 9];
        let view = ImageU8 {
            w: 2,
            h: 2,
            stride: 3,
            data: &data,
        };
        let rows: Vec<&[u8]> = view.rows().collect();
        assert_eq!(rows, vec![&[1u8, 2][..], &[3, 4][..]]);
        assert!(!view.is_contiguous());
        assert_eq!(view.as_slice(), None);
    }
}
