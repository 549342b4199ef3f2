//! Vertical (row-direction) central-difference gradient.
//!
//! For a source image with `h` rows the field has `h - 2` rows: output row
//! `r` is centered on source row `r + 1`, and the two boundary rows have no
//! value. Each output row is produced from two contiguous source row slices.
//!
//! Complexity: O(W·H), one output buffer.
use crate::error::{EdgeError, Result};
use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Signed `∂I/∂row` samples, `0.5 * (I[r + 2] - I[r])` per column.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientField {
    dy: ImageF32,
}

impl GradientField {
    /// Compute the field. Needs at least three rows and one column.
    pub fn compute(image: &ImageF32) -> Result<Self> {
        let (w, h) = (image.width(), image.height());
        if h < 3 || w == 0 {
            return Err(EdgeError::InvalidShape(format!(
                "gradient needs at least 3 rows and 1 column, got {w}x{h}"
            )));
        }

        let mut dy = ImageF32::new(w, h - 2);
        for r in 0..h - 2 {
            let above = image.row(r);
            let below = image.row(r + 2);
            for ((out, &a), &b) in dy.row_mut(r).iter_mut().zip(above).zip(below) {
                *out = 0.5 * (b - a);
            }
        }
        Ok(Self { dy })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.dy.h
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.dy.w
    }

    #[inline]
    pub fn row(&self, r: usize) -> &[f32] {
        self.dy.row(r)
    }

    /// Source image row that gradient row `r` is centered on.
    #[inline]
    pub fn source_row(r: usize) -> usize {
        r + 1
    }

    pub fn as_image(&self) -> &ImageF32 {
        &self.dy
    }

    pub fn into_image(self) -> ImageF32 {
        self.dy
    }
}
