//! Owned single-channel f32 image in row-major layout (stride == width).
//!
//! This is the intensity field the scanner works on. Samples keep the scale
//! they were decoded with (0..=255 for 8-bit sources).
use crate::error::{EdgeError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of f32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0.0; w * h],
        }
    }

    /// Wrap a row-major buffer. Fails if `data.len() != w * h`.
    pub fn from_vec(w: usize, h: usize, data: Vec<f32>) -> Result<Self> {
        if data.len() != w * h {
            return Err(EdgeError::InvalidShape(format!(
                "buffer holds {} samples, expected {w}x{h}",
                data.len()
            )));
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    /// Build an image from equally long rows.
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> Result<Self> {
        let h = rows.len();
        let w = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(w * h);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != w {
                return Err(EdgeError::InvalidShape(format!(
                    "row {y} has {} samples, expected {w}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(w, h, data)
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }
    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Copy out the `width × height` region whose top-left corner is (x, y).
    pub fn crop(&self, x: usize, y: usize, width: usize, height: usize) -> Result<Self> {
        let fits_x = x.checked_add(width).is_some_and(|end| end <= self.w);
        let fits_y = y.checked_add(height).is_some_and(|end| end <= self.h);
        if !fits_x || !fits_y {
            return Err(EdgeError::InvalidShape(format!(
                "crop {width}x{height}+{x}+{y} exceeds image {}x{}",
                self.w, self.h
            )));
        }
        let mut data = Vec::with_capacity(width * height);
        for yy in y..y + height {
            let start = self.idx(x, yy);
            data.extend_from_slice(&self.data[start..start + width]);
        }
        Ok(Self {
            w: width,
            h: height,
            stride: width,
            data,
        })
    }
}

impl crate::image::traits::ImageView for ImageF32 {
    type Pixel = f32;

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
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl crate::image::traits::ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}
