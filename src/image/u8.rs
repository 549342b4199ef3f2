use super::ImageF32;

/// Borrowed 8-bit grayscale view, e.g. over a decoded frame buffer.
#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Widen to an `ImageF32`, keeping the 0..=255 intensity scale.
    pub fn to_f32(&self) -> ImageF32 {
        let mut out = ImageF32::new(self.w, self.h);
        for y in 0..self.h {
            let src = crate::image::ImageView::row(self, y);
            let start = y * out.stride;
            for (dst, &px) in out.data[start..start + self.w].iter_mut().zip(src) {
                *dst = f32::from(px);
            }
        }
        out
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_f32_respects_stride() {
        let data = [1u8, 2, 99, 3, 4, 99];
        let view = ImageU8 {
            w: 2,
            h: 2,
            stride: 3,
            data: &data,
        };
        let img = view.to_f32();
        assert_eq!(img.data, vec![1.0, 2.0, 3.0, 4.0]);
    }
}
