//! I/O helpers for decoded images and JSON.
//!
//! - `load_image`: read a PNG/JPEG/etc. as grayscale intensities or RGB.
//! - `load_grayscale`: shorthand for the grayscale case the scanner needs.
//! - `save_grayscale_f32`: write an `ImageF32` in [0, 1] to a grayscale PNG.
//! - `save_gradient_image`: write `|gradient|` normalized by its maximum.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageF32, ImageU8, ImageView};
use crate::error::{EdgeError, Result};
use crate::gradient::GradientField;
use image::{GrayImage, Luma, RgbImage};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How a file should be decoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Color,
    #[default]
    Grayscale,
}

/// Result of decoding one image file.
#[derive(Clone, Debug)]
pub enum DecodedImage {
    /// Single-channel intensities in 0..=255.
    Gray(ImageF32),
    /// Three-channel 8-bit RGB.
    Color(RgbImage),
}

impl DecodedImage {
    pub fn width(&self) -> usize {
        match self {
            DecodedImage::Gray(img) => img.w,
            DecodedImage::Color(img) => img.width() as usize,
        }
    }

    pub fn height(&self) -> usize {
        match self {
            DecodedImage::Gray(img) => img.h,
            DecodedImage::Color(img) => img.height() as usize,
        }
    }

    /// Collapse to the grayscale intensity field the scanner consumes.
    pub fn into_gray(self) -> ImageF32 {
        match self {
            DecodedImage::Gray(img) => img,
            DecodedImage::Color(rgb) => {
                gray_to_f32(&image::DynamicImage::ImageRgb8(rgb).into_luma8())
            }
        }
    }
}

fn gray_to_f32(gray: &GrayImage) -> ImageF32 {
    let w = gray.width() as usize;
    ImageU8 {
        w,
        h: gray.height() as usize,
        stride: w,
        data: gray.as_raw(),
    }
    .to_f32()
}

/// Load an image from disk in the requested color mode.
pub fn load_image(path: &Path, mode: ColorMode) -> Result<DecodedImage> {
    let img = image::open(path).map_err(|e| EdgeError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(match mode {
        ColorMode::Grayscale => DecodedImage::Gray(gray_to_f32(&img.into_luma8())),
        ColorMode::Color => DecodedImage::Color(img.into_rgb8()),
    })
}

/// Load an image from disk and convert to grayscale intensities.
pub fn load_grayscale(path: &Path) -> Result<ImageF32> {
    load_image(path, ColorMode::Grayscale).map(DecodedImage::into_gray)
}

/// Save a float image to a grayscale PNG, mapping [0, 1] to [0, 255] with clamping.
pub fn save_grayscale_f32(image: &ImageF32, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(image.w as u32, image.h as u32);
    for (y, row) in image.rows().enumerate() {
        for (x, &px) in row.iter().enumerate() {
            let v = (px * 255.0).clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    out.save(path).map_err(|e| EdgeError::Encode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Save `|gradient|` as a grayscale PNG, scaled so the strongest response is white.
pub fn save_gradient_image(grad: &GradientField, path: &Path) -> Result<()> {
    let src = grad.as_image();
    let peak = src.data.iter().fold(0.0f32, |m, v| m.max(v.abs()));
    let scale = if peak > 0.0 { 1.0 / peak } else { 0.0 };
    let mut normalized = ImageF32::new(src.w, src.h);
    for (dst, v) in normalized.data.iter_mut().zip(&src.data) {
        *dst = v.abs() * scale;
    }
    save_grayscale_f32(&normalized, path)
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|e| EdgeError::io(path, e.into()))?;
    fs::write(path, json).map_err(|e| EdgeError::io(path, e))
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| EdgeError::io(parent, e))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("edge_scanner_io_{name}_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn grayscale_png_round_trips_intensities() {
        let dir = scratch_dir("gray");
        let path = dir.join("ramp.png");
        let mut png = GrayImage::new(3, 2);
        for (i, px) in png.pixels_mut().enumerate() {
            *px = Luma([(i * 40) as u8]);
        }
        png.save(&path).unwrap();

        let img = load_grayscale(&path).unwrap();
        assert_eq!((img.w, img.h), (3, 2));
        assert_eq!(img.data, vec![0.0, 40.0, 80.0, 120.0, 160.0, 200.0]);

        let color = load_image(&path, ColorMode::Color).unwrap();
        assert!(matches!(color, DecodedImage::Color(_)));
        assert_eq!((color.width(), color.height()), (3, 2));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn missing_file_reports_decode_error() {
        let err = load_grayscale(Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, EdgeError::Decode { .. }));
    }

    #[test]
    fn gradient_image_is_written() {
        let dir = scratch_dir("grad");
        let path = dir.join("nested").join("grad.png");
        let img = ImageF32::from_rows(&[[0.0, 10.0], [0.0, 20.0], [0.0, 40.0]]).unwrap();
        let grad = GradientField::compute(&img).unwrap();
        save_gradient_image(&grad, &path).unwrap();

        let back = image::open(&path).unwrap().into_luma8();
        assert_eq!(back.get_pixel(0, 0).0[0], 0);
        assert_eq!(back.get_pixel(1, 0).0[0], 255);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn unsupported_output_format_reports_encode_error() {
        let dir = scratch_dir("encode");
        let path = dir.join("grad.notanimageformat");
        let err = save_grayscale_f32(&ImageF32::new(2, 2), &path).unwrap_err();
        assert!(matches!(err, EdgeError::Encode { .. }), "got {err:?}");
        fs::remove_dir_all(dir).ok();
    }
}
