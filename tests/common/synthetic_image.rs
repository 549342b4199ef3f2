use edge_scanner::image::ImageF32;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Dark image with a bright horizontal band covering rows `top..bottom`.
pub fn horizontal_band(width: usize, height: usize, top: usize, bottom: usize, level: f32) -> ImageF32 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(top <= bottom && bottom <= height, "band must lie inside the image");

    let mut img = ImageF32::new(width, height);
    for y in top..bottom {
        for x in 0..width {
            img.set(x, y, level);
        }
    }
    img
}

/// Integer-valued 8-bit-range noise, reproducible from `seed`.
pub fn random_u8_levels(width: usize, height: usize, seed: u64) -> ImageF32 {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut img = ImageF32::new(width, height);
    for v in img.data.iter_mut() {
        *v = rng.gen_range(0..=255u8) as f32;
    }
    img
}
