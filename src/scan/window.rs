//! Centered windowed average over one gradient row.
//!
//! The half-width is `width / 2` (floor), computed once. An index `i` is
//! inside the valid zone when `half <= i < len - half`; there the output is
//! the mean of the `width` samples starting at `i - half`. Everywhere else
//! the output is exactly zero.
//!
//! Each window is summed on its own in f64. A large sample only affects the
//! means of the windows that contain it.
use crate::error::{EdgeError, Result};
use std::ops::Range;

/// Indices of a row of length `len` that receive a windowed mean.
#[inline]
pub fn valid_zone(len: usize, width: usize) -> Range<usize> {
    let half = width / 2;
    half..len.saturating_sub(half).max(half)
}

/// Smooth `row` with a centered window of `width` samples.
///
/// Fails with `InvalidParameter` when `width` is zero or longer than the row.
pub fn smooth_row(row: &[f32], width: usize) -> Result<Vec<f32>> {
    if width == 0 || width > row.len() {
        return Err(EdgeError::InvalidParameter(format!(
            "window width {width} must be in 1..={}",
            row.len()
        )));
    }
    let mut out = Vec::with_capacity(row.len());
    smooth_row_into(row, width, &mut out);
    Ok(out)
}

/// Unchecked variant writing into a reusable buffer. Requires `1 <= width <= row.len()`.
pub(crate) fn smooth_row_into(row: &[f32], width: usize, out: &mut Vec<f32>) {
    out.clear();
    out.resize(row.len(), 0.0);

    let zone = valid_zone(row.len(), width);
    let n = width as f64;
    for (dst, window) in out[zone].iter_mut().zip(row.windows(width)) {
        let sum: f64 = window.iter().map(|&v| f64::from(v)).sum();
        *dst = (sum / n) as f32;
    }
}

/// Index of the largest `|value|` inside `zone`; the left-most wins on ties.
pub fn argmax_abs(values: &[f32], zone: Range<usize>) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for i in zone {
        let mag = values.get(i)?.abs();
        if best.map_or(true, |(_, top)| mag > top) {
            best = Some((i, mag));
        }
    }
    best.map(|(i, _)| i)
}
