//! Row-wise horizontal edge scan.
//!
//! Pipeline per image:
//!
//! 1. `GradientField::compute` takes the vertical central difference.
//! 2. Each gradient row is smoothed with a centered window (`window`).
//! 3. The column with the largest |smoothed value| inside the valid window
//!    zone becomes the row's `EdgeCandidate`.
//! 4. Candidates are merged in row order into a `TopKEdges` of capacity
//!    `num_edges`.
//!
//! The merge is the only cross-row step. `scan_par` runs steps 2 and 3 on the
//! rayon pool and still merges sequentially, so both entry points return the
//! same edges.
//!
//! Complexity: O(W·H) for gradient and smoothing, O(H·K) for the merge.
pub mod topk;
pub mod types;
pub mod window;

pub use self::topk::TopKEdges;
pub use self::types::{EdgeCandidate, EdgeScan, ScanParams, DEFAULT_WINDOW_WIDTH};
pub use self::window::{argmax_abs, smooth_row, valid_zone};

use crate::error::{EdgeError, Result};
use crate::gradient::GradientField;
use crate::image::ImageF32;
use log::debug;
use rayon::prelude::*;
use std::ops::Range;
use std::time::Instant;

#[derive(Clone, Debug, Default)]
pub struct EdgeScanner {
    params: ScanParams,
}

impl EdgeScanner {
    pub fn new(params: ScanParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ScanParams {
        &self.params
    }

    /// Report the `num_edges` strongest rows of `image`, ascending by |magnitude|.
    pub fn scan(&self, image: &ImageF32) -> Result<EdgeScan> {
        self.run(image, false).map(|(scan, _)| scan)
    }

    /// Same result as [`scan`](Self::scan) with per-row work spread over rayon.
    pub fn scan_par(&self, image: &ImageF32) -> Result<EdgeScan> {
        self.run(image, true).map(|(scan, _)| scan)
    }

    /// Scan and hand back the gradient field the edges were taken from.
    pub fn scan_with_gradient(
        &self,
        image: &ImageF32,
        parallel: bool,
    ) -> Result<(EdgeScan, GradientField)> {
        self.run(image, parallel)
    }

    /// One candidate per gradient row, in row order.
    pub fn row_candidates(&self, image: &ImageF32) -> Result<Vec<EdgeCandidate>> {
        self.check_params()?;
        let grad = GradientField::compute(image)?;
        let zone = self.check_zone(&grad)?;
        Ok(row_candidates_seq(&grad, self.params.window_width, zone))
    }

    fn run(&self, image: &ImageF32, parallel: bool) -> Result<(EdgeScan, GradientField)> {
        self.check_params()?;

        let gradient_start = Instant::now();
        let grad = GradientField::compute(image)?;
        let gradient_ms = gradient_start.elapsed().as_secs_f64() * 1000.0;
        let zone = self.check_zone(&grad)?;

        let scan_start = Instant::now();
        let width = self.params.window_width;
        let candidates = if parallel {
            row_candidates_par(&grad, width, zone)
        } else {
            row_candidates_seq(&grad, width, zone)
        };
        let mut top = TopKEdges::new(self.params.num_edges)?;
        top.extend(candidates);
        let scan_ms = scan_start.elapsed().as_secs_f64() * 1000.0;

        debug!(
            "EdgeScanner::scan rows={} cols={} width={} kept={} strongest={:?} parallel={}",
            grad.rows(),
            grad.cols(),
            width,
            top.len(),
            top.strongest(),
            parallel
        );

        let scan = EdgeScan {
            edges: top.into_vec(),
            rows_scanned: grad.rows(),
            cols: grad.cols(),
            params: self.params,
            gradient_ms,
            scan_ms,
        };
        Ok((scan, grad))
    }

    fn check_params(&self) -> Result<()> {
        if self.params.num_edges == 0 {
            return Err(EdgeError::InvalidParameter(
                "number of edges must be at least 1".to_string(),
            ));
        }
        if self.params.window_width == 0 {
            return Err(EdgeError::InvalidParameter(
                "window width must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn check_zone(&self, grad: &GradientField) -> Result<Range<usize>> {
        let width = self.params.window_width;
        let cols = grad.cols();
        if cols < width {
            return Err(EdgeError::InvalidShape(format!(
                "image has {cols} columns, fewer than the window width {width}"
            )));
        }
        Ok(valid_zone(cols, width))
    }
}

fn row_candidate(
    grad: &GradientField,
    r: usize,
    width: usize,
    zone: &Range<usize>,
    scratch: &mut Vec<f32>,
) -> EdgeCandidate {
    window::smooth_row_into(grad.row(r), width, scratch);
    // An empty zone leaves an all-zero row; report its first column.
    let column = argmax_abs(scratch, zone.clone()).unwrap_or(0);
    EdgeCandidate {
        row: r,
        column,
        magnitude: scratch[column],
    }
}

fn row_candidates_seq(grad: &GradientField, width: usize, zone: Range<usize>) -> Vec<EdgeCandidate> {
    let mut scratch = Vec::with_capacity(grad.cols());
    (0..grad.rows())
        .map(|r| row_candidate(grad, r, width, &zone, &mut scratch))
        .collect()
}

fn row_candidates_par(grad: &GradientField, width: usize, zone: Range<usize>) -> Vec<EdgeCandidate> {
    (0..grad.rows())
        .into_par_iter()
        .map_init(
            || Vec::with_capacity(grad.cols()),
            |scratch, r| row_candidate(grad, r, width, &zone, scratch),
        )
        .collect()
}

/// Scan `image` for its `num_edges` strongest rows using a window of `window_width`.
pub fn scan_edges(image: &ImageF32, num_edges: usize, window_width: usize) -> Result<EdgeScan> {
    EdgeScanner::new(ScanParams {
        num_edges,
        window_width,
    })
    .scan(image)
}
