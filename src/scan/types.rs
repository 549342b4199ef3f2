use serde::{Deserialize, Serialize};

/// Window width used when a caller does not pick one.
pub const DEFAULT_WINDOW_WIDTH: usize = 100;

/// Strongest smoothed vertical change found in one gradient row.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeCandidate {
    /// Gradient row index (source image row minus one)
    pub row: usize,
    /// Column of the window center with the largest |mean gradient|
    pub column: usize,
    /// Signed smoothed gradient at (row, column)
    pub magnitude: f32,
}

impl EdgeCandidate {
    /// Row of the source image the candidate lies on.
    #[inline]
    pub fn source_row(&self) -> usize {
        self.row + 1
    }

    /// Ranking key, `|magnitude|`.
    #[inline]
    pub fn strength(&self) -> f32 {
        self.magnitude.abs()
    }
}

/// Scanner parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScanParams {
    /// How many rows to keep (K)
    pub num_edges: usize,
    /// Smoothing window width in pixels
    pub window_width: usize,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            num_edges: 1,
            window_width: DEFAULT_WINDOW_WIDTH,
        }
    }
}

impl ScanParams {
    pub fn new(num_edges: usize) -> Self {
        Self {
            num_edges,
            ..Self::default()
        }
    }

    pub fn with_window_width(mut self, window_width: usize) -> Self {
        self.window_width = window_width;
        self
    }
}

/// Result of one scan: the retained edges plus shape and timing information.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeScan {
    /// Retained candidates, ascending by |magnitude| (strongest last)
    pub edges: Vec<EdgeCandidate>,
    /// Number of gradient rows visited
    pub rows_scanned: usize,
    /// Columns per row
    pub cols: usize,
    pub params: ScanParams,
    pub gradient_ms: f64,
    pub scan_ms: f64,
}

impl EdgeScan {
    /// The overall strongest edge.
    pub fn strongest(&self) -> Option<&EdgeCandidate> {
        self.edges.last()
    }
}
