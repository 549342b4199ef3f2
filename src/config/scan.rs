use super::read_json_config;
use crate::error::Result;
use crate::image::ColorMode;
use crate::scan::{ScanParams, DEFAULT_WINDOW_WIDTH};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ScanToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    /// Decoding mode; color inputs are converted to grayscale before scanning.
    #[serde(default)]
    pub color_mode: ColorMode,
    /// Region of interest applied after decoding.
    #[serde(default)]
    pub crop: Option<CropConfig>,
    #[serde(default)]
    pub scan: ScanConfig,
    pub output: ScanOutputConfig,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct CropConfig {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Number of strongest rows to report.
    pub num_edges: usize,
    /// Smoothing window width in pixels.
    pub window_width: usize,
    /// Run the per-row stage on the rayon pool.
    pub parallel: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            num_edges: 1,
            window_width: DEFAULT_WINDOW_WIDTH,
            parallel: false,
        }
    }
}

impl ScanConfig {
    pub fn to_scan_params(&self) -> ScanParams {
        ScanParams {
            num_edges: self.num_edges,
            window_width: self.window_width,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ScanOutputConfig {
    #[serde(rename = "edges_json")]
    pub edges_json: PathBuf,
    /// Optional PNG of |gradient| normalized to its maximum.
    #[serde(default)]
    pub gradient_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<ScanToolConfig> {
    read_json_config(path)
}
