#![doc = include_str!("../README.md")]

// Core: gradient field and row scanner.
pub mod gradient;
pub mod image;
pub mod scan;

// Errors, tool configs and frame I/O around the core.
pub mod config;
pub mod error;
pub mod frames;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{EdgeError, Result};
pub use crate::gradient::GradientField;
pub use crate::scan::{scan_edges, EdgeCandidate, EdgeScan, EdgeScanner, ScanParams, TopKEdges};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use edge_scanner::prelude::*;
/// use std::path::Path;
///
/// # fn main() -> edge_scanner::Result<()> {
/// let gray = load_grayscale(Path::new("Frames/Frame3893.jpg"))?;
/// let scan = EdgeScanner::new(ScanParams::new(5).with_window_width(100)).scan(&gray)?;
/// if let Some(edge) = scan.strongest() {
///     println!("row={} col={} magnitude={:.2}", edge.source_row(), edge.column, edge.magnitude);
/// }
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::io::load_grayscale;
    pub use crate::image::{ImageF32, ImageView};
    pub use crate::{EdgeCandidate, EdgeScan, EdgeScanner, GradientField, ScanParams};
}
