use edge_scanner::config::scan::{load_config, ScanToolConfig};
use edge_scanner::image::io::{load_image, save_gradient_image, write_json_file};
use edge_scanner::{EdgeScan, EdgeScanner};
use log::info;
use serde::Serialize;
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config: ScanToolConfig = load_config(Path::new(&config_path))?;

    let decoded = load_image(&config.input, config.color_mode)?;
    info!(
        "Loaded {} ({}x{})",
        config.input.display(),
        decoded.width(),
        decoded.height()
    );
    let mut gray = decoded.into_gray();
    if let Some(roi) = config.crop {
        gray = gray.crop(roi.x, roi.y, roi.width, roi.height)?;
        info!(
            "Cropped to {}x{} at ({}, {})",
            roi.width, roi.height, roi.x, roi.y
        );
    }

    let scanner = EdgeScanner::new(config.scan.to_scan_params());
    let (scan, grad) = scanner.scan_with_gradient(&gray, config.scan.parallel)?;

    if let Some(path) = &config.output.gradient_image {
        save_gradient_image(&grad, path)?;
        println!("Saved gradient image to {}", path.display());
    }

    let summary = EdgeScanSummary {
        input: config.input.clone(),
        width: gray.w,
        height: gray.h,
        edge_count: scan.edges.len(),
        scan: &scan,
    };
    write_json_file(&config.output.edges_json, &summary)?;

    if let Some(edge) = scan.strongest() {
        println!(
            "Strongest edge: row {} column {} magnitude {:.3}",
            edge.source_row(),
            edge.column,
            edge.magnitude
        );
    }
    println!(
        "Saved {} edges to {} (gradient {:.3} ms, scan {:.3} ms)",
        summary.edge_count,
        config.output.edges_json.display(),
        scan.gradient_ms,
        scan.scan_ms
    );

    Ok(())
}

fn usage() -> String {
    "Usage: find_edges <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EdgeScanSummary<'a> {
    input: PathBuf,
    width: usize,
    height: usize,
    edge_count: usize,
    scan: &'a EdgeScan,
}
