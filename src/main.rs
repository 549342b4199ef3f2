use edge_scanner::image::ImageF32;
use edge_scanner::{EdgeScanner, ScanParams};

fn main() {
    // Demo stub: a synthetic bright band over a dark background, scanned for its edges
    let (w, h) = (320usize, 240usize);
    let mut img = ImageF32::new(w, h);
    for y in 80..160 {
        for x in 0..w {
            img.set(x, y, 200.0);
        }
    }

    let scanner = EdgeScanner::new(ScanParams::new(2).with_window_width(100));
    match scanner.scan(&img) {
        Ok(scan) => {
            for edge in scan.edges.iter().rev() {
                println!(
                    "row={} col={} magnitude={:.1}",
                    edge.source_row(),
                    edge.column,
                    edge.magnitude
                );
            }
            println!("latency_ms={:.3}", scan.gradient_ms + scan.scan_ms);
        }
        Err(err) => eprintln!("Error: {err}"),
    }
}
