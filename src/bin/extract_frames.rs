use edge_scanner::config::frames;
use edge_scanner::frames::extract_frames;
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = frames::load_config(Path::new(&config_path))?;

    let written = extract_frames(
        &config.video,
        &config.output_dir,
        &config.to_extract_options(),
    )?;
    if let (Some(first), Some(last)) = (written.first(), written.last()) {
        println!(
            "Wrote {} frames ({} .. {})",
            written.len(),
            first.display(),
            last.display()
        );
    }
    Ok(())
}

fn usage() -> String {
    "Usage: extract_frames <config.json>".to_string()
}
