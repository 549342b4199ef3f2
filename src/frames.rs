//! Video frames as numbered image files.
//!
//! Extraction is delegated to the `ffmpeg` command line, which writes one
//! image per decoded frame (`Frame0.jpg`, `Frame1.jpg`, ...). Blocks of those
//! files can then be decoded back with [`load_frame_block`].
use crate::error::{EdgeError, Result};
use crate::image::io::{load_image, ColorMode, DecodedImage};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Longest ffmpeg stderr excerpt kept in an error.
const STDERR_EXCERPT_CHARS: usize = 500;

/// File naming of extracted frames: `<prefix><index>.<extension>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameNaming {
    pub prefix: String,
    pub extension: String,
}

impl Default for FrameNaming {
    fn default() -> Self {
        Self {
            prefix: "Frame".to_string(),
            extension: "jpg".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameExtractOptions {
    /// Executable to run, looked up on the PATH when not absolute
    pub ffmpeg: PathBuf,
    pub naming: FrameNaming,
}

impl Default for FrameExtractOptions {
    fn default() -> Self {
        Self {
            ffmpeg: PathBuf::from("ffmpeg"),
            naming: FrameNaming::default(),
        }
    }
}

/// Path of frame `index` inside `dir`.
pub fn frame_path(dir: &Path, naming: &FrameNaming, index: usize) -> PathBuf {
    dir.join(format!("{}{index}.{}", naming.prefix, naming.extension))
}

/// Write every frame of `video` into `output_dir` and return the written paths in frame order.
///
/// Frame files already in `output_dir` under the same naming are deleted first.
pub fn extract_frames(
    video: &Path,
    output_dir: &Path,
    opts: &FrameExtractOptions,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir).map_err(|e| EdgeError::io(output_dir, e))?;
    let stale = remove_frames(output_dir, &opts.naming)?;
    if stale > 0 {
        debug!(
            "extract_frames: removed {stale} old frames from {}",
            output_dir.display()
        );
    }

    let pattern = output_dir.join(format!(
        "{}%d.{}",
        opts.naming.prefix, opts.naming.extension
    ));

    #[rustfmt::skip]
    let args = [
        OsStr::new("-hide_banner"),
        OsStr::new("-loglevel"),     OsStr::new("error"),
        OsStr::new("-nostats"),
        OsStr::new("-y"),
        OsStr::new("-i"),            video.as_os_str(),
        OsStr::new("-start_number"), OsStr::new("0"),
        pattern.as_os_str(),
    ];
    debug!("extract_frames: {} {:?}", opts.ffmpeg.display(), args);

    let output = Command::new(&opts.ffmpeg)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => EdgeError::FfmpegNotFound,
            _ => EdgeError::io(&opts.ffmpeg, e),
        })?;

    if !output.status.success() {
        let text = String::from_utf8_lossy(&output.stderr);
        return Err(EdgeError::FrameExtraction(
            text.chars().take(STDERR_EXCERPT_CHARS).collect(),
        ));
    }

    let written = collect_sequential_frames(output_dir, &opts.naming);
    if written.is_empty() {
        return Err(EdgeError::FrameExtraction(format!(
            "ffmpeg decoded no frames from {}",
            video.display()
        )));
    }
    info!(
        "extracted {} frames from {} into {}",
        written.len(),
        video.display(),
        output_dir.display()
    );
    Ok(written)
}

/// Index of a file named `<prefix><index>.<extension>`.
fn frame_index(file_name: &str, naming: &FrameNaming) -> Option<usize> {
    let digits = file_name
        .strip_prefix(naming.prefix.as_str())?
        .strip_suffix(naming.extension.as_str())?
        .strip_suffix('.')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Delete every frame file in `dir`, gaps included. Returns how many were removed.
fn remove_frames(dir: &Path, naming: &FrameNaming) -> Result<usize> {
    let mut removed = 0;
    for entry in fs::read_dir(dir).map_err(|e| EdgeError::io(dir, e))? {
        let entry = entry.map_err(|e| EdgeError::io(dir, e))?;
        let is_frame = entry
            .file_name()
            .to_str()
            .and_then(|name| frame_index(name, naming))
            .is_some();
        if is_frame && entry.path().is_file() {
            let path = entry.path();
            fs::remove_file(&path).map_err(|e| EdgeError::io(&path, e))?;
            removed += 1;
        }
    }
    Ok(removed)
}

/// Existing frame files `0, 1, 2, ...` up to the first gap.
pub fn collect_sequential_frames(dir: &Path, naming: &FrameNaming) -> Vec<PathBuf> {
    (0..)
        .map(|i| frame_path(dir, naming, i))
        .take_while(|p| p.is_file())
        .collect()
}

/// Decode frames `range` (inclusive) from `dir`.
pub fn load_frame_block(
    dir: &Path,
    range: RangeInclusive<usize>,
    mode: ColorMode,
    naming: &FrameNaming,
) -> Result<Vec<DecodedImage>> {
    let (first, last) = (*range.start(), *range.end());
    if first > last {
        return Err(EdgeError::InvalidParameter(format!(
            "frame block {first}..={last} is empty"
        )));
    }
    range
        .map(|i| load_image(&frame_path(dir, naming, i), mode))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "edge_scanner_frames_{name}_{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_frames(dir: &Path, naming: &FrameNaming, count: usize) {
        for i in 0..count {
            let img = GrayImage::from_pixel(4, 3, Luma([(i * 10) as u8]));
            img.save(frame_path(dir, naming, i)).unwrap();
        }
    }

    #[test]
    fn frame_path_uses_prefix_and_extension() {
        let naming = FrameNaming::default();
        assert_eq!(
            frame_path(Path::new("Frames"), &naming, 3893),
            PathBuf::from("Frames/Frame3893.jpg")
        );
    }

    #[test]
    fn sequential_frames_stop_at_first_gap() {
        let dir = scratch_dir("gap");
        let naming = FrameNaming {
            prefix: "f".to_string(),
            extension: "png".to_string(),
        };
        write_frames(&dir, &naming, 3);
        fs::remove_file(frame_path(&dir, &naming, 1)).unwrap();
        assert_eq!(collect_sequential_frames(&dir, &naming).len(), 1);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn frame_block_is_inclusive() {
        let dir = scratch_dir("block");
        let naming = FrameNaming {
            prefix: "Frame".to_string(),
            extension: "png".to_string(),
        };
        write_frames(&dir, &naming, 4);

        let block = load_frame_block(&dir, 1..=3, ColorMode::Grayscale, &naming).unwrap();
        assert_eq!(block.len(), 3);
        let last = block.into_iter().last().unwrap().into_gray();
        assert_eq!(last.get(0, 0), 30.0);

        #[allow(clippy::reversed_empty_ranges)]
        let err = load_frame_block(&dir, 3..=1, ColorMode::Grayscale, &naming).unwrap_err();
        assert!(matches!(err, EdgeError::InvalidParameter(_)));

        let err = load_frame_block(&dir, 2..=5, ColorMode::Grayscale, &naming).unwrap_err();
        assert!(matches!(err, EdgeError::Decode { .. }));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn missing_ffmpeg_is_reported() {
        let dir = scratch_dir("noffmpeg");
        let opts = FrameExtractOptions {
            ffmpeg: PathBuf::from("/nonexistent/bin/ffmpeg-missing"),
            ..Default::default()
        };
        let err = extract_frames(Path::new("clip.mov"), &dir, &opts).unwrap_err();
        assert!(matches!(err, EdgeError::FfmpegNotFound));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn frame_index_matches_only_numbered_frames() {
        let naming = FrameNaming::default();
        assert_eq!(frame_index("Frame0.jpg", &naming), Some(0));
        assert_eq!(frame_index("Frame271.jpg", &naming), Some(271));
        assert_eq!(frame_index("Frame.jpg", &naming), None);
        assert_eq!(frame_index("Frame-1.jpg", &naming), None);
        assert_eq!(frame_index("Frame1.png", &naming), None);
        assert_eq!(frame_index("Frame1jpg", &naming), None);
        assert_eq!(frame_index("notes.txt", &naming), None);
    }

    #[cfg(unix)]
    #[test]
    fn frames_from_an_earlier_run_are_not_reported() {
        let dir = scratch_dir("stale");
        let naming = FrameNaming::default();
        write_frames(&dir, &naming, 3);
        fs::write(frame_path(&dir, &naming, 7), b"gap").unwrap();
        fs::write(dir.join("notes.txt"), b"keep").unwrap();

        // `true` exits successfully without writing anything
        let opts = FrameExtractOptions {
            ffmpeg: PathBuf::from("true"),
            naming: naming.clone(),
        };
        let err = extract_frames(Path::new("clip.mov"), &dir, &opts).unwrap_err();
        assert!(matches!(err, EdgeError::FrameExtraction(_)), "got {err:?}");
        assert!(collect_sequential_frames(&dir, &naming).is_empty());
        assert!(!frame_path(&dir, &naming, 7).exists());
        assert!(dir.join("notes.txt").is_file());
        fs::remove_dir_all(dir).ok();
    }
}
