use super::read_json_config;
use crate::error::Result;
use crate::frames::{FrameExtractOptions, FrameNaming};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct FrameToolConfig {
    pub video: PathBuf,
    pub output_dir: PathBuf,
    #[serde(default = "default_ffmpeg")]
    pub ffmpeg: PathBuf,
    #[serde(default)]
    pub naming: FrameNaming,
}

fn default_ffmpeg() -> PathBuf {
    FrameExtractOptions::default().ffmpeg
}

impl FrameToolConfig {
    pub fn to_extract_options(&self) -> FrameExtractOptions {
        FrameExtractOptions {
            ffmpeg: self.ffmpeg.clone(),
            naming: self.naming.clone(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<FrameToolConfig> {
    read_json_config(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_frame_naming() {
        let cfg: FrameToolConfig =
            serde_json::from_str(r#"{ "video": "DSC_1690.MOV", "output_dir": "Frames" }"#)
                .unwrap();
        let opts = cfg.to_extract_options();
        assert_eq!(opts, FrameExtractOptions::default());
        assert_eq!(opts.naming.prefix, "Frame");
    }

    #[test]
    fn naming_can_be_overridden_partially() {
        let cfg: FrameToolConfig = serde_json::from_str(
            r#"{ "video": "a.mov", "output_dir": "out", "naming": { "extension": "png" } }"#,
        )
        .unwrap();
        assert_eq!(cfg.naming.prefix, "Frame");
        assert_eq!(cfg.naming.extension, "png");
    }
}
