//! JSON configuration files for the command-line tools.
pub mod frames;
pub mod scan;

use crate::error::{EdgeError, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub(crate) fn read_json_config<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path).map_err(|e| EdgeError::Config {
        path: path.to_path_buf(),
        message: format!("failed to read: {e}"),
    })?;
    serde_json::from_str(&data).map_err(|e| EdgeError::Config {
        path: path.to_path_buf(),
        message: format!("failed to parse: {e}"),
    })
}
