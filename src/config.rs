use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::extensions::Registry;
use crate::locator::Tool;

/// Hidden file written into a directory once its archive has been extracted
pub const MARKER_FILE_NAME: &str = ".unrared";

/// Settings for a single scan, built once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub scan_root: PathBuf,
    pub marker_name: String,
    pub registry: Registry,
    pub tool: Tool,
}

impl Config {
    /// Validate the scan root and combine it with the located tool
    pub fn new(scan_root: &Path, tool: Tool) -> Result<Self> {
        if !scan_root.is_dir() {
            return Err(Error::NotADirectory(scan_root.to_path_buf()));
        }

        let scan_root = std::path::absolute(scan_root)?;

        Ok(Config {
            scan_root,
            marker_name: MARKER_FILE_NAME.to_string(),
            registry: Registry::new(),
            tool,
        })
    }
}
