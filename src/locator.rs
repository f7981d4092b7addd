use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Platform family, decides the extraction tool's file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    pub fn executable_name(self) -> &'static str {
        match self {
            Platform::Windows => "UnRAR.exe",
            Platform::Unix => "unrar",
        }
    }
}

/// A located extraction tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    /// Bare executable name, passed as the first command-line token
    pub name: String,
    /// Full path to the executable
    pub path: PathBuf,
}

impl Tool {
    /// Locate the tool for the current platform on the process PATH
    pub fn locate() -> Result<Self> {
        let name = Platform::current().executable_name();
        let path_var = std::env::var_os("PATH").unwrap_or_default();
        Self::locate_in(&path_var, name)
    }

    /// Locate `name` in an explicit PATH-style list
    pub fn locate_in(path_var: &OsStr, name: &str) -> Result<Self> {
        let dir = find_tool_dir(path_var, name).ok_or_else(|| Error::ToolNotFound {
            name: name.to_string(),
        })?;

        println!("Found {} in {}", name, dir.display());

        Ok(Tool {
            name: name.to_string(),
            path: dir.join(name),
        })
    }
}

/// Return the first PATH entry whose listing contains `name`
///
/// Entries that do not exist or cannot be listed are skipped.
pub fn find_tool_dir(path_var: &OsStr, name: &str) -> Option<PathBuf> {
    std::env::split_paths(path_var).find(|dir| listing_contains(dir, name))
}

fn listing_contains(dir: &Path, name: &str) -> bool {
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "skipping PATH entry, not a directory");
        return false;
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "skipping unreadable PATH entry");
            return false;
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .any(|entry| entry.file_name() == name)
}
