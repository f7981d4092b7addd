use std::ffi::OsString;
use std::path::Path;
use walkdir::WalkDir;

use crate::extensions::{has_suffix, ArchiveKind, Registry};

/// Archive chosen for extraction in a single directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveCandidate {
    pub file_name: OsString,
    pub kind: ArchiveKind,
}

/// Pick the archive to extract from the immediate files of `dir`
///
/// Only one archive group per directory is supported. Suffixes are tried in
/// registry order, so a `.rar` beats a `.r01` or `.zip` next to it. Between
/// files with the same suffix the directory listing order decides, which the
/// operating system does not guarantee to be stable.
///
/// Symlinks to files count as files. A directory that cannot be listed yields
/// no candidate; the walker reports the failure.
pub fn find_archive(dir: &Path, registry: &Registry) -> Option<ArchiveCandidate> {
    let file_names = list_file_names(dir);

    for suffix in registry.suffixes() {
        if let Some(name) = file_names.iter().find(|name| has_suffix(name, suffix)) {
            let kind = registry.classify(name)?;
            return Some(ArchiveCandidate {
                file_name: name.clone(),
                kind,
            });
        }
    }

    None
}

/// Whether `dir` already carries the marker file
pub fn is_marked(dir: &Path, marker_name: &str) -> bool {
    dir.join(marker_name).exists()
}

fn list_file_names(dir: &Path) -> Vec<OsString> {
    let mut names = Vec::new();

    for entry_result in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                tracing::debug!(dir = %dir.display(), error = %err, "failed to list entry");
                continue;
            }
        };

        // Follows symlinks, unlike the entry's own file type
        if !entry.path().is_file() {
            continue;
        }

        names.push(entry.file_name().to_os_string());
    }

    names
}
