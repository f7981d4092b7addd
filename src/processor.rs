use std::ffi::OsString;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Config;
use crate::detector::{find_archive, is_marked};
use crate::error::Result;
use crate::extractor::{extract, write_marker};

/// Terminal state reached by a single directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirOutcome {
    NoArchive,
    /// Archive present but the marker file already exists
    Skipped(OsString),
    /// Tool exited successfully and the marker was written
    Extracted(OsString),
    /// Tool exited with a failure status, no marker written
    Failed(OsString),
}

#[derive(Debug, Default)]
pub struct ScanStats {
    pub directories: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Archive paths handed to the extraction tool that exited successfully
    pub extracted: Vec<PathBuf>,
}

pub struct Processor<'a> {
    config: &'a Config,
    stats: ScanStats,
}

impl<'a> Processor<'a> {
    pub fn new(config: &'a Config) -> Self {
        Processor {
            config,
            stats: ScanStats::default(),
        }
    }

    /// Walk the scan root, extracting every unmarked archive directory
    ///
    /// Stops at the first spawn or marker error. Directory symlinks are not
    /// followed, so link cycles cannot be entered.
    pub fn run(mut self) -> Result<ScanStats> {
        println!("Scanning directory: {}", self.config.scan_root.display());

        for entry_result in WalkDir::new(&self.config.scan_root)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    if let Some(path) = err.path() {
                        eprintln!("Warning: Failed to access {}: {}", path.display(), err);
                    } else {
                        eprintln!("Warning: WalkDir error: {}", err);
                    }
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }

            self.stats.directories += 1;
            let outcome = self.process_directory(entry.path())?;
            self.record(entry.path(), outcome);
        }

        self.print_summary();
        Ok(self.stats)
    }

    /// Detect, check the marker, extract, then mark
    pub fn process_directory(&self, dir: &Path) -> Result<DirOutcome> {
        let candidate = match find_archive(dir, &self.config.registry) {
            Some(c) => c,
            None => {
                tracing::trace!(dir = %dir.display(), "no archive");
                return Ok(DirOutcome::NoArchive);
            }
        };
        let name = candidate.file_name;

        if is_marked(dir, &self.config.marker_name) {
            println!("Skipping archive {}", name.to_string_lossy());
            return Ok(DirOutcome::Skipped(name));
        }

        println!("Need to extract: {}", name.to_string_lossy());
        let outcome = extract(&self.config.tool, dir, &name)?;

        if !outcome.succeeded() {
            eprintln!(
                "Warning: {} exited with {} for {}, directory left unmarked",
                self.config.tool.name,
                outcome.status,
                dir.join(&name).display()
            );
            return Ok(DirOutcome::Failed(name));
        }

        write_marker(dir, &self.config.marker_name)?;
        println!("{} file created", self.config.marker_name);

        Ok(DirOutcome::Extracted(name))
    }

    fn record(&mut self, dir: &Path, outcome: DirOutcome) {
        match outcome {
            DirOutcome::NoArchive => {}
            DirOutcome::Skipped(_) => self.stats.skipped += 1,
            DirOutcome::Extracted(name) => self.stats.extracted.push(dir.join(name)),
            DirOutcome::Failed(_) => self.stats.failed += 1,
        }
    }

    fn print_summary(&self) {
        println!();
        println!("=== SCAN COMPLETE ===");
        println!("Directories scanned: {}", self.stats.directories);
        println!("Extracted: {}", self.stats.extracted.len());
        println!("Skipped (already extracted): {}", self.stats.skipped);
        println!("Failed: {}", self.stats.failed);
    }
}
