use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::process::{Command, ExitStatus};

use crate::error::{Error, Result};
use crate::locator::Tool;

/// Extract-with-overwrite switch understood by the extraction tool
const EXTRACT_SWITCH: &str = "e";

/// Outcome of a tool run that was successfully spawned
#[derive(Debug, Clone, Copy)]
pub struct ExtractionOutcome {
    pub status: ExitStatus,
}

impl ExtractionOutcome {
    pub fn succeeded(&self) -> bool {
        self.status.success()
    }
}

/// Build `<tool> e <dir/archive> <dir>`, extracting in place
pub fn build_command(tool: &Tool, dir: &Path, archive_name: &OsStr) -> Command {
    let mut cmd = Command::new(&tool.path);

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.arg0(&tool.name);
    }

    cmd.arg(EXTRACT_SWITCH).arg(dir.join(archive_name)).arg(dir);
    cmd
}

/// Run the extraction tool and wait for it to exit
///
/// A failure to start the tool is an error; a non-zero exit is not and is
/// reported through the returned outcome.
pub fn extract(tool: &Tool, dir: &Path, archive_name: &OsStr) -> Result<ExtractionOutcome> {
    let mut cmd = build_command(tool, dir, archive_name);
    tracing::debug!(command = ?cmd, "running extraction tool");

    let status = cmd.status().map_err(|source| Error::Spawn {
        tool: tool.path.clone(),
        source,
    })?;

    Ok(ExtractionOutcome { status })
}

/// Create the zero-byte marker file in `dir`
pub fn write_marker(dir: &Path, marker_name: &str) -> Result<()> {
    let path = dir.join(marker_name);
    fs::File::create(&path).map_err(|source| Error::Marker { path, source })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn tool_at(path: PathBuf) -> Tool {
        Tool {
            name: "unrar".to_string(),
            path,
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_build_command_arguments() {
        let tool = tool_at(PathBuf::from("/opt/bin/unrar"));
        let dir = Path::new("/data/movieA");
        let cmd = build_command(&tool, dir, OsStr::new("film.rar"));

        assert_eq!(cmd.get_program(), OsStr::new("/opt/bin/unrar"));
        let args: Vec<&OsStr> = cmd.get_args().collect();
        assert_eq!(
            args,
            vec![
                OsStr::new("e"),
                OsStr::new("/data/movieA/film.rar"),
                OsStr::new("/data/movieA"),
            ]
        );
    }

    #[test]
    fn test_extract_spawn_failure() {
        let dir = tempfile::tempdir().unwrap();
        let tool = tool_at(dir.path().join("missing-unrar"));

        match extract(&tool, dir.path(), OsStr::new("film.rar")) {
            Err(Error::Spawn { tool: path, .. }) => assert_eq!(path, dir.path().join("missing-unrar")),
            other => panic!("expected Spawn error, got {:?}", other),
        }
    }

    #[test]
    fn test_write_marker_creates_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        write_marker(dir.path(), ".unrared").unwrap();

        let metadata = fs::metadata(dir.path().join(".unrared")).unwrap();
        assert!(metadata.is_file());
        assert_eq!(metadata.len(), 0);
    }

    #[test]
    fn test_write_marker_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");

        assert!(matches!(
            write_marker(&missing, ".unrared"),
            Err(Error::Marker { .. })
        ));
    }
}
