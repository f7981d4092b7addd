use clap::Parser;
use std::path::PathBuf;

/// Recursively scan a download directory and extract archives in place
///
/// Each directory whose archive was extracted gets a hidden `.unrared` file;
/// delete it to force the archive to be extracted again on the next run.
#[derive(Debug, Parser)]
#[command(name = "auto_extract", about, arg_required_else_help = true)]
pub struct Args {
    /// Directory to scan for archives
    #[arg(value_name = "DOWNLOAD_DIR")]
    pub download_dir: PathBuf,
}
