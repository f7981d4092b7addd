use auto_extract::args::Args;
use auto_extract::config::Config;
use auto_extract::locator::Tool;
use auto_extract::processor::Processor;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Parse command line arguments (prints usage and exits when none given)
    let args = Args::parse();

    // Locate the extraction tool before touching the scan root
    let tool = Tool::locate()?;

    let config = Config::new(&args.download_dir, tool)?;

    Processor::new(&config).run()?;

    Ok(())
}
