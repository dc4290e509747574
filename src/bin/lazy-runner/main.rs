use std::path::PathBuf;

use clap::Parser;

use lazy_runner::config_file::FsReader;
use lazy_runner::failure::{self, Failure};
use lazy_runner::selector::InquirePrompter;

#[derive(Parser, Debug)]
#[command(
    name = "lazy-runner",
    version,
    about = "Select and run one of the configured commands"
)]
struct Cli {
    /// Path to settings file (defaults to ~/.config/lazy-runner/settings.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file path (mirrors all log output to a file)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        std::process::exit(failure::report(&e));
    }
}

#[tokio::main(flavor = "current_thread")]
async fn run() -> Result<(), Failure> {
    let cli = Cli::parse();

    // The logger must exist before any failure can be reported
    match cli.log_file.as_ref().map(std::fs::File::create).transpose() {
        Ok(log_file) => lazy_runner::logger::init(log_file),
        Err(e) => {
            lazy_runner::logger::init(None);
            return Err(e.into());
        }
    }

    lazy_runner::execute(cli.config.as_deref(), &FsReader, &mut InquirePrompter).await
}
