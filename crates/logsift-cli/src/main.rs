use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use logsift_cli::commands;

#[derive(Parser)]
#[command(name = "logsift")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Summarize web-server access logs into per-file JSON reports",
    long_about = "Logsift parses common-log-style access logs, counts request methods, ranks \
                  client addresses by request volume and requests by duration, and writes a \
                  JSON report next to each input file."
)]
struct Cli {
    /// Log file or directory of log files (prompted on stdin when omitted)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let path = match cli.path {
        Some(path) => path,
        None => prompt_for_path()?,
    };

    commands::report::execute(&path)
}

fn prompt_for_path() -> Result<PathBuf> {
    print!("Path to a log file or directory: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(PathBuf::from(line.trim()))
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("logsift=debug,logsift_cli=debug,logsift_core=debug")
    } else {
        EnvFilter::new("logsift=info,logsift_cli=info,logsift_core=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
