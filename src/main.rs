//! json2tables CLI
//!
//! Command-line interface for converting JSON files into table files

use clap::Parser;
use json2tables::cli::{log_filter, Cli, Runner};

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run() {
        eprintln!("Error: {e}");
        let code = if e.is_usage_error() { 2 } else { 1 };
        std::process::exit(code);
    }
}
