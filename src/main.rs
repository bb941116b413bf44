//! CLI entry point for the staged preprocessing pipeline

use clap::Parser;
use lithoprep::io::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> lithoprep::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet);
    lithoprep::pipeline::run(&cli)
}

// Quiet mode keeps error reporting but drops informational output
fn init_tracing(quiet: bool) {
    let default_directive = if quiet { "error" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
