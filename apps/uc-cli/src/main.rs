use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

mod error;
mod shell;

use error::ShellResult;
use shell::Shell;

#[derive(Parser)]
#[command(name = "uc-cli", version)]
#[command(about = "unitconv - interactive unit converter", long_about = None)]
struct Cli {}

fn main() -> ShellResult<()> {
    init_tracing();

    let _cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(stdin.lock(), stdout.lock()).run()
}

/// Logs go to stderr so they never mix with conversion output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
