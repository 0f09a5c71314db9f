//! Example integration test program for toylibrary.
//!
//! Run `toylibrary_test_program --help` to see options. Printed values go to stdout and
//! log events to stderr, so `RUST_LOG` never changes what lands on stdout.

use anyhow::Result;
use clap::Parser;
use toylibrary::test_program::{run, Options};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let options = Options::parse();
    let stdout = std::io::stdout();
    run(&options, &mut stdout.lock())?;
    Ok(())
}
