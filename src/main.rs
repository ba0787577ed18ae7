#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use ipe::cli::Args;
use ipe::{render_listing, terminal};
use std::io::Write;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("ipe: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    init_logging(args.verbose, args.quiet);

    let mut config = args.into_config();
    if config.width.is_none() && config.needs_width() {
        let width = terminal::terminal_width().context("failed to determine terminal width")?;
        config.width = Some(width as usize);
    }

    let output = render_listing(&config);

    let mut stdout = terminal::buffered_stdout();
    stdout
        .write_all(output.as_bytes())
        .and_then(|_| stdout.flush())
        .context("failed to write listing")?;
    Ok(())
}

/// Diagnostics go to stderr. `RUST_LOG` overrides the `-v`/`-q` level.
fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
