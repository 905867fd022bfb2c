use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::io::Write;
use std::process;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use bookbot::{analyze, cli::Cli, format_report};

fn main() {
  let cli = Cli::parse();
  init_logging(&cli);

  if let Err(e) = run(&cli) {
    eprintln!("{} {}", "Error:".red().bold(), e);
    process::exit(1);
  }
}

fn init_logging(cli: &Cli) {
  // RUST_LOG wins over --verbose
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));

  tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();
}

fn run(cli: &Cli) -> Result<()> {
  let config = cli.resolve_config()?;
  tracing::debug!(path = %config.path.display(), format = ?config.format, "resolved config");

  let analysis = analyze(&config.path)?;
  let output = format_report(&analysis, &config.format)?;

  let mut stdout = std::io::stdout().lock();
  stdout.write_all(output.as_bytes()).context("Failed to write report")?;
  stdout.flush().context("Failed to write report")?;

  Ok(())
}
