use clap::Parser;
use std::path::PathBuf;

use crate::{BookbotConfig, OutputFormat, Result};

#[derive(Parser, Debug)]
#[command(name = "bookbot")]
#[command(about = "Bookbot - counts the words in a book and tallies how often each letter appears")]
#[command(version)]
pub struct Cli {
  /// The file to analyze [default: books/frankenstein.txt]
  #[arg(value_name = "PATH")]
  pub path: Option<PathBuf>,

  /// Output format
  #[arg(short, long, value_enum)]
  pub format: Option<OutputFormat>,

  /// Configuration file path (otherwise .bookbot.json or bookbot.json if present)
  #[arg(short, long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Enable verbose logging on stderr
  #[arg(short, long)]
  pub verbose: bool,
}

impl Cli {
  /// Merge the config file (if any) with command-line overrides.
  pub fn resolve_config(&self) -> Result<BookbotConfig> {
    let mut config = match &self.config {
      Some(path) => BookbotConfig::load_from_file(path)?,
      None => BookbotConfig::load()?,
    };

    if let Some(path) = &self.path {
      config.path = path.clone();
    }
    if let Some(format) = self.format {
      config.format = format;
    }

    Ok(config)
  }

  /// Log filter used when `RUST_LOG` is not set
  pub fn log_directive(&self) -> &'static str {
    if self.verbose {
      "bookbot=debug"
    } else {
      "bookbot=warn"
    }
  }
}
