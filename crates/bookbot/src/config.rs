//! Configuration management for Bookbot
//!
//! Settings come from an optional JSON file and are overridden by the command
//! line. Every field has a built-in default, so an empty `{}` file is valid.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{BookbotError, Result};

/// Config files searched for, in order, when none is given explicitly
pub const CONFIG_FILE_NAMES: [&str; 2] = [".bookbot.json", "bookbot.json"];

pub const DEFAULT_BOOK_PATH: &str = "books/frankenstein.txt";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
  /// Human-readable line report
  #[default]
  Pretty,
  /// Pretty-printed JSON object
  Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookbotConfig {
  /// The file to analyze
  #[serde(default = "default_path")]
  pub path: PathBuf,
  #[serde(default)]
  pub format: OutputFormat,
}

fn default_path() -> PathBuf {
  PathBuf::from(DEFAULT_BOOK_PATH)
}

impl Default for BookbotConfig {
  fn default() -> Self {
    Self { path: default_path(), format: OutputFormat::default() }
  }
}

impl BookbotConfig {
  /// Load configuration from a file
  pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
      .map_err(|source| BookbotError::Io { path: path.to_path_buf(), source })?;

    serde_json::from_str(&content)
      .map_err(|e| BookbotError::Config { path: path.to_path_buf(), message: e.to_string() })
  }

  /// Load the first config file found in the current directory, or defaults
  pub fn load() -> Result<Self> {
    Self::load_from_dir(Path::new("."))
  }

  pub fn load_from_dir(dir: &Path) -> Result<Self> {
    for name in CONFIG_FILE_NAMES {
      let candidate = dir.join(name);
      if candidate.is_file() {
        tracing::debug!(config = %candidate.display(), "using config file");
        return Self::load_from_file(candidate);
      }
    }

    Ok(Self::default())
  }
}
