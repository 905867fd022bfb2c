//! Loading the book text into memory

use std::fs;
use std::path::{Path, PathBuf};

use crate::{BookbotError, Result};

/// The full text of the input file. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
  path: PathBuf,
  text: String,
}

impl Document {
  /// Read the whole file at `path`.
  ///
  /// Fails with [`BookbotError::Io`] when the file is missing, unreadable or a
  /// directory, and with [`BookbotError::Decode`] when it is not UTF-8.
  pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();

    let bytes =
      fs::read(path).map_err(|source| BookbotError::Io { path: path.to_path_buf(), source })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read document");

    let text = String::from_utf8(bytes)
      .map_err(|source| BookbotError::Decode { path: path.to_path_buf(), source })?;

    Ok(Self { path: path.to_path_buf(), text })
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn text(&self) -> &str {
    &self.text
  }
}
