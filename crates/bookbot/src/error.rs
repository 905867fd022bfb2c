use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookbotError {
  #[error("Failed to read {}: {source}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("{} is not valid UTF-8 text: {source}", path.display())]
  Decode {
    path: PathBuf,
    #[source]
    source: std::string::FromUtf8Error,
  },

  #[error("Invalid config file {}: {message}", path.display())]
  Config { path: PathBuf, message: String },

  #[error("Failed to serialize report: {0}")]
  Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BookbotError>;
