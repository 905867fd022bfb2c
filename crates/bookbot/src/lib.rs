//! Word count and letter frequency reporting for plain-text books

pub mod analysis;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod report;
pub mod tally;
pub mod words;

pub use analysis::{analyze, BookAnalysis, LetterCount};
pub use config::{BookbotConfig, OutputFormat};
pub use document::Document;
pub use error::{BookbotError, Result};
pub use report::{format_report, Report};
pub use tally::{count_characters, FrequencyTable};
pub use words::count_words;
