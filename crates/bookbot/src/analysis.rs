//! Runs the loader, word counter and letter tally over one book

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::{count_words, Document, FrequencyTable, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterCount {
  pub letter: char,
  pub count: usize,
}

/// Everything the report needs, computed up front
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookAnalysis {
  pub path: PathBuf,
  pub word_count: usize,
  /// Ascending by letter; letters that never occur are left out
  pub letters: Vec<LetterCount>,
}

impl BookAnalysis {
  pub fn from_document(document: &Document) -> Self {
    let text = document.text();
    let table = FrequencyTable::from_text(text);

    let letters =
      table.sorted().into_iter().map(|(letter, count)| LetterCount { letter, count }).collect();

    Self { path: document.path().to_path_buf(), word_count: count_words(text), letters }
  }
}

/// Load the file at `path` and analyze it.
pub fn analyze<P: AsRef<Path>>(path: P) -> Result<BookAnalysis> {
  let document = Document::load(path)?;
  let analysis = BookAnalysis::from_document(&document);

  tracing::info!(
    path = %analysis.path.display(),
    words = analysis.word_count,
    distinct_letters = analysis.letters.len(),
    "analyzed document"
  );

  Ok(analysis)
}
