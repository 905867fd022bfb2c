//! Case-insensitive letter frequencies
//!
//! Only the 26 ASCII letters are counted. Characters are folded with ASCII
//! lowercasing, so accented and non-Latin letters are skipped, as is anything
//! that would only become an ASCII letter under full Unicode case folding
//! (for example the Kelvin sign).

use std::collections::HashMap;

/// Occurrence counts per lowercase letter `a`..=`z`.
///
/// Letters that never occur have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
  counts: HashMap<char, usize>,
}

impl FrequencyTable {
  pub fn from_text(text: &str) -> Self {
    let mut counts = HashMap::new();

    for c in text.chars() {
      let c = c.to_ascii_lowercase();
      if !c.is_ascii_lowercase() {
        continue;
      }
      *counts.entry(c).or_insert(0) += 1;
    }

    Self { counts }
  }

  /// Count for `letter`, which is folded the same way as the text was.
  pub fn get(&self, letter: char) -> Option<usize> {
    self.counts.get(&letter.to_ascii_lowercase()).copied()
  }

  /// Number of distinct letters seen
  pub fn len(&self) -> usize {
    self.counts.len()
  }

  pub fn is_empty(&self) -> bool {
    self.counts.is_empty()
  }

  /// The table as `(letter, count)` pairs in ascending letter order.
  pub fn sorted(&self) -> Vec<(char, usize)> {
    let mut pairs: Vec<(char, usize)> = self.counts.iter().map(|(&c, &n)| (c, n)).collect();
    pairs.sort_unstable_by_key(|&(c, _)| c);
    pairs
  }
}

/// Tally `text` and return the sorted `(letter, count)` pairs.
pub fn count_characters(text: &str) -> Vec<(char, usize)> {
  FrequencyTable::from_text(text).sorted()
}
