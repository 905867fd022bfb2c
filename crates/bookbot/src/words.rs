/// Number of whitespace-separated words in `text`.
///
/// Runs of whitespace count as a single separator and leading or trailing
/// whitespace is ignored, so empty and all-whitespace input yields zero.
pub fn count_words(text: &str) -> usize {
  text.split(is_separator).filter(|word| !word.is_empty()).count()
}

/// Unicode whitespace plus the ASCII file, group, record and unit separators
fn is_separator(c: char) -> bool {
  c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
