//! Report rendering
//!
//! Output is built as a single `String` so that nothing reaches stdout unless
//! the whole analysis succeeded.

use crate::{BookAnalysis, LetterCount, OutputFormat, Result};

/// Ordered, human-readable report lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
  lines: Vec<String>,
}

impl Report {
  pub fn from_analysis(analysis: &BookAnalysis) -> Self {
    let mut lines = Vec::with_capacity(analysis.letters.len() + 3);

    lines.push(format!("--- Begin report of {} ---", analysis.path.display()));
    lines.push(format!("{} words found in the document", analysis.word_count));
    lines.push(String::new());

    for LetterCount { letter, count } in &analysis.letters {
      lines.push(format!("The '{letter}' character was found {count} times"));
    }

    Self { lines }
  }

  /// Lines joined with newlines, including a final one
  pub fn render(&self) -> String {
    let mut output = self.lines.join("\n");
    output.push('\n');
    output
  }
}

pub fn format_report(analysis: &BookAnalysis, format: &OutputFormat) -> Result<String> {
  match format {
    OutputFormat::Pretty => Ok(Report::from_analysis(analysis).render()),
    OutputFormat::Json => format_json(analysis),
  }
}

fn format_json(analysis: &BookAnalysis) -> Result<String> {
  let mut output = serde_json::to_string_pretty(analysis)?;
  output.push('\n');
  Ok(output)
}
