//! Error types for parsing

use crate::inp::ast::range::Range;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The grammar could not match the input at `location`.
///
/// The location is always present: the recovery controller relies on it to find the
/// line to neutralize.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message} (at {})", .location.start)]
pub struct SyntaxError {
    pub message: String,
    pub location: Range,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, location: Range) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }

    /// 1-based line the error starts on
    pub fn line(&self) -> usize {
        self.location.start.line
    }

    /// Render the error with numbered source lines around it
    pub fn with_context(&self, source: &str) -> String {
        format!(
            "Error: {}\n\n{}",
            self,
            format_source_context(source, &self.location)
        )
    }
}

/// Format source code context around an error location
///
/// Shows 2 lines before the error, the error line with >> marker, and 2 lines after.
pub fn format_source_context(source: &str, range: &Range) -> String {
    let lines: Vec<&str> = source.split('\n').collect();
    let error_line = range.start.line.saturating_sub(1);

    let start_line = error_line.saturating_sub(2);
    let end_line = (error_line + 3).min(lines.len());

    let mut context = String::new();

    for (line_num, line) in lines.iter().enumerate().take(end_line).skip(start_line) {
        let marker = if line_num == error_line { ">>" } else { "  " };
        context.push_str(&format!("{} {:3} | {}\n", marker, line_num + 1, line));
    }

    context
}
