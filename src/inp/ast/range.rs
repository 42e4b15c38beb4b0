//! Position and location tracking for source code locations
//!
//! ## Types
//!
//! - [`Position`] - A byte offset plus its 1-based line:column
//! - [`Range`] - A start/end pair of positions
//! - [`SourceLocation`] - Utility for converting byte offsets to positions
//!
//! Lines and columns are 1-based, matching what editors show and what the recovery
//! controller uses to find the line to neutralize. Columns count bytes from the start of
//! the line.
//!
//! ## Usage
//!
//! 1. Lexer produces `(Token, std::ops::Range<usize>)` pairs (byte offsets)
//! 2. Parser converts byte ranges with [`SourceLocation::byte_range_to_range`]
//! 3. AST nodes and syntax errors store the resulting [`Range`]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range as ByteRange;

/// A position in source code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(0, 1, 1)
    }
}

/// A location in source code (start and end positions)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Provides fast conversion from byte offsets to line/column positions
#[derive(Debug, Clone)]
pub struct SourceLocation {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
    len: usize,
}

impl SourceLocation {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self {
            line_starts,
            len: source.len(),
        }
    }

    /// Convert a byte offset to a position. Offsets past the end clamp to the end.
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let offset = byte_offset.min(self.len);
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line - 1,
        };
        let column = offset - self.line_starts[line];
        Position::new(offset, line + 1, column + 1)
    }

    pub fn byte_range_to_range(&self, range: &ByteRange<usize>) -> Range {
        Range::new(
            self.byte_to_position(range.start),
            self.byte_to_position(range.end.max(range.start)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_display() {
        assert_eq!(format!("{}", Position::new(12, 5, 10)), "5:10");
    }

    #[test]
    fn test_byte_to_position_single_line() {
        let loc = SourceLocation::new("SENSITIVITY ON");
        assert_eq!(loc.byte_to_position(0), Position::new(0, 1, 1));
        assert_eq!(loc.byte_to_position(12), Position::new(12, 1, 13));
    }

    #[test]
    fn test_byte_to_position_multiline() {
        let loc = SourceLocation::new("TITLE\nA title\nEND");
        assert_eq!(loc.byte_to_position(5), Position::new(5, 1, 6));
        assert_eq!(loc.byte_to_position(6), Position::new(6, 2, 1));
        assert_eq!(loc.byte_to_position(14), Position::new(14, 3, 1));
    }

    #[test]
    fn test_end_of_input_lands_on_last_line() {
        let loc = SourceLocation::new("A\nB\n");
        assert_eq!(loc.byte_to_position(4), Position::new(4, 3, 1));
        assert_eq!(loc.byte_to_position(99), Position::new(4, 3, 1));
    }

    #[test]
    fn test_byte_range_to_range() {
        let loc = SourceLocation::new("A = 1\nB = 2");
        let range = loc.byte_range_to_range(&(6..11));
        assert_eq!(range.start, Position::new(6, 2, 1));
        assert_eq!(range.end, Position::new(11, 2, 6));
    }
}
