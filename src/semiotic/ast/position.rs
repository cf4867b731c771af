//! Position tracking for source code locations
//!
//! Positions are derived from byte offsets into the source text. Lines and
//! columns are 1-based and counted in characters (not bytes), so operator
//! glyphs occupy a single column even though they are multi-byte in UTF-8.

use serde::Serialize;
use std::fmt;

/// A position in source text (line and column, both 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Compute the position of a byte offset in the source text
    ///
    /// Offsets past the end of the source resolve to one column past the
    /// last character, which is where end-of-input errors point.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let before = &source[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = before[line_start..].chars().count() + 1;
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_of_source() {
        assert_eq!(Position::from_offset("abc", 0), Position::new(1, 1));
    }

    #[test]
    fn test_same_line() {
        assert_eq!(Position::from_offset("abcdef", 3), Position::new(1, 4));
    }

    #[test]
    fn test_multiline() {
        let source = "ab\ncd\nef";
        assert_eq!(Position::from_offset(source, 3), Position::new(2, 1));
        assert_eq!(Position::from_offset(source, 7), Position::new(3, 2));
    }

    #[test]
    fn test_multibyte_glyphs_count_one_column() {
        // "∇(" is 4 bytes but 2 characters
        assert_eq!(Position::from_offset("∇(X)", 4), Position::new(1, 3));
    }

    #[test]
    fn test_offset_past_end() {
        assert_eq!(Position::from_offset("ab", 99), Position::new(1, 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(2, 7).to_string(), "2:7");
    }
}
