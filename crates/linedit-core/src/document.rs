//! Document Storage Layer
//!
//! A [`Document`] is an ordered sequence of physical lines with no embedded line terminators.
//! It is the sole owner of text content and guarantees that it always holds at least one line:
//! a new or fully cleared document is a single empty line.
//!
//! Columns are character offsets (Unicode scalar values). Every operation is total: rows and
//! columns outside the document are clamped instead of rejected.
//!
//! # Example
//!
//! ```rust
//! use linedit_core::Document;
//!
//! let mut doc = Document::new();
//! doc.replace_all(["fn main() {", "}"]);
//! assert_eq!(doc.line_count(), 3);
//! assert_eq!(doc.line(2), "");
//! ```

use crate::commands::Position;
use crate::text::{char_len, split_at_col};

/// Ordered, never-empty sequence of text lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document holding a single empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Create a document holding exactly `lines`.
    ///
    /// Unlike [`Document::replace_all`], no trailing empty line is appended; an empty input
    /// still yields one empty line.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self { lines }
    }

    /// Atomically replace the whole content (new/open).
    ///
    /// A trailing empty line is appended when `lines` is empty or does not already end with
    /// one, matching a file that ended with a line terminator.
    pub fn replace_all<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.last().is_none_or(|last| !last.is_empty()) {
            lines.push(String::new());
        }
        self.lines = lines;
    }

    /// Text of line `row`, or `""` past the end.
    pub fn line(&self, row: usize) -> &str {
        self.lines.get(row).map_or("", String::as_str)
    }

    /// Number of lines (always at least 1).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Length of line `row` in characters.
    pub fn line_len(&self, row: usize) -> usize {
        char_len(self.line(row))
    }

    /// Index of the last line.
    pub fn last_row(&self) -> usize {
        self.lines.len() - 1
    }

    /// All lines, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Total characters, excluding line separators.
    pub fn char_count(&self) -> usize {
        self.lines.iter().map(|line| char_len(line)).sum()
    }

    /// Position just past the last character of the document.
    pub fn end_position(&self) -> Position {
        let row = self.last_row();
        Position::new(row, self.line_len(row))
    }

    /// Clamp `pos` so that `row < line_count` and `col <= line_len(row)`.
    pub fn clamp(&self, pos: Position) -> Position {
        let row = pos.row.min(self.last_row());
        Position::new(row, pos.col.min(self.line_len(row)))
    }

    /// Replace the text of line `row`. Out-of-range rows are ignored.
    pub fn set_line(&mut self, row: usize, text: impl Into<String>) {
        if let Some(line) = self.lines.get_mut(row) {
            *line = text.into();
        }
    }

    /// Insert a new line before `row` (clamped to `line_count`, i.e. append).
    pub fn insert_line(&mut self, row: usize, text: impl Into<String>) {
        let row = row.min(self.lines.len());
        self.lines.insert(row, text.into());
    }

    /// Remove line `row` and return its text.
    ///
    /// Removing the only line leaves a single empty line behind.
    pub fn remove_line(&mut self, row: usize) -> Option<String> {
        if row >= self.lines.len() {
            return None;
        }
        if self.lines.len() == 1 {
            return Some(std::mem::take(&mut self.lines[0]));
        }
        Some(self.lines.remove(row))
    }

    /// Remove lines `row_start..=row_end_inclusive` (clamped).
    pub fn remove_range(&mut self, row_start: usize, row_end_inclusive: usize) {
        if row_start > row_end_inclusive || row_start >= self.lines.len() {
            return;
        }
        let end = row_end_inclusive.min(self.last_row());
        self.lines.drain(row_start..=end);
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
    }

    /// Splice `text` into line `pos.row` at `pos.col` (clamped). `text` must be a single line.
    pub fn insert_str(&mut self, pos: Position, text: &str) {
        let pos = self.clamp(pos);
        let line = &self.lines[pos.row];
        let (head, tail) = split_at_col(line, pos.col);
        let spliced = format!("{head}{text}{tail}");
        self.lines[pos.row] = spliced;
    }

    /// Remove the character at `pos`, returning it. `None` at end of line.
    pub fn remove_char(&mut self, pos: Position) -> Option<char> {
        let pos = self.clamp(pos);
        let line = &mut self.lines[pos.row];
        let (byte, ch) = line.char_indices().nth(pos.col)?;
        line.remove(byte);
        Some(ch)
    }

    /// Split line `pos.row` at `pos.col`; the tail becomes a new line directly below.
    pub fn split_line(&mut self, pos: Position) {
        let pos = self.clamp(pos);
        let line = &self.lines[pos.row];
        let (head, tail) = split_at_col(line, pos.col);
        let (head, tail) = (head.to_string(), tail.to_string());
        self.lines[pos.row] = head;
        self.lines.insert(pos.row + 1, tail);
    }

    /// Append line `row + 1` onto line `row` and remove it. No-op on the last line.
    pub fn join_with_next(&mut self, row: usize) {
        if row + 1 >= self.lines.len() {
            return;
        }
        let next = self.lines.remove(row + 1);
        self.lines[row].push_str(&next);
    }

    /// Join all lines with `separator`. No trailing separator is added beyond the join.
    pub fn to_text(&self, separator: &str) -> String {
        self.lines.join(separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_has_one_empty_line() {
        let doc = Document::new();
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.line(0), "");
    }

    #[test]
    fn test_replace_all_appends_trailing_empty_line() {
        let mut doc = Document::new();
        doc.replace_all(["a", "b"]);
        assert_eq!(doc.lines(), ["a", "b", ""]);

        doc.replace_all(["a", ""]);
        assert_eq!(doc.lines(), ["a", ""]);

        doc.replace_all(Vec::<String>::new());
        assert_eq!(doc.lines(), [""]);
    }

    #[test]
    fn test_remove_last_remaining_line_leaves_empty_line() {
        let mut doc = Document::from_lines(["only"]);
        assert_eq!(doc.remove_line(0).as_deref(), Some("only"));
        assert_eq!(doc.lines(), [""]);
    }

    #[test]
    fn test_remove_range_never_empties() {
        let mut doc = Document::from_lines(["a", "b", "c"]);
        doc.remove_range(1, 2);
        assert_eq!(doc.lines(), ["a"]);

        doc.remove_range(0, 10);
        assert_eq!(doc.lines(), [""]);
    }

    #[test]
    fn test_insert_and_remove_char_use_char_columns() {
        let mut doc = Document::from_lines(["øb"]);
        doc.insert_str(Position::new(0, 1), "ß");
        assert_eq!(doc.line(0), "øßb");
        assert_eq!(doc.remove_char(Position::new(0, 1)), Some('ß'));
        assert_eq!(doc.remove_char(Position::new(0, 2)), None);
        assert_eq!(doc.line(0), "øb");
    }

    #[test]
    fn test_split_and_join() {
        let mut doc = Document::from_lines(["abcdef"]);
        doc.split_line(Position::new(0, 3));
        assert_eq!(doc.lines(), ["abc", "def"]);
        doc.join_with_next(0);
        assert_eq!(doc.lines(), ["abcdef"]);
        doc.join_with_next(0);
        assert_eq!(doc.lines(), ["abcdef"]);
    }

    #[test]
    fn test_clamp() {
        let doc = Document::from_lines(["ab", "c"]);
        assert_eq!(doc.clamp(Position::new(5, 5)), Position::new(1, 1));
        assert_eq!(doc.clamp(Position::new(0, 9)), Position::new(0, 2));
    }
}
