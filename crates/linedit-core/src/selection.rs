//! Selection Manager
//!
//! A selection is an unordered anchor/extent pair plus an `active` flag. The anchor is where
//! the selection began (click or shift-start), the extent is the last touched point. The
//! normalized range is derived on demand and never stored.
//!
//! State machine:
//!
//! ```text
//! Inactive --begin--> Active --extend--> Active
//! Active --finalize (anchor == extent)--> Inactive
//! Active --finalize (anchor != extent)--> Active
//! Active --clear--> Inactive
//! ```
//!
//! [`Selection::delete`] does not deactivate the selection. Every caller in this crate clears
//! it right after deleting.

use crate::Document;
use crate::commands::Position;
use crate::text::{slice_cols, split_at_col};

/// Anchor/extent selection over document coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    active: bool,
    anchor: Position,
    extent: Position,
}

impl Selection {
    /// An inactive selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a selection is currently active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Where the selection began, if active.
    pub fn anchor(&self) -> Option<Position> {
        self.active.then_some(self.anchor)
    }

    /// The moving end, if active.
    pub fn extent(&self) -> Option<Position> {
        self.active.then_some(self.extent)
    }

    /// Start a selection with `anchor == extent == pos`.
    pub fn begin(&mut self, pos: Position) {
        self.anchor = pos;
        self.extent = pos;
        self.active = true;
    }

    /// Move the extent. The active flag is left unchanged.
    pub fn extend(&mut self, pos: Position) {
        self.extent = pos;
    }

    /// Deactivate when the selection is empty (a click without movement).
    pub fn finalize(&mut self) {
        self.active = self.active && self.anchor != self.extent;
    }

    /// Deactivate unconditionally.
    pub fn clear(&mut self) {
        self.active = false;
    }

    /// `(start, end)` in document order; `(0,0)..(0,0)` when inactive.
    pub fn normalized(&self) -> (Position, Position) {
        if !self.active {
            return (Position::default(), Position::default());
        }
        if self.anchor <= self.extent {
            (self.anchor, self.extent)
        } else {
            (self.extent, self.anchor)
        }
    }

    /// Normalized range, if active.
    pub fn range(&self) -> Option<(Position, Position)> {
        self.active.then(|| self.normalized())
    }

    /// Normalized range clamped to `doc`, if active.
    fn clamped_range(&self, doc: &Document) -> Option<(Position, Position)> {
        let (start, end) = self.range()?;
        Some((doc.clamp(start), doc.clamp(end)))
    }

    /// The selected text, lines joined with `'\n'`. Empty when inactive.
    pub fn get_text(&self, doc: &Document) -> String {
        let Some((start, end)) = self.clamped_range(doc) else {
            return String::new();
        };

        if start.row == end.row {
            return slice_cols(doc.line(start.row), start.col, end.col).to_string();
        }

        let mut parts = Vec::with_capacity(end.row - start.row + 1);
        parts.push(split_at_col(doc.line(start.row), start.col).1);
        for row in start.row + 1..end.row {
            parts.push(doc.line(row));
        }
        parts.push(split_at_col(doc.line(end.row), end.col).0);
        parts.join("\n")
    }

    /// Delete the selected text and move `cursor` to the start of the range.
    ///
    /// Returns `false` (and leaves everything untouched) when inactive.
    pub fn delete(&self, doc: &mut Document, cursor: &mut Position) -> bool {
        let Some((start, end)) = self.clamped_range(doc) else {
            return false;
        };

        if start.row == end.row {
            let line = doc.line(start.row);
            let (head, _) = split_at_col(line, start.col);
            let (_, tail) = split_at_col(line, end.col);
            let merged = format!("{head}{tail}");
            doc.set_line(start.row, merged);
        } else {
            let head = split_at_col(doc.line(start.row), start.col).0;
            let tail = split_at_col(doc.line(end.row), end.col).1;
            let merged = format!("{head}{tail}");
            doc.set_line(start.row, merged);
            doc.remove_range(start.row + 1, end.row);
        }

        *cursor = start;
        true
    }
}
