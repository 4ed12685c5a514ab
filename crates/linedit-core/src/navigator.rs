//! Cursor navigation and viewport scrolling.
//!
//! Movement functions are pure: they take a [`Document`] and the current cursor and return the
//! new cursor, always clamped to `0 <= col <= line_len(row)`. Vertical movement re-clamps the
//! column against each destination line; there is no remembered "desired column".
//!
//! [`Viewport`] keeps `scroll_row <= cursor.row < scroll_row + visible_rows` after each
//! [`Viewport::ensure_visible`] call.

use crate::Document;
use crate::commands::{Motion, Position};
use std::ops::Range;

/// Visible window over the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    /// First visible line.
    pub scroll_row: usize,
    /// Number of visible text rows.
    pub visible_rows: usize,
    /// Number of visible text columns.
    pub visible_cols: usize,
}

impl Viewport {
    /// Create a viewport scrolled to the top.
    pub fn new(visible_rows: usize, visible_cols: usize) -> Self {
        Self {
            scroll_row: 0,
            visible_rows,
            visible_cols,
        }
    }

    /// Rows scrolled per page, and the window height used for visibility.
    ///
    /// A zero-height canvas still shows the cursor row.
    pub fn page_rows(&self) -> usize {
        self.visible_rows.max(1)
    }

    /// Scroll the minimum amount needed for `row` to be visible.
    pub fn ensure_visible(&mut self, row: usize) {
        let rows = self.page_rows();
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + rows {
            self.scroll_row = row + 1 - rows;
        }
    }

    /// Rows to draw for a document of `line_count` lines.
    pub fn visible_lines(&self, line_count: usize) -> Range<usize> {
        let start = self.scroll_row.min(line_count);
        let end = self
            .scroll_row
            .saturating_add(self.visible_rows)
            .min(line_count);
        start..end
    }
}

/// Apply `motion` to `cursor`, paging by `page_rows`.
pub fn apply_motion(
    doc: &Document,
    cursor: Position,
    motion: Motion,
    page_rows: usize,
) -> Position {
    let cursor = doc.clamp(cursor);
    match motion {
        Motion::Left => move_left(doc, cursor),
        Motion::Right => move_right(doc, cursor),
        Motion::Up => move_up(doc, cursor),
        Motion::Down => move_down(doc, cursor),
        Motion::LineStart => move_line_start(cursor),
        Motion::LineEnd => move_line_end(doc, cursor),
        Motion::PageUp => page_up(doc, cursor, page_rows),
        Motion::PageDown => page_down(doc, cursor, page_rows),
    }
}

/// One character left, or to the end of the previous line.
pub fn move_left(doc: &Document, cursor: Position) -> Position {
    if cursor.col > 0 {
        Position::new(cursor.row, cursor.col - 1)
    } else if cursor.row > 0 {
        let row = cursor.row - 1;
        Position::new(row, doc.line_len(row))
    } else {
        cursor
    }
}

/// One character right, or to the start of the next line.
pub fn move_right(doc: &Document, cursor: Position) -> Position {
    if cursor.col < doc.line_len(cursor.row) {
        Position::new(cursor.row, cursor.col + 1)
    } else if cursor.row < doc.last_row() {
        Position::new(cursor.row + 1, 0)
    } else {
        cursor
    }
}

/// One line up, column clamped to the new line.
pub fn move_up(doc: &Document, cursor: Position) -> Position {
    vertical(doc, cursor, cursor.row.saturating_sub(1))
}

/// One line down, column clamped to the new line.
pub fn move_down(doc: &Document, cursor: Position) -> Position {
    vertical(doc, cursor, cursor.row + 1)
}

/// Column 0 of the current line.
pub fn move_line_start(cursor: Position) -> Position {
    Position::new(cursor.row, 0)
}

/// End of the current line.
pub fn move_line_end(doc: &Document, cursor: Position) -> Position {
    Position::new(cursor.row, doc.line_len(cursor.row))
}

/// `page_rows` lines up.
pub fn page_up(doc: &Document, cursor: Position, page_rows: usize) -> Position {
    vertical(doc, cursor, cursor.row.saturating_sub(page_rows))
}

/// `page_rows` lines down.
pub fn page_down(doc: &Document, cursor: Position, page_rows: usize) -> Position {
    vertical(doc, cursor, cursor.row.saturating_add(page_rows))
}

fn vertical(doc: &Document, cursor: Position, row: usize) -> Position {
    doc.clamp(Position::new(row, cursor.col))
}
