//! Editor State Interface
//!
//! Immutable, structured snapshots of session state for renderers and status displays. A
//! renderer needs nothing beyond these queries and [`EditorSession::document`] to draw the
//! status line, the line-number gutter, selection-aware text and the caret.
//!
//! # Example
//!
//! ```rust
//! use linedit_core::EditorSession;
//!
//! let session = EditorSession::from_lines(["hello", "world"]);
//! assert_eq!(session.status_line(), "Untitled | Line: 1/2 | Col: 1");
//! ```

use crate::EditorSession;
use crate::commands::Position;
use std::ops::Range;

const UNTITLED: &str = "Untitled";

/// Document state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentState {
    /// Total line count.
    pub line_count: usize,
    /// Total character count, excluding separators.
    pub char_count: usize,
    /// Whether the document has unsaved changes.
    pub is_modified: bool,
    /// File name (without directories), or `"Untitled"`.
    pub file_name: String,
}

/// Cursor state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorState {
    /// Cursor position.
    pub position: Position,
    /// Normalized selection range, if a selection is active.
    pub selection: Option<(Position, Position)>,
}

/// Viewport state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportState {
    /// First visible line.
    pub scroll_row: usize,
    /// Visible row capacity.
    pub visible_rows: usize,
    /// Visible column capacity.
    pub visible_cols: usize,
    /// Lines currently on screen.
    pub visible_lines: Range<usize>,
}

impl EditorSession {
    /// Snapshot of document state.
    pub fn document_state(&self) -> DocumentState {
        DocumentState {
            line_count: self.document().line_count(),
            char_count: self.document().char_count(),
            is_modified: self.is_modified(),
            file_name: self.file_name(),
        }
    }

    /// Snapshot of cursor and selection state.
    pub fn cursor_state(&self) -> CursorState {
        CursorState {
            position: self.cursor(),
            selection: self.selection().range(),
        }
    }

    /// Snapshot of viewport state.
    pub fn viewport_state(&self) -> ViewportState {
        let viewport = self.viewport();
        ViewportState {
            scroll_row: viewport.scroll_row,
            visible_rows: viewport.visible_rows,
            visible_cols: viewport.visible_cols,
            visible_lines: viewport.visible_lines(self.document().line_count()),
        }
    }

    /// Display name: the file name of the current path, or `"Untitled"`.
    pub fn file_name(&self) -> String {
        self.file_path()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNTITLED.to_string())
    }

    /// `name[*] | Line: row/count | Col: col`, 1-based.
    pub fn status_line(&self) -> String {
        let modified = if self.is_modified() { "*" } else { "" };
        let cursor = self.cursor();
        format!(
            "{}{} | Line: {}/{} | Col: {}",
            self.file_name(),
            modified,
            cursor.row + 1,
            self.document().line_count(),
            cursor.col + 1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Command, EditCommand};

    #[test]
    fn test_status_line_marks_modified_file() {
        let mut session = EditorSession::new();
        session.load("abc\n", "/tmp/dir/notes.txt");
        session.execute(Command::Edit(EditCommand::Newline));

        assert_eq!(session.status_line(), "notes.txt* | Line: 2/3 | Col: 1");
        let doc = session.document_state();
        assert_eq!(doc.file_name, "notes.txt");
        assert!(doc.is_modified);
    }

    #[test]
    fn test_cursor_state_reports_normalized_selection() {
        let mut session = EditorSession::from_lines(["abc"]);
        session.execute(Command::Selection(crate::SelectionCommand::Begin { row: 0, col: 3 }));
        session.execute(Command::Selection(crate::SelectionCommand::Extend { row: 0, col: 1 }));

        let state = session.cursor_state();
        assert_eq!(state.position, Position::new(0, 1));
        assert_eq!(
            state.selection,
            Some((Position::new(0, 1), Position::new(0, 3)))
        );
    }
}
