//! Command Interface Layer
//!
//! Closed enumerations of every logical editing intent a front end can issue. A dispatcher
//! translates key names, mouse events and shortcuts into [`Command`] values, and
//! [`EditorSession::execute`](crate::EditorSession::execute) consumes them in a single `match`.
//!
//! # Example
//!
//! ```rust
//! use linedit_core::{Command, CursorCommand, EditCommand, EditorSession, Motion, Position};
//!
//! let mut session = EditorSession::new();
//! session.execute(Command::Edit(EditCommand::InsertText { text: "hello".to_string() }));
//! session.execute(Command::Cursor(CursorCommand::Move {
//!     motion: Motion::Left,
//!     extend: true,
//! }));
//!
//! assert_eq!(session.cursor(), Position::new(0, 4));
//! assert_eq!(session.selected_text(), "o");
//! ```

use std::cmp::Ordering;

/// Position coordinates (row and column)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Zero-based line index.
    pub row: usize,
    /// Zero-based column in characters; may equal the line length (end of line).
    pub col: usize,
}

impl Position {
    /// Create a new position.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.row
            .cmp(&other.row)
            .then_with(|| self.col.cmp(&other.col))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Text editing commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Insert text at the cursor, replacing the active selection.
    ///
    /// Text containing line separators is inserted with the same structured splitting as a
    /// multi-line paste.
    InsertText {
        /// Text to insert.
        text: String,
    },
    /// Insert a tab (four spaces) at the cursor.
    InsertTab,
    /// Delete the selection if any, otherwise the character before the cursor.
    Backspace,
    /// Delete the selection if any, otherwise the character at the cursor.
    DeleteForward,
    /// Split the current line at the cursor.
    Newline,
}

/// A single cursor movement step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// One character left, wrapping to the end of the previous line.
    Left,
    /// One character right, wrapping to the start of the next line.
    Right,
    /// One line up.
    Up,
    /// One line down.
    Down,
    /// Start of the current line.
    LineStart,
    /// End of the current line.
    LineEnd,
    /// One page (visible rows) up.
    PageUp,
    /// One page (visible rows) down.
    PageDown,
}

/// Cursor commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorCommand {
    /// Move the cursor by `motion`.
    Move {
        /// Movement to apply.
        motion: Motion,
        /// Extend the selection (shift held) instead of clearing it.
        extend: bool,
    },
    /// Move the cursor to an explicit position (clamped).
    MoveTo {
        /// Target row.
        row: usize,
        /// Target column.
        col: usize,
    },
    /// Select the whole document and put the cursor at its end.
    SelectAll,
}

/// Selection commands, as driven by mouse click/drag/release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionCommand {
    /// Place the cursor and start a selection anchored there.
    Begin {
        /// Anchor row.
        row: usize,
        /// Anchor column.
        col: usize,
    },
    /// Move the cursor and the selection extent.
    Extend {
        /// Extent row.
        row: usize,
        /// Extent column.
        col: usize,
    },
    /// Deactivate the selection if it is empty.
    Finalize,
    /// Deactivate the selection.
    Clear,
}

/// Clipboard commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardCommand {
    /// Copy the selected text.
    Copy,
    /// Copy, then delete the selected text.
    Cut,
    /// Insert the clipboard text at the cursor.
    Paste,
}

/// View commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    /// Set the viewport capacity.
    SetVisibleArea {
        /// Visible text rows.
        rows: usize,
        /// Visible text columns.
        cols: usize,
    },
    /// Scroll so `row` is the first visible line; the cursor is pulled into the window.
    ScrollTo {
        /// Target first visible line, clamped to the document.
        row: usize,
    },
}

/// Unified command enum
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Text editing commands
    Edit(EditCommand),
    /// Cursor commands
    Cursor(CursorCommand),
    /// Selection commands
    Selection(SelectionCommand),
    /// Clipboard commands
    Clipboard(ClipboardCommand),
    /// View commands
    View(ViewCommand),
}

/// Command execution result
///
/// Commands never fail; the result only tells the caller whether anything happened, e.g. to
/// skip a redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    /// State changed.
    Success,
    /// The command had nothing to act on.
    Noop,
}

impl CommandResult {
    pub(crate) fn from_changed(changed: bool) -> Self {
        if changed { Self::Success } else { Self::Noop }
    }

    /// Whether state changed.
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}
