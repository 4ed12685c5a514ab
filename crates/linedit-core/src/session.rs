//! Editing session (Edit Coordinator)
//!
//! [`EditorSession`] is the single owner of all mutable editing state: document, cursor,
//! viewport, selection, clipboard, the modified flag and the file identity. Every mutation goes
//! through [`EditorSession::execute`] or one of the file lifecycle methods, and each command
//! that can move the cursor ends by clamping it and re-establishing viewport visibility.
//!
//! The session is not internally synchronized. A concurrent host must wrap the whole session
//! behind one lock or actor, since almost every command touches several of its parts.
//!
//! # Example
//!
//! ```rust
//! use linedit_core::{Command, EditCommand, EditorSession, Position};
//!
//! let mut session = EditorSession::from_lines(["abc", "def"]);
//! session.execute(Command::Cursor(linedit_core::CursorCommand::MoveTo { row: 1, col: 0 }));
//! session.execute(Command::Edit(EditCommand::Backspace));
//!
//! assert_eq!(session.document().lines(), ["abcdef"]);
//! assert_eq!(session.cursor(), Position::new(0, 3));
//! assert!(session.is_modified());
//! ```

use crate::commands::{
    ClipboardCommand, Command, CommandResult, CursorCommand, EditCommand, Motion, Position,
    SelectionCommand, ViewCommand,
};
use crate::line_ending::{LineEnding, split_file_lines};
use crate::navigator::{Viewport, apply_motion};
use crate::{Clipboard, Document, Selection, edit};
use std::path::{Path, PathBuf};

const TAB_TEXT: &str = "    ";

/// The editing session: one explicit owner of all editor state.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    document: Document,
    cursor: Position,
    viewport: Viewport,
    selection: Selection,
    clipboard: Clipboard,
    modified: bool,
    file_path: Option<PathBuf>,
    line_ending: LineEnding,
}

impl EditorSession {
    /// A session over a new, empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session over exactly `lines` (no trailing line is added).
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            document: Document::from_lines(lines),
            ..Self::default()
        }
    }

    /// Execute a command.
    pub fn execute(&mut self, command: Command) -> CommandResult {
        match command {
            Command::Edit(cmd) => self.execute_edit(cmd),
            Command::Cursor(cmd) => self.execute_cursor(cmd),
            Command::Selection(cmd) => self.execute_selection(cmd),
            Command::Clipboard(cmd) => self.execute_clipboard(cmd),
            Command::View(cmd) => self.execute_view(cmd),
        }
    }

    /// Execute commands in order.
    pub fn execute_batch(&mut self, commands: impl IntoIterator<Item = Command>) -> CommandResult {
        let mut changed = false;
        for command in commands {
            changed |= self.execute(command).is_success();
        }
        CommandResult::from_changed(changed)
    }

    fn execute_edit(&mut self, command: EditCommand) -> CommandResult {
        let doc = &mut self.document;
        let sel = &mut self.selection;
        let cursor = &mut self.cursor;
        let changed = match command {
            EditCommand::InsertText { text } => edit::insert_text(doc, sel, cursor, &text),
            EditCommand::InsertTab => edit::insert_text(doc, sel, cursor, TAB_TEXT),
            EditCommand::Backspace => edit::backspace(doc, sel, cursor),
            EditCommand::DeleteForward => edit::delete_forward(doc, sel, cursor),
            EditCommand::Newline => edit::newline(doc, sel, cursor),
        };
        self.finish_mutation(changed)
    }

    fn execute_cursor(&mut self, command: CursorCommand) -> CommandResult {
        match command {
            CursorCommand::Move { motion, extend } => self.move_cursor(motion, extend),
            CursorCommand::MoveTo { row, col } => {
                self.selection.clear();
                self.cursor = self.document.clamp(Position::new(row, col));
            }
            CursorCommand::SelectAll => {
                let end = self.document.end_position();
                self.selection.begin(Position::default());
                self.selection.extend(end);
                self.selection.finalize();
                self.cursor = end;
            }
        }
        self.follow_cursor();
        CommandResult::Success
    }

    fn move_cursor(&mut self, motion: Motion, extend: bool) {
        if !extend {
            self.selection.clear();
        } else if !self.selection.is_active() {
            self.selection.begin(self.cursor);
        }

        self.cursor = apply_motion(
            &self.document,
            self.cursor,
            motion,
            self.viewport.page_rows(),
        );

        if extend {
            self.selection.extend(self.cursor);
            self.selection.finalize();
        }
    }

    fn execute_selection(&mut self, command: SelectionCommand) -> CommandResult {
        match command {
            SelectionCommand::Begin { row, col } => {
                self.cursor = self.document.clamp(Position::new(row, col));
                self.selection.begin(self.cursor);
                self.follow_cursor();
            }
            SelectionCommand::Extend { row, col } => {
                self.cursor = self.document.clamp(Position::new(row, col));
                self.selection.extend(self.cursor);
                self.follow_cursor();
            }
            SelectionCommand::Finalize => self.selection.finalize(),
            SelectionCommand::Clear => self.selection.clear(),
        }
        CommandResult::Success
    }

    fn execute_clipboard(&mut self, command: ClipboardCommand) -> CommandResult {
        let doc = &mut self.document;
        let sel = &mut self.selection;
        let cursor = &mut self.cursor;
        match command {
            ClipboardCommand::Copy => CommandResult::from_changed(self.clipboard.copy(doc, sel)),
            ClipboardCommand::Cut => {
                let changed = self.clipboard.cut(doc, sel, cursor);
                self.finish_mutation(changed)
            }
            ClipboardCommand::Paste => {
                let changed = self.clipboard.paste(doc, sel, cursor);
                self.finish_mutation(changed)
            }
        }
    }

    fn execute_view(&mut self, command: ViewCommand) -> CommandResult {
        match command {
            ViewCommand::SetVisibleArea { rows, cols } => {
                self.viewport.visible_rows = rows;
                self.viewport.visible_cols = cols;
                self.follow_cursor();
            }
            ViewCommand::ScrollTo { row } => {
                let scroll_row = row.min(self.document.last_row());
                if scroll_row == self.viewport.scroll_row {
                    return CommandResult::Noop;
                }
                self.viewport.scroll_row = scroll_row;
                let last_visible = scroll_row + self.viewport.page_rows() - 1;
                self.cursor.row = self.cursor.row.clamp(scroll_row, last_visible);
                self.follow_cursor();
            }
        }
        CommandResult::Success
    }

    fn finish_mutation(&mut self, changed: bool) -> CommandResult {
        if changed {
            self.modified = true;
        }
        self.follow_cursor();
        CommandResult::from_changed(changed)
    }

    fn follow_cursor(&mut self) {
        self.cursor = self.document.clamp(self.cursor);
        self.viewport.ensure_visible(self.cursor.row);
    }

    // File lifecycle

    /// Reset to an empty, unnamed, unmodified document.
    pub fn new_file(&mut self) {
        self.document = Document::new();
        self.reset_view();
        self.file_path = None;
        self.line_ending = LineEnding::default();
        self.modified = false;
    }

    /// Replace the document with loaded file text.
    pub fn load(&mut self, text: &str, path: impl Into<PathBuf>) {
        let path = path.into();
        self.document.replace_all(split_file_lines(text));
        self.line_ending = LineEnding::detect_in_text(text);
        self.reset_view();
        self.modified = false;
        tracing::debug!(
            path = %path.display(),
            lines = self.document.line_count(),
            line_ending = ?self.line_ending,
            "document loaded"
        );
        self.file_path = Some(path);
    }

    /// Text to persist: all lines joined by the session's line ending.
    pub fn contents(&self) -> String {
        self.document.to_text(self.line_ending.as_str())
    }

    /// Record a successful save to `path`.
    pub fn mark_saved(&mut self, path: impl Into<PathBuf>) {
        self.file_path = Some(path.into());
        self.modified = false;
    }

    fn reset_view(&mut self) {
        self.cursor = Position::default();
        self.viewport.scroll_row = 0;
        self.selection.clear();
    }

    // Queries

    /// The document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Currently selected text (empty when no selection is active).
    pub fn selected_text(&self) -> String {
        self.selection.get_text(&self.document)
    }

    /// Clipboard.
    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    /// Mutable clipboard, e.g. to sync with a system clipboard.
    pub fn clipboard_mut(&mut self) -> &mut Clipboard {
        &mut self.clipboard
    }

    /// Whether the document changed since it was created, loaded or saved.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Path of the file being edited, if any.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Line ending used by [`EditorSession::contents`].
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_move_clears_selection() {
        let mut session = EditorSession::from_lines(["abc"]);
        session.execute(Command::Cursor(CursorCommand::SelectAll));
        assert!(session.selection().is_active());

        session.execute(Command::Cursor(CursorCommand::Move {
            motion: Motion::Left,
            extend: false,
        }));
        assert!(!session.selection().is_active());
        assert_eq!(session.cursor(), Position::new(0, 2));
    }

    #[test]
    fn test_shift_move_back_to_anchor_deactivates() {
        let mut session = EditorSession::from_lines(["abc"]);
        let shift = |motion| {
            Command::Cursor(CursorCommand::Move {
                motion,
                extend: true,
            })
        };
        session.execute(shift(Motion::Right));
        assert_eq!(session.selected_text(), "a");
        session.execute(shift(Motion::Left));
        assert!(!session.selection().is_active());
    }

    #[test]
    fn test_load_resets_state() {
        let mut session = EditorSession::from_lines(["x"]);
        session.execute(Command::Edit(EditCommand::InsertText {
            text: "y".to_string(),
        }));
        session.load("one\r\ntwo", "notes.txt");

        assert_eq!(session.document().lines(), ["one", "two", ""]);
        assert_eq!(session.cursor(), Position::new(0, 0));
        assert!(!session.is_modified());
        assert_eq!(session.line_ending(), LineEnding::Crlf);
        assert_eq!(session.contents(), "one\r\ntwo\r\n");
    }

    #[test]
    fn test_tab_inserts_four_spaces() {
        let mut session = EditorSession::new();
        session.execute(Command::Edit(EditCommand::InsertTab));
        assert_eq!(session.document().line(0), "    ");
        assert_eq!(session.cursor(), Position::new(0, 4));
    }
}
