#![warn(missing_docs)]
//! linedit core - a line-oriented text editing engine
//!
//! # Overview
//!
//! `linedit-core` maintains an in-memory text buffer, a cursor, a selection and a clipboard,
//! and exposes total navigation, mutation and selection operations for a front end to drive.
//! It never renders and never performs I/O: a dispatcher decodes input events into
//! [`Command`] values, executes them on an [`EditorSession`], and redraws from the session's
//! read-only state queries.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Command Interface & EditorSession          │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  State Queries (status line, viewport)      │  ← Rendering Data
//! ├─────────────────────────────────────────────┤
//! │  Clipboard Controller                       │
//! ├─────────────────────────────────────────────┤
//! │  Selection Manager  │  Cursor Navigator     │
//! ├─────────────────────────────────────────────┤
//! │  Document (Vec of lines)                    │  ← Text Storage
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use linedit_core::{ClipboardCommand, Command, CursorCommand, EditorSession, Position};
//!
//! let mut session = EditorSession::from_lines(["hello world"]);
//! session.clipboard_mut().set_text("X\nY\nZ");
//! session.execute(Command::Cursor(CursorCommand::MoveTo { row: 0, col: 5 }));
//! session.execute(Command::Clipboard(ClipboardCommand::Paste));
//!
//! assert_eq!(session.document().lines(), ["helloX", "Y", "Z world"]);
//! assert_eq!(session.cursor(), Position::new(2, 1));
//! ```
//!
//! # Invariants
//!
//! After every command:
//!
//! - the document holds at least one line;
//! - `cursor.row < line_count` and `cursor.col <= line_len(cursor.row)`;
//! - `scroll_row <= cursor.row < scroll_row + max(visible_rows, 1)`.
//!
//! Columns count characters (Unicode scalar values); there is no grapheme-cluster handling.
//!
//! # Module Description
//!
//! - [`document`] - line storage
//! - [`navigator`] - cursor movement and viewport scrolling
//! - [`selection`] - anchor/extent selection
//! - [`clipboard`] - single-slot clipboard with structured multi-line paste
//! - [`edit`] - insert/backspace/delete/newline primitives
//! - [`commands`] - unified command interface
//! - [`session`] - the editing session that owns all state
//! - [`state`] - state queries for renderers
//! - [`line_ending`] - file text splitting and line ending detection

pub mod clipboard;
pub mod commands;
pub mod document;
pub mod edit;
pub mod line_ending;
pub mod navigator;
pub mod selection;
pub mod session;
pub mod state;
mod text;

pub use clipboard::Clipboard;
pub use commands::{
    ClipboardCommand, Command, CommandResult, CursorCommand, EditCommand, Motion, Position,
    SelectionCommand, ViewCommand,
};
pub use document::Document;
pub use line_ending::LineEnding;
pub use navigator::Viewport;
pub use selection::Selection;
pub use session::EditorSession;
pub use state::{CursorState, DocumentState, ViewportState};
