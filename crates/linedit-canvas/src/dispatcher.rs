//! Input event dispatch.
//!
//! The [`Dispatcher`] is the single consumer of canvas events and the only mutator of the
//! [`EditorSession`]. Events are applied strictly in the order they are handed in.

use crate::config::LayoutMetrics;
use crate::keymap::{KeyAction, Modifiers};
use crate::protocol::InputEvent;
use linedit_core::{Command, EditorSession, Position, SelectionCommand, ViewCommand};

/// File operations that need the host's file system and prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    /// Ask for a path and load it.
    Open,
    /// Save to the current path, asking for one if there is none.
    Save,
}

/// Outcome of one event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Response {
    /// Visible state may have changed.
    pub redraw: bool,
    /// The host should perform a file operation.
    pub file_action: Option<FileAction>,
}

impl Response {
    fn redraw(redraw: bool) -> Self {
        Self {
            redraw,
            file_action: None,
        }
    }

    fn file(action: FileAction) -> Self {
        Self {
            redraw: false,
            file_action: Some(action),
        }
    }
}

/// Applies input events to an editor session.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    session: EditorSession,
    modifiers: Modifiers,
    layout: LayoutMetrics,
    width: i32,
    height: i32,
}

impl Dispatcher {
    /// Wrap `session`, sized to the layout's initial canvas.
    pub fn new(session: EditorSession, layout: LayoutMetrics) -> Self {
        let mut dispatcher = Self {
            session,
            modifiers: Modifiers::default(),
            layout,
            width: layout.canvas_width,
            height: layout.canvas_height,
        };
        dispatcher.resize(layout.canvas_width, layout.canvas_height);
        dispatcher
    }

    /// Apply one event.
    pub fn handle(&mut self, event: InputEvent) -> Response {
        match event {
            InputEvent::Resize { width, height } => Response::redraw(self.resize(width, height)),
            InputEvent::KeyDown(key) => self.key_down(&key),
            InputEvent::KeyUp(key) => {
                self.modifiers.key_up(&key);
                Response::default()
            }
            InputEvent::MouseDown { x, y } => Response::redraw(self.mouse_down(x, y)),
            InputEvent::MouseMove { x, y } => Response::redraw(self.mouse_move(x, y)),
            InputEvent::MouseUp { x, y } => Response::redraw(self.mouse_up(x, y)),
        }
    }

    fn key_down(&mut self, key: &str) -> Response {
        match self.modifiers.key_down(key) {
            KeyAction::Editor(command) => Response::redraw(self.execute(command)),
            KeyAction::New => {
                self.session.new_file();
                tracing::info!("new document");
                Response::redraw(true)
            }
            KeyAction::Open => Response::file(FileAction::Open),
            KeyAction::Save => Response::file(FileAction::Save),
            KeyAction::None => Response::default(),
        }
    }

    fn resize(&mut self, width: i32, height: i32) -> bool {
        self.width = width;
        self.height = height;
        let rows = self.layout.visible_rows(height);
        let cols = self.layout.visible_cols(width);
        tracing::debug!(width, height, rows, cols, "canvas resized");
        self.execute(Command::View(ViewCommand::SetVisibleArea { rows, cols }));
        true
    }

    fn mouse_down(&mut self, x: i32, y: i32) -> bool {
        match self.point_to_position(x, y) {
            Some(Position { row, col }) => {
                self.execute(Command::Selection(SelectionCommand::Begin { row, col }))
            }
            None => false,
        }
    }

    fn mouse_move(&mut self, x: i32, y: i32) -> bool {
        if !self.session.selection().is_active() {
            return false;
        }
        match self.point_to_position(x, y) {
            Some(Position { row, col }) => {
                self.execute(Command::Selection(SelectionCommand::Extend { row, col }))
            }
            None => false,
        }
    }

    fn mouse_up(&mut self, x: i32, y: i32) -> bool {
        let mut changed = false;
        if self.session.selection().is_active()
            && let Some(Position { row, col }) = self.point_to_position(x, y)
        {
            changed = self.execute(Command::Selection(SelectionCommand::Extend { row, col }));
        }
        self.execute(Command::Selection(SelectionCommand::Finalize)) || changed
    }

    /// Document position under pixel `(x, y)`, clamped to the document.
    ///
    /// `None` when the point lies above or left of the text area.
    pub fn point_to_position(&self, x: i32, y: i32) -> Option<Position> {
        let visible_row = self.layout.row_at(y)?;
        let col = self.layout.col_at(x)?;
        let doc = self.session.document();
        let row = self
            .session
            .viewport()
            .scroll_row
            .saturating_add(visible_row)
            .min(doc.last_row());
        Some(Position::new(row, col.min(doc.line_len(row))))
    }

    fn execute(&mut self, command: Command) -> bool {
        self.session.execute(command).is_success()
    }

    /// The session.
    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    /// Mutable session, for file loads and saves.
    pub fn session_mut(&mut self) -> &mut EditorSession {
        &mut self.session
    }

    /// Current modifier state.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Layout metrics.
    pub fn layout(&self) -> &LayoutMetrics {
        &self.layout
    }

    /// Last known canvas size.
    pub fn canvas_size(&self) -> (i32, i32) {
        (self.width, self.height)
    }
}
