//! Key name to editor action mapping.
//!
//! Key names are the symbolic strings the canvas sends (`Left`, `BackSpace`, `space`, or a
//! single printable character). Modifier keys only update [`Modifiers`].

use linedit_core::{ClipboardCommand, Command, CursorCommand, EditCommand, Motion};

/// Modifier key state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift held.
    pub shift: bool,
    /// Control, Command or Meta held.
    pub control: bool,
}

/// What a key press asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Apply a command to the session.
    Editor(Command),
    /// Save the document.
    Save,
    /// Open a file.
    Open,
    /// Start a new document.
    New,
    /// Nothing to do.
    None,
}

#[derive(Clone, Copy)]
enum ModifierKey {
    Shift,
    Control,
    Alt,
}

fn modifier_key(key: &str) -> Option<ModifierKey> {
    match key {
        "LeftShift" | "RightShift" | "Shift_L" | "Shift_R" => Some(ModifierKey::Shift),
        "LeftControl" | "RightControl" | "Control_L" | "Control_R" | "LeftCommand"
        | "RightCommand" | "Meta_L" | "Meta_R" => Some(ModifierKey::Control),
        "LeftAlt" | "RightAlt" | "Alt_L" | "Alt_R" => Some(ModifierKey::Alt),
        _ => None,
    }
}

impl Modifiers {
    /// Handle a key press.
    pub fn key_down(&mut self, key: &str) -> KeyAction {
        if let Some(modifier) = modifier_key(key) {
            self.set(modifier, true);
            return KeyAction::None;
        }
        if self.control
            && let Some(action) = control_chord(key)
        {
            return action;
        }
        if let Some(command) = named_key(key, self.shift) {
            return KeyAction::Editor(command);
        }
        if self.control {
            return KeyAction::None;
        }
        match character_text(key, self.shift) {
            Some(text) => KeyAction::Editor(Command::Edit(EditCommand::InsertText { text })),
            None => KeyAction::None,
        }
    }

    /// Handle a key release.
    pub fn key_up(&mut self, key: &str) {
        if let Some(modifier) = modifier_key(key) {
            self.set(modifier, false);
        }
    }

    fn set(&mut self, modifier: ModifierKey, held: bool) {
        match modifier {
            ModifierKey::Shift => self.shift = held,
            ModifierKey::Control => self.control = held,
            ModifierKey::Alt => {}
        }
    }
}

fn control_chord(key: &str) -> Option<KeyAction> {
    let action = match key {
        "s" | "S" => KeyAction::Save,
        "o" | "O" => KeyAction::Open,
        "n" | "N" => KeyAction::New,
        "c" | "C" => KeyAction::Editor(Command::Clipboard(ClipboardCommand::Copy)),
        "x" | "X" => KeyAction::Editor(Command::Clipboard(ClipboardCommand::Cut)),
        "v" | "V" => KeyAction::Editor(Command::Clipboard(ClipboardCommand::Paste)),
        "a" | "A" => KeyAction::Editor(Command::Cursor(CursorCommand::SelectAll)),
        _ => return None,
    };
    Some(action)
}

fn named_key(key: &str, shift: bool) -> Option<Command> {
    let edit = match key {
        "BackSpace" => EditCommand::Backspace,
        "Delete" => EditCommand::DeleteForward,
        "Return" => EditCommand::Newline,
        "Tab" => EditCommand::InsertTab,
        "space" => EditCommand::InsertText {
            text: " ".to_string(),
        },
        _ => {
            let motion = match key {
                "Left" => Motion::Left,
                "Right" => Motion::Right,
                "Up" => Motion::Up,
                "Down" => Motion::Down,
                "Home" => Motion::LineStart,
                "End" => Motion::LineEnd,
                "Prior" => Motion::PageUp,
                "Next" => Motion::PageDown,
                _ => return None,
            };
            return Some(Command::Cursor(CursorCommand::Move {
                motion,
                extend: shift,
            }));
        }
    };
    Some(Command::Edit(edit))
}

fn character_text(key: &str, shift: bool) -> Option<String> {
    match key {
        "ø" => return Some("ø".to_string()),
        "ß" | "ẞ" => return Some("ß".to_string()),
        _ => {}
    }
    let mut chars = key.chars();
    let (Some(ch), None) = (chars.next(), chars.next()) else {
        return None;
    };
    if ch.is_control() {
        return None;
    }
    Some(if shift {
        ch.to_uppercase().collect()
    } else {
        ch.to_string()
    })
}
