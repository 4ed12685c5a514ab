//! Clipboard Controller
//!
//! A single slot holding the last copied or cut text. Copy overwrites it (unless the
//! selection is empty), paste only reads it.

use crate::Document;
use crate::Selection;
use crate::commands::Position;
use crate::edit::{insert_text, take_selection};

/// Single-slot clipboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clipboard {
    text: String,
}

impl Clipboard {
    /// An empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether nothing has been copied yet.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Overwrite the contents, e.g. from a system clipboard.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Store the selected text. Inactive or empty selections leave the clipboard untouched.
    pub fn copy(&mut self, doc: &Document, selection: &Selection) -> bool {
        if !selection.is_active() {
            return false;
        }
        let text = selection.get_text(doc);
        if text.is_empty() {
            return false;
        }
        self.text = text;
        true
    }

    /// Copy, then delete the selection and deactivate it.
    pub fn cut(
        &mut self,
        doc: &mut Document,
        selection: &mut Selection,
        cursor: &mut Position,
    ) -> bool {
        if !selection.is_active() {
            return false;
        }
        self.copy(doc, selection);
        take_selection(doc, selection, cursor);
        true
    }

    /// Insert the clipboard text at the cursor, replacing any active selection.
    pub fn paste(
        &self,
        doc: &mut Document,
        selection: &mut Selection,
        cursor: &mut Position,
    ) -> bool {
        if self.text.is_empty() {
            return false;
        }
        tracing::debug!(
            chars = self.text.chars().count(),
            multi_line = self.text.contains(['\n', '\r']),
            "paste"
        );
        insert_text(doc, selection, cursor, &self.text)
    }
}
