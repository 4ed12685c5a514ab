//! Edit primitives.
//!
//! Each function applies one editing intent to a document, cursor and selection and reports
//! whether the document changed. An active selection is always deleted and deactivated before
//! the edit itself; the session layer owns the `modified` flag and viewport follow-up.

use crate::Document;
use crate::Selection;
use crate::commands::Position;
use crate::text::{char_len, has_line_break, split_at_col, split_segments};

/// Delete the active selection and deactivate it.
pub(crate) fn take_selection(
    doc: &mut Document,
    selection: &mut Selection,
    cursor: &mut Position,
) -> bool {
    let deleted = selection.delete(doc, cursor);
    selection.clear();
    deleted
}

/// Insert `text` at the cursor, replacing any active selection.
///
/// Single-line text is spliced in place; text containing a line break (`\n`, `\r\n` or `\r`)
/// is split into lines the same way a multi-line paste is.
pub fn insert_text(
    doc: &mut Document,
    selection: &mut Selection,
    cursor: &mut Position,
    text: &str,
) -> bool {
    let replaced = selection.is_active() && take_selection(doc, selection, cursor);
    if text.is_empty() {
        return replaced;
    }

    *cursor = doc.clamp(*cursor);
    if has_line_break(text) {
        insert_lines(doc, cursor, &split_segments(text));
    } else {
        doc.insert_str(*cursor, text);
        cursor.col += char_len(text);
    }
    true
}

/// Insert `segments` (two or more) as separate lines at the cursor.
///
/// The first segment is appended to the text before the cursor, middle segments become new
/// lines, and the last segment is prefixed to the text that followed the cursor. The cursor
/// ends after the last segment.
pub(crate) fn insert_lines(doc: &mut Document, cursor: &mut Position, segments: &[String]) {
    let Some((last, rest)) = segments.split_last() else {
        return;
    };
    let Some((first, middle)) = rest.split_first() else {
        doc.insert_str(*cursor, last);
        cursor.col += char_len(last);
        return;
    };

    let row = cursor.row;
    let current = doc.line(row);
    let (head, tail) = split_at_col(current, cursor.col);
    let first_line = format!("{head}{first}");
    let last_line = format!("{last}{tail}");

    doc.set_line(row, first_line);
    for (i, line) in middle.iter().enumerate() {
        doc.insert_line(row + 1 + i, line.as_str());
    }
    doc.insert_line(row + segments.len() - 1, last_line);

    *cursor = Position::new(row + segments.len() - 1, char_len(last));
}

/// Delete the selection, or the character before the cursor, or join with the previous line.
pub fn backspace(doc: &mut Document, selection: &mut Selection, cursor: &mut Position) -> bool {
    if selection.is_active() {
        take_selection(doc, selection, cursor);
        return true;
    }

    *cursor = doc.clamp(*cursor);
    if cursor.col > 0 {
        cursor.col -= 1;
        doc.remove_char(*cursor);
        true
    } else if cursor.row > 0 {
        let prev = cursor.row - 1;
        let col = doc.line_len(prev);
        doc.join_with_next(prev);
        *cursor = Position::new(prev, col);
        true
    } else {
        false
    }
}

/// Delete the selection, or the character at the cursor, or join the next line onto this one.
pub fn delete_forward(
    doc: &mut Document,
    selection: &mut Selection,
    cursor: &mut Position,
) -> bool {
    if selection.is_active() {
        take_selection(doc, selection, cursor);
        return true;
    }

    *cursor = doc.clamp(*cursor);
    if cursor.col < doc.line_len(cursor.row) {
        doc.remove_char(*cursor);
        true
    } else if cursor.row < doc.last_row() {
        doc.join_with_next(cursor.row);
        true
    } else {
        false
    }
}

/// Split the current line at the cursor and move to the start of the new line.
pub fn newline(doc: &mut Document, selection: &mut Selection, cursor: &mut Position) -> bool {
    if selection.is_active() {
        take_selection(doc, selection, cursor);
    }

    *cursor = doc.clamp(*cursor);
    doc.split_line(*cursor);
    *cursor = Position::new(cursor.row + 1, 0);
    true
}
