//! Character-indexed string helpers.
//!
//! Columns throughout the crate count `char`s, not bytes. These helpers convert between the
//! two so that splicing never lands inside a multi-byte sequence.

pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte index of the `col`-th character, clamped to the end of `text`.
pub(crate) fn byte_index(text: &str, col: usize) -> usize {
    text.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Split `text` at character column `col` (clamped).
pub(crate) fn split_at_col(text: &str, col: usize) -> (&str, &str) {
    text.split_at(byte_index(text, col))
}

/// Characters `[start, end)` of `text`, both clamped.
pub(crate) fn slice_cols(text: &str, start: usize, end: usize) -> &str {
    let start = byte_index(text, start);
    let end = byte_index(text, end).max(start);
    &text[start..end]
}

/// Split pasted or typed text into line segments on `\n`, `\r\n` or a lone `\r`.
pub(crate) fn split_segments(text: &str) -> Vec<String> {
    // Trailing empty segments are kept, so "a\n" yields two segments; a pasted payload ending
    // in a newline therefore opens a fresh line.
    text.replace("\r\n", "\n")
        .split(['\n', '\r'])
        .map(str::to_string)
        .collect()
}

/// Whether `text` contains any line terminator.
pub(crate) fn has_line_break(text: &str) -> bool {
    text.contains(['\n', '\r'])
}
