//! Line ending helpers.
//!
//! Documents never store line terminators. When a file is opened its text is split on `\n`,
//! `\r\n` and a lone `\r`, and the dominant terminator is remembered so that saving writes the same one
//! back as the single separator between lines.

/// The line separator used when saving a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    /// Unix-style LF (`'\n'`).
    #[default]
    Lf,
    /// Windows-style CRLF (`"\r\n"`).
    Crlf,
}

impl LineEnding {
    /// Detect the line ending of a source text.
    ///
    /// Policy: if the input contains any CRLF (`"\r\n"`), returns [`LineEnding::Crlf`],
    /// otherwise [`LineEnding::Lf`].
    pub fn detect_in_text(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::Crlf
        } else {
            Self::Lf
        }
    }

    /// The separator string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }
}

/// Split file text into lines.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A final terminator does not produce an
/// extra empty segment (`"a\n"` yields `["a"]`);
/// [`Document::replace_all`](crate::Document::replace_all) re-adds the trailing empty line.
pub fn split_file_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(end) = rest.find(['\r', '\n']) {
        lines.push(&rest[..end]);
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
    }
    if !rest.is_empty() {
        lines.push(rest);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect() {
        assert_eq!(LineEnding::detect_in_text("a\nb"), LineEnding::Lf);
        assert_eq!(LineEnding::detect_in_text("a\r\nb\n"), LineEnding::Crlf);
    }

    #[test]
    fn test_split_file_lines() {
        assert_eq!(split_file_lines("a\r\nb\n"), vec!["a", "b"]);
        assert_eq!(split_file_lines(""), Vec::<&str>::new());
        assert_eq!(split_file_lines("\n"), vec![""]);
    }

    #[test]
    fn test_split_file_lines_lone_cr_and_mixed() {
        assert_eq!(split_file_lines("a\rb\r"), vec!["a", "b"]);
        assert_eq!(split_file_lines("a\nb\r"), vec!["a", "b"]);
        assert_eq!(split_file_lines("a\r\r\nb\n\rc"), vec!["a", "", "b", "", "c"]);
        assert_eq!(split_file_lines("\r"), vec![""]);
    }
}
