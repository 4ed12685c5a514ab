//! Whole-file open and save.
//!
//! A failed open leaves the session untouched and a failed save leaves it modified.

use crate::error::{CanvasError, Result};
use linedit_core::EditorSession;
use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

/// Asks the user for a file path.
pub trait PathPrompt {
    /// Show `message` and return the answer, or `None` when the user cancels.
    fn ask_path(&mut self, message: &str) -> Option<PathBuf>;
}

/// Prompt prefix for opening a file.
pub const OPEN_PROMPT: &str = "Enter filename to open: ";
/// Prompt prefix for saving a file.
pub const SAVE_PROMPT: &str = "Enter filename to save: ";

/// Prompts on a line-oriented reader and writer, such as the terminal.
#[derive(Debug)]
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    /// Prompt over `input` and `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LinePrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the process terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PathPrompt for LinePrompt<R, W> {
    fn ask_path(&mut self, message: &str) -> Option<PathBuf> {
        if let Err(err) = write!(self.output, "{message}").and_then(|()| self.output.flush()) {
            tracing::warn!(%err, "failed to show prompt");
            return None;
        }
        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => {
                let answer = answer.trim();
                (!answer.is_empty()).then(|| PathBuf::from(answer))
            }
            Err(err) => {
                tracing::warn!(%err, "failed to read prompt answer");
                None
            }
        }
    }
}

/// Read a whole file as text.
pub fn open(path: &Path) -> Result<(String, PathBuf)> {
    let text = fs::read_to_string(path).map_err(|source| CanvasError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((text, path.to_path_buf()))
}

/// Load `path` into `session`.
pub fn open_into(session: &mut EditorSession, path: &Path) -> Result<()> {
    let (text, path) = open(path)?;
    session.load(&text, path);
    Ok(())
}

/// Write the session's contents to `path` and mark it saved.
pub fn save(session: &mut EditorSession, path: &Path) -> Result<()> {
    fs::write(path, session.contents()).map_err(|source| CanvasError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    session.mark_saved(path);
    tracing::debug!(path = %path.display(), "document saved");
    Ok(())
}

/// Ask for a path and open it. Returns `false` when the prompt was cancelled.
pub fn open_with_prompt(session: &mut EditorSession, prompt: &mut impl PathPrompt) -> Result<bool> {
    let Some(path) = prompt.ask_path(OPEN_PROMPT) else {
        return Ok(false);
    };
    open_into(session, &path)?;
    Ok(true)
}

/// Save to the session's path, asking for one if the document is unnamed.
///
/// Returns `false` when the prompt was cancelled.
pub fn save_with_prompt(session: &mut EditorSession, prompt: &mut impl PathPrompt) -> Result<bool> {
    let path = match session.file_path() {
        Some(path) => path.to_path_buf(),
        None => match prompt.ask_path(SAVE_PROMPT) {
            Some(path) => path,
            None => return Ok(false),
        },
    };
    save(session, &path)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_line_prompt_trims_answer() {
        let mut output = Vec::new();
        let mut prompt = LinePrompt::new(Cursor::new("  notes.txt \n"), &mut output);

        assert_eq!(prompt.ask_path(OPEN_PROMPT), Some(PathBuf::from("notes.txt")));
        assert_eq!(output, OPEN_PROMPT.as_bytes());
    }

    #[test]
    fn test_line_prompt_empty_answer_cancels() {
        let mut prompt = LinePrompt::new(Cursor::new("\n"), Vec::new());
        assert_eq!(prompt.ask_path(SAVE_PROMPT), None);

        let mut closed = LinePrompt::new(Cursor::new(""), Vec::new());
        assert_eq!(closed.ask_path(SAVE_PROMPT), None);
    }
}
