//! Line-delimited canvas protocol.
//!
//! Input events arrive one per line as comma-separated fields:
//!
//! ```text
//! resize,<width>,<height>
//! keydown,<keyname>
//! keyup,<keyname>
//! mousedown,<x>,<y>
//! mousemove,<x>,<y>
//! mouseup,<x>,<y>
//! ```
//!
//! Draw commands go the other way, also one per line: `clear`, `rect,x,y,w,h,color` and
//! `text,x,y,color,payload`. A text payload is sent verbatim and may itself contain commas.

use std::fmt;

/// An event received from the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Canvas size changed.
    Resize {
        /// New width in pixels.
        width: i32,
        /// New height in pixels.
        height: i32,
    },
    /// Key pressed.
    KeyDown(String),
    /// Key released.
    KeyUp(String),
    /// Mouse button pressed.
    MouseDown {
        /// Pixel x.
        x: i32,
        /// Pixel y.
        y: i32,
    },
    /// Mouse moved with the button held.
    MouseMove {
        /// Pixel x.
        x: i32,
        /// Pixel y.
        y: i32,
    },
    /// Mouse button released.
    MouseUp {
        /// Pixel x.
        x: i32,
        /// Pixel y.
        y: i32,
    },
}

impl InputEvent {
    /// Parse one protocol line. Unknown tags and malformed fields yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (tag, rest) = line.split_once(',')?;
        match tag {
            // Key names are taken whole so a literal "," key survives.
            "keydown" if !rest.is_empty() => Some(Self::KeyDown(rest.to_string())),
            "keyup" if !rest.is_empty() => Some(Self::KeyUp(rest.to_string())),
            "resize" => {
                let (width, height) = parse_pair(rest)?;
                Some(Self::Resize { width, height })
            }
            "mousedown" => parse_pair(rest).map(|(x, y)| Self::MouseDown { x, y }),
            "mousemove" => parse_pair(rest).map(|(x, y)| Self::MouseMove { x, y }),
            "mouseup" => parse_pair(rest).map(|(x, y)| Self::MouseUp { x, y }),
            _ => None,
        }
    }
}

fn parse_pair(fields: &str) -> Option<(i32, i32)> {
    let mut parts = fields.split(',');
    let first = parts.next()?.trim().parse().ok()?;
    let second = parts.next()?.trim().parse().ok()?;
    Some((first, second))
}

/// A drawing instruction for the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    /// Erase the canvas.
    Clear,
    /// Filled rectangle.
    Rect {
        /// Left edge.
        x: i32,
        /// Top edge.
        y: i32,
        /// Width in pixels.
        width: i32,
        /// Height in pixels.
        height: i32,
        /// Fill color.
        color: String,
    },
    /// Text anchored at its top-left corner.
    Text {
        /// Left edge.
        x: i32,
        /// Top edge.
        y: i32,
        /// Text color.
        color: String,
        /// Text to draw.
        text: String,
    },
}

impl DrawCommand {
    /// Rectangle helper.
    pub fn rect(x: i32, y: i32, width: i32, height: i32, color: &str) -> Self {
        Self::Rect {
            x,
            y,
            width,
            height,
            color: color.to_string(),
        }
    }

    /// Text helper.
    pub fn text(x: i32, y: i32, color: &str, text: impl Into<String>) -> Self {
        Self::Text {
            x,
            y,
            color: color.to_string(),
            text: text.into(),
        }
    }
}

/// Encodes the command as one protocol line, without the trailing newline.
impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clear => f.write_str("clear"),
            Self::Rect {
                x,
                y,
                width,
                height,
                color,
            } => write!(f, "rect,{x},{y},{width},{height},{color}"),
            Self::Text { x, y, color, text } => write!(f, "text,{x},{y},{color},{text}"),
        }
    }
}
