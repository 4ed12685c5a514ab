//! Frame rendering.
//!
//! A frame is rebuilt from scratch on every redraw, from session state only. Draw order:
//! clear, background, status bar, line number gutter, text rows with selection highlight,
//! and finally the caret.

use crate::config::{CanvasConfig, ColorScheme, LayoutMetrics};
use crate::protocol::DrawCommand;
use linedit_core::{EditorSession, Position};

const CARET_WIDTH: i32 = 2;
const STATUS_TEXT_Y: i32 = 3;
const LINE_NUMBER_DIGITS: usize = 4;

/// Builds draw command frames.
#[derive(Debug, Clone)]
pub struct Renderer {
    layout: LayoutMetrics,
    colors: ColorScheme,
}

impl Renderer {
    /// Renderer with explicit metrics and colors.
    pub fn new(layout: LayoutMetrics, colors: ColorScheme) -> Self {
        Self { layout, colors }
    }

    /// Renderer for a loaded configuration.
    pub fn from_config(config: &CanvasConfig) -> Self {
        Self::new(config.layout, config.colors.clone())
    }

    /// The full frame for a `width` x `height` canvas.
    pub fn frame(&self, session: &EditorSession, width: i32, height: i32) -> Vec<DrawCommand> {
        let layout = &self.layout;
        let colors = &self.colors;
        let mut out = vec![
            DrawCommand::Clear,
            DrawCommand::rect(0, 0, width, height, &colors.background),
            DrawCommand::rect(0, 0, width, layout.status_height, &colors.status_background),
            DrawCommand::text(
                layout.padding,
                STATUS_TEXT_Y,
                &colors.status_text,
                session.status_line(),
            ),
            DrawCommand::rect(
                0,
                layout.status_height,
                layout.line_number_width,
                height.saturating_sub(layout.status_height),
                &colors.line_number_background,
            ),
        ];

        let doc = session.document();
        let scroll_row = session.viewport().scroll_row;
        let selection = session.selection().range();
        for row in session.viewport().visible_lines(doc.line_count()) {
            let y = layout.row_y(row - scroll_row);
            out.push(DrawCommand::text(
                layout.padding,
                y,
                &colors.line_number_text,
                format!("{:>width$}", row + 1, width = LINE_NUMBER_DIGITS),
            ));
            self.line(&mut out, doc.line(row), row, y, selection);
        }

        let cursor = session.cursor();
        if cursor.row >= scroll_row {
            out.push(DrawCommand::rect(
                layout.col_x(cursor.col),
                layout.row_y(cursor.row - scroll_row),
                CARET_WIDTH,
                layout.char_height,
                &colors.cursor,
            ));
        }
        out
    }

    fn line(
        &self,
        out: &mut Vec<DrawCommand>,
        text: &str,
        row: usize,
        y: i32,
        selection: Option<(Position, Position)>,
    ) {
        let layout = &self.layout;
        let colors = &self.colors;
        let len = text.chars().count();
        let Some((start, end)) = selection.and_then(|range| selected_cols(range, row, len)) else {
            if !text.is_empty() {
                out.push(DrawCommand::text(layout.col_x(0), y, &colors.text, text));
            }
            return;
        };

        let before: String = text.chars().take(start).collect();
        let selected: String = text.chars().skip(start).take(end - start).collect();
        let after: String = text.chars().skip(end).collect();

        if !before.is_empty() {
            out.push(DrawCommand::text(layout.col_x(0), y, &colors.text, before));
        }
        if end > start {
            out.push(DrawCommand::rect(
                layout.col_x(start),
                y,
                layout.col_x(end).saturating_sub(layout.col_x(start)),
                layout.char_height,
                &colors.selection_background,
            ));
            out.push(DrawCommand::text(
                layout.col_x(start),
                y,
                &colors.text,
                selected,
            ));
        }
        if !after.is_empty() {
            out.push(DrawCommand::text(layout.col_x(end), y, &colors.text, after));
        }
    }
}

/// Selected column span `[start, end)` of `row`, or `None` when the row is outside the range.
fn selected_cols(range: (Position, Position), row: usize, len: usize) -> Option<(usize, usize)> {
    let (start, end) = range;
    if row < start.row || row > end.row {
        return None;
    }
    let from = if row == start.row { start.col } else { 0 };
    let to = if row == end.row { end.col } else { len };
    Some((from.min(len), to.min(len)))
}
