//! Front end configuration.
//!
//! Every field has a default, so a JSON config file only needs the keys it overrides:
//!
//! ```json
//! { "port": 6000, "layout": { "char_width": 9 }, "colors": { "cursor": "#0000ff" } }
//! ```

use crate::error::{CanvasError, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Connection, layout and color settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas host to connect to.
    pub host: String,
    /// Canvas port.
    pub port: u16,
    /// Pixel metrics.
    pub layout: LayoutMetrics,
    /// Colors used by the renderer.
    pub colors: ColorScheme,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5005,
            layout: LayoutMetrics::default(),
            colors: ColorScheme::default(),
        }
    }
}

impl CanvasConfig {
    /// Load a JSON config file. Missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|err| CanvasError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Self::from_json_str(&text).map_err(|err| CanvasError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    /// Parse a JSON config document.
    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// `host:port` for the canvas connection.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Pixel geometry of the canvas and its fixed-width character grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    /// Initial canvas width, until the first resize event.
    pub canvas_width: i32,
    /// Initial canvas height.
    pub canvas_height: i32,
    /// Width of one character cell.
    pub char_width: i32,
    /// Height of one character cell.
    pub char_height: i32,
    /// Gap between the gutter/status bar and the text.
    pub padding: i32,
    /// Height of the status bar at the top.
    pub status_height: i32,
    /// Width of the line number gutter.
    pub line_number_width: i32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 600,
            char_width: 8,
            char_height: 14,
            padding: 5,
            status_height: 20,
            line_number_width: 40,
        }
    }
}

impl LayoutMetrics {
    /// X coordinate where text column 0 starts.
    pub fn text_area_left(&self) -> i32 {
        self.line_number_width.saturating_add(self.padding)
    }

    /// Y coordinate where the first visible text row starts.
    pub fn text_area_top(&self) -> i32 {
        self.status_height.saturating_add(self.padding)
    }

    /// Character cell width, never zero.
    pub fn cell_width(&self) -> i32 {
        self.char_width.max(1)
    }

    /// Character cell height, never zero.
    pub fn cell_height(&self) -> i32 {
        self.char_height.max(1)
    }

    /// Text rows that fit on a canvas `height` pixels tall.
    pub fn visible_rows(&self, height: i32) -> usize {
        let span = height
            .saturating_sub(self.text_area_top())
            .saturating_sub(self.padding);
        fit_cells(span, self.cell_height())
    }

    /// Text columns that fit on a canvas `width` pixels wide.
    pub fn visible_cols(&self, width: i32) -> usize {
        let span = width
            .saturating_sub(self.text_area_left())
            .saturating_sub(self.padding);
        fit_cells(span, self.cell_width())
    }

    /// Visible row index under pixel `y`, or `None` above the text area.
    pub fn row_at(&self, y: i32) -> Option<usize> {
        let offset = y.checked_sub(self.text_area_top())?;
        usize::try_from(offset / self.cell_height()).ok()
    }

    /// Column index under pixel `x`, or `None` left of the text area.
    pub fn col_at(&self, x: i32) -> Option<usize> {
        let offset = x.checked_sub(self.text_area_left())?;
        usize::try_from(offset / self.cell_width()).ok()
    }

    /// Pixel y of visible row `index`.
    pub fn row_y(&self, index: usize) -> i32 {
        self.text_area_top()
            .saturating_add(to_pixels(index).saturating_mul(self.char_height))
    }

    /// Pixel x of column `col`.
    pub fn col_x(&self, col: usize) -> i32 {
        self.text_area_left()
            .saturating_add(to_pixels(col).saturating_mul(self.char_width))
    }
}

fn fit_cells(span: i32, cell: i32) -> usize {
    usize::try_from(span / cell).unwrap_or(0)
}

fn to_pixels(cells: usize) -> i32 {
    i32::try_from(cells).unwrap_or(i32::MAX)
}

/// Renderer colors, as `#rrggbb` strings passed through to the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    /// Canvas background.
    pub background: String,
    /// Document text.
    pub text: String,
    /// Caret.
    pub cursor: String,
    /// Status bar background.
    pub status_background: String,
    /// Status bar text.
    pub status_text: String,
    /// Gutter background.
    pub line_number_background: String,
    /// Gutter text.
    pub line_number_text: String,
    /// Selection highlight.
    pub selection_background: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#000000".to_string(),
            cursor: "#ff0000".to_string(),
            status_background: "#cccccc".to_string(),
            status_text: "#000000".to_string(),
            line_number_background: "#eeeeee".to_string(),
            line_number_text: "#555555".to_string(),
            selection_background: "#add8e6".to_string(),
        }
    }
}
