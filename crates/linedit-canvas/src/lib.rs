//! Socket canvas front end for `linedit-core`.
//!
//! The canvas is a separate process that owns the window. It sends input events as text
//! lines over TCP and receives draw commands back:
//!
//! ```text
//! canvas --(resize/keydown/mousedown...)--> transport --> mpsc --> Dispatcher --> EditorSession
//! canvas <--(clear/rect/text)-------------- transport <-- Renderer <-----------------'
//! ```
//!
//! # Example
//!
//! ```
//! use linedit_canvas::{CanvasConfig, Dispatcher, InputEvent, Renderer};
//! use linedit_core::EditorSession;
//!
//! let config = CanvasConfig::default();
//! let mut dispatcher = Dispatcher::new(EditorSession::new(), config.layout);
//!
//! let event = InputEvent::parse("keydown,h").unwrap();
//! assert!(dispatcher.handle(event).redraw);
//!
//! let (width, height) = dispatcher.canvas_size();
//! let frame = Renderer::from_config(&config).frame(dispatcher.session(), width, height);
//! assert_eq!(frame[0].to_string(), "clear");
//! ```

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod files;
pub mod keymap;
pub mod logging;
pub mod protocol;
pub mod render;
pub mod transport;

pub use app::CanvasApp;
pub use config::{CanvasConfig, ColorScheme, LayoutMetrics};
pub use dispatcher::{Dispatcher, FileAction, Response};
pub use error::{CanvasError, Result};
pub use files::{LinePrompt, PathPrompt};
pub use keymap::{KeyAction, Modifiers};
pub use protocol::{DrawCommand, InputEvent};
pub use render::Renderer;
pub use transport::{CanvasConnection, TransportEvent};
