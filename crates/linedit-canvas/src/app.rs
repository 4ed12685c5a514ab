//! The front end event loop.

use crate::config::CanvasConfig;
use crate::dispatcher::{Dispatcher, FileAction};
use crate::error::Result;
use crate::files::{self, PathPrompt};
use crate::protocol::{DrawCommand, InputEvent};
use crate::render::Renderer;
use crate::transport::{CanvasConnection, TransportEvent};
use linedit_core::EditorSession;
use std::path::Path;

/// Dispatcher, renderer and file prompt wired together.
#[derive(Debug)]
pub struct CanvasApp<P> {
    dispatcher: Dispatcher,
    renderer: Renderer,
    prompt: P,
}

impl<P: PathPrompt> CanvasApp<P> {
    /// Empty document, configured by `config`.
    pub fn new(config: &CanvasConfig, prompt: P) -> Self {
        Self {
            dispatcher: Dispatcher::new(EditorSession::new(), config.layout),
            renderer: Renderer::from_config(config),
            prompt,
        }
    }

    /// Load `path` into the session.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        files::open_into(self.dispatcher.session_mut(), path)
    }

    /// Apply one event. Returns the new frame when anything visible changed.
    ///
    /// File errors are logged and leave the session as it was.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<Vec<DrawCommand>> {
        let response = self.dispatcher.handle(event);
        let mut redraw = response.redraw;
        if let Some(action) = response.file_action {
            redraw |= self.file_action(action);
        }
        redraw.then(|| self.frame())
    }

    fn file_action(&mut self, action: FileAction) -> bool {
        let session = self.dispatcher.session_mut();
        let result = match action {
            FileAction::Open => files::open_with_prompt(session, &mut self.prompt),
            FileAction::Save => files::save_with_prompt(session, &mut self.prompt),
        };
        match result {
            Ok(done) => {
                if done {
                    tracing::info!(?action, file = %session.file_name(), "file action complete");
                }
                done
            }
            Err(err) => {
                tracing::warn!(?action, %err, "file action failed");
                false
            }
        }
    }

    /// Render the current state.
    pub fn frame(&self) -> Vec<DrawCommand> {
        let (width, height) = self.dispatcher.canvas_size();
        self.renderer.frame(self.dispatcher.session(), width, height)
    }

    /// The dispatcher.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// The prompt.
    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    /// Serve `connection` until the canvas disconnects.
    pub fn run(&mut self, connection: &mut CanvasConnection) -> Result<()> {
        connection.send(&self.frame())?;
        while let Some(event) = connection.recv() {
            match event {
                TransportEvent::Input(event) => {
                    if let Some(frame) = self.handle_event(event) {
                        connection.send(&frame)?;
                    }
                }
                TransportEvent::Closed(None) => break,
                TransportEvent::Closed(Some(err)) => return Err(err.into()),
            }
        }
        Ok(())
    }
}
