//! TCP connection to the canvas.
//!
//! A reader thread splits the incoming byte stream into lines, parses them, and pushes the
//! events into an mpsc channel. The owner of the [`CanvasConnection`] drains that channel
//! and is the only one that touches the editor session.

use crate::error::{CanvasError, Result};
use crate::protocol::{DrawCommand, InputEvent};
use std::{
    io::{self, BufRead, BufReader, BufWriter, Write},
    net::TcpStream,
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

/// Message from the reader thread.
#[derive(Debug)]
pub enum TransportEvent {
    /// A parsed input event.
    Input(InputEvent),
    /// The canvas hung up, or reading failed with the given error.
    Closed(Option<io::Error>),
}

/// Live connection to a canvas process.
pub struct CanvasConnection {
    writer: BufWriter<TcpStream>,
    events: Receiver<TransportEvent>,
}

impl CanvasConnection {
    /// Connect to `host:port` and start the reader thread.
    pub fn connect(host: &str, port: u16) -> Result<Self> {
        let stream = TcpStream::connect((host, port))?;
        tracing::info!(host, port, "connected to canvas");
        Self::from_stream(stream)
    }

    /// Use an already connected stream.
    pub fn from_stream(stream: TcpStream) -> Result<Self> {
        let reader = BufReader::new(stream.try_clone()?);
        let (tx, events) = mpsc::channel();
        thread::Builder::new()
            .name("canvas-reader".to_string())
            .spawn(move || read_events(reader, &tx))?;
        Ok(Self {
            writer: BufWriter::new(stream),
            events,
        })
    }

    /// Send a frame, one line per command.
    pub fn send(&mut self, commands: &[DrawCommand]) -> Result<()> {
        write_commands(&mut self.writer, commands)?;
        Ok(())
    }

    /// Block until the next event. `None` once the reader thread is gone.
    pub fn recv(&self) -> Option<TransportEvent> {
        self.events.recv().ok()
    }
}

impl std::fmt::Debug for CanvasConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasConnection")
            .field("peer", &self.writer.get_ref().peer_addr().ok())
            .finish_non_exhaustive()
    }
}

/// Write `commands` as protocol lines and flush.
pub fn write_commands<W: Write>(writer: &mut W, commands: &[DrawCommand]) -> io::Result<()> {
    for command in commands {
        writeln!(writer, "{command}")?;
    }
    writer.flush()
}

/// Read protocol lines until EOF or error, forwarding parsed events in arrival order.
///
/// Ends with a [`TransportEvent::Closed`]. Unparsable lines are dropped.
pub fn read_events<R: BufRead>(mut reader: R, tx: &Sender<TransportEvent>) {
    let mut line = String::new();
    let error = loop {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break None,
            Ok(_) => match InputEvent::parse(&line) {
                Some(event) => {
                    if tx.send(TransportEvent::Input(event)).is_err() {
                        return;
                    }
                }
                None => tracing::trace!(line = line.trim_end(), "dropped input line"),
            },
            Err(err) => break Some(err),
        }
    };
    match &error {
        Some(err) => tracing::warn!(%err, "canvas read failed"),
        None => tracing::info!("canvas disconnected"),
    }
    let _ = tx.send(TransportEvent::Closed(error));
}
