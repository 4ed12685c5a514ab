use clap::Parser;
use linedit_canvas::{CanvasApp, CanvasConfig, CanvasConnection, LinePrompt, logging};
use std::{path::PathBuf, process::ExitCode};

/// Line editor driven by a socket canvas.
#[derive(Debug, Parser)]
#[command(name = "linedit", version, about)]
struct Cli {
    /// File to open on startup.
    file: Option<PathBuf>,

    /// Canvas host, overriding the config file.
    #[arg(long, env = "LINEDIT_HOST")]
    host: Option<String>,

    /// Canvas port, overriding the config file.
    #[arg(long, short, env = "LINEDIT_PORT")]
    port: Option<u16>,

    /// JSON config file.
    #[arg(long, short, env = "LINEDIT_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init() {
        eprintln!("Warning: failed to initialize logging: {err}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "linedit exited with an error");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> linedit_canvas::Result<()> {
    let mut config = match &cli.config {
        Some(path) => CanvasConfig::from_json_file(path)?,
        None => CanvasConfig::default(),
    };
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    let mut app = CanvasApp::new(&config, LinePrompt::stdio());
    if let Some(path) = &cli.file {
        // A missing startup file leaves an empty document.
        if let Err(err) = app.open(path) {
            tracing::warn!(%err, "could not open startup file");
        }
    }

    let mut connection = CanvasConnection::connect(&config.host, config.port)?;
    app.run(&mut connection)
}
