//! Logging setup.
//!
//! ## Environment Variables
//!
//! 1. **`LINEDIT_LOG`** (highest priority): a level such as `debug` applies to the linedit
//!    crates only; a full directive string (`linedit_core=trace,warn`) is used as-is.
//! 2. **`RUST_LOG`**: standard tracing filter.
//! 3. **Default**: `warn` globally, `info` for the linedit crates.
//!
//! Logs go to stderr so they never interleave with the stdin file prompts.

use std::env;
use tracing_subscriber::{EnvFilter, fmt};

/// Linedit-specific log variable.
pub const LINEDIT_LOG: &str = "LINEDIT_LOG";

const CRATES: [&str; 2] = ["linedit_core", "linedit_canvas"];

/// Install the global subscriber.
///
/// Safe to call more than once; later calls report the existing subscriber as an error.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    fmt()
        .with_env_filter(create_filter())
        .with_writer(std::io::stderr)
        .try_init()
}

/// Initialize logging for tests, ignoring an already installed subscriber.
pub fn test() {
    let _ = fmt()
        .with_env_filter(create_filter())
        .with_test_writer()
        .try_init();
}

fn create_filter() -> EnvFilter {
    if let Ok(value) = env::var(LINEDIT_LOG) {
        return expand_linedit_log(&value);
    }
    if let Ok(rust_log) = env::var("RUST_LOG") {
        return EnvFilter::new(rust_log);
    }
    EnvFilter::new(crate_directives("info"))
}

fn expand_linedit_log(value: &str) -> EnvFilter {
    if value.contains(['=', ':', ',']) {
        return EnvFilter::new(value);
    }
    EnvFilter::new(crate_directives(value))
}

fn crate_directives(level: &str) -> String {
    let mut directives = String::from("warn");
    for name in CRATES {
        directives.push_str(&format!(",{name}={level}"));
    }
    directives
}
