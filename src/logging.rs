//! tracing subscriber setup for the binary.

use std::fs::OpenOptions;
use std::str::FromStr;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing::Level;

use crate::cli::Mode;

/// Level from `BLOCKFALL_LOG_LEVEL`, falling back to `info`
pub fn level_from_env() -> Level {
    std::env::var("BLOCKFALL_LOG_LEVEL")
        .ok()
        .and_then(|v| Level::from_str(v.trim()).ok())
        .unwrap_or(Level::INFO)
}

/// Install the global subscriber.
///
/// Headless mode logs to stderr. Terminal mode owns the screen, so it only
/// logs when `BLOCKFALL_LOG` names a file to append to.
pub fn init(mode: Mode) -> Result<()> {
    let level = level_from_env();
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    match mode {
        Mode::Headless => builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow!("logging: {}", e)),
        Mode::Play => {
            let Ok(path) = std::env::var("BLOCKFALL_LOG") else {
                return Ok(());
            };
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("logging: cannot open {}", path))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow!("logging: {}", e))
        }
    }
}
