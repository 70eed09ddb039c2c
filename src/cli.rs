//! Command-line arguments for the `blockfall` binary.
//!
//! ```text
//! blockfall [play] [--seed N] [--width W] [--height H] [--tick-ms MS] [--no-ticker]
//! blockfall headless [--seed N] [--width W] [--height H] [--tick-ms MS] [--ticker]
//! ```
//!
//! Flags override the `BLOCKFALL_*` environment configuration.

use anyhow::{anyhow, Result};

use crate::engine::EngineConfig;
use crate::types::BoardSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Interactive terminal game
    #[default]
    Play,
    /// JSON-lines commands on stdin, snapshots on stdout
    Headless,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliArgs {
    pub mode: Mode,
    pub seed: Option<u32>,
    pub width: Option<u8>,
    pub height: Option<u8>,
    pub base_tick_ms: Option<u32>,
    /// Explicit ticker choice; each mode has its own default
    pub ticker: Option<bool>,
}

impl CliArgs {
    /// Layer the flags over `config` and validate the result
    pub fn apply(&self, mut config: EngineConfig) -> Result<EngineConfig> {
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.width.is_some() || self.height.is_some() {
            let size = BoardSize::new(
                self.width.unwrap_or(config.board_size.width),
                self.height.unwrap_or(config.board_size.height),
            );
            config = config.with_board_size(size);
        }
        if let Some(ms) = self.base_tick_ms {
            config = config.with_base_tick_ms(ms);
        }
        let ticker = match (self.ticker, self.mode) {
            (Some(on), _) => on,
            (None, Mode::Headless) => false,
            (None, Mode::Play) => config.ticker_enabled,
        };
        config = config.with_ticker(ticker);
        config.validate()?;
        Ok(config)
    }
}

pub fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut rest = args;

    match args.first().map(String::as_str) {
        Some("headless") => {
            parsed.mode = Mode::Headless;
            rest = &args[1..];
        }
        Some("play") => rest = &args[1..],
        _ => {}
    }

    let mut i = 0usize;
    while i < rest.len() {
        match rest[i].as_str() {
            "--seed" => {
                i += 1;
                parsed.seed = Some(value(rest, i, "--seed")?);
            }
            "--width" => {
                i += 1;
                parsed.width = Some(value(rest, i, "--width")?);
            }
            "--height" => {
                i += 1;
                parsed.height = Some(value(rest, i, "--height")?);
            }
            "--tick-ms" => {
                i += 1;
                parsed.base_tick_ms = Some(value(rest, i, "--tick-ms")?);
            }
            "--ticker" => parsed.ticker = Some(true),
            "--no-ticker" => parsed.ticker = Some(false),
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok(parsed)
}

fn value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T> {
    let raw = args
        .get(i)
        .ok_or_else(|| anyhow!("missing value for {}", flag))?;
    raw.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, raw))
}
