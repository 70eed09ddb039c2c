//! Engine configuration from environment variables.
//!
//! - `BLOCKFALL_BOARD_WIDTH` / `BLOCKFALL_BOARD_HEIGHT`: board size (default 12 x 24)
//! - `BLOCKFALL_SEED`: bag seed (default: derived from the clock)
//! - `BLOCKFALL_BASE_TICK_MS`: gravity period at velocity 1 (default 300)
//! - `BLOCKFALL_TICKER_DISABLED`: "1" or "true" turns off the gravity ticker

use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use blockfall_types::{BoardSize, BASE_TICK_MS, MAX_BOARD_DIM, MIN_BOARD_DIM};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: expected a number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("board size {width}x{height} outside supported range {min}..={max}")]
    BoardSize {
        width: u32,
        height: u32,
        min: u8,
        max: u8,
    },
    #[error("base tick period must be greater than zero")]
    ZeroTickPeriod,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub board_size: BoardSize,
    pub seed: u32,
    pub base_tick_ms: u32,
    /// Whether the engine drives gravity itself
    pub ticker_enabled: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: BoardSize::default(),
            seed: 1,
            base_tick_ms: BASE_TICK_MS,
            ticker_enabled: true,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key/value source (unset keys take defaults)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let width = parse_var(&lookup, "BLOCKFALL_BOARD_WIDTH")?
            .unwrap_or(BoardSize::default().width as u32);
        let height = parse_var(&lookup, "BLOCKFALL_BOARD_HEIGHT")?
            .unwrap_or(BoardSize::default().height as u32);
        let board_size = checked_size(width, height)?;

        let seed = parse_var(&lookup, "BLOCKFALL_SEED")?.unwrap_or_else(clock_seed);

        let base_tick_ms = parse_var(&lookup, "BLOCKFALL_BASE_TICK_MS")?.unwrap_or(BASE_TICK_MS);
        if base_tick_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }

        let ticker_enabled = !lookup("BLOCKFALL_TICKER_DISABLED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Ok(Self {
            board_size,
            seed,
            base_tick_ms,
            ticker_enabled,
        })
    }

    pub fn with_board_size(mut self, size: BoardSize) -> Self {
        self.board_size = size;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_base_tick_ms(mut self, base_tick_ms: u32) -> Self {
        self.base_tick_ms = base_tick_ms;
        self
    }

    pub fn with_ticker(mut self, enabled: bool) -> Self {
        self.ticker_enabled = enabled;
        self
    }

    /// Check invariants the builder methods do not enforce
    pub fn validate(&self) -> Result<(), ConfigError> {
        checked_size(self.board_size.width as u32, self.board_size.height as u32)?;
        if self.base_tick_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        Ok(())
    }
}

fn parse_var(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<u32>, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidNumber { var, value: raw })
}

fn checked_size(width: u32, height: u32) -> Result<BoardSize, ConfigError> {
    let range = MIN_BOARD_DIM as u32..=MAX_BOARD_DIM as u32;
    if !range.contains(&width) || !range.contains(&height) {
        return Err(ConfigError::BoardSize {
            width,
            height,
            min: MIN_BOARD_DIM,
            max: MAX_BOARD_DIM,
        });
    }
    Ok(BoardSize::new(width as u8, height as u8))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = EngineConfig::from_lookup(lookup(&[("BLOCKFALL_SEED", "7")])).unwrap();
        assert_eq!(config.board_size, BoardSize::new(12, 24));
        assert_eq!(config.seed, 7);
        assert_eq!(config.base_tick_ms, 300);
        assert!(config.ticker_enabled);
    }

    #[test]
    fn reads_every_variable() {
        let config = EngineConfig::from_lookup(lookup(&[
            ("BLOCKFALL_BOARD_WIDTH", "10"),
            ("BLOCKFALL_BOARD_HEIGHT", " 20 "),
            ("BLOCKFALL_SEED", "99"),
            ("BLOCKFALL_BASE_TICK_MS", "500"),
            ("BLOCKFALL_TICKER_DISABLED", "TRUE"),
        ]))
        .unwrap();
        assert_eq!(config.board_size, BoardSize::new(10, 20));
        assert_eq!(config.seed, 99);
        assert_eq!(config.base_tick_ms, 500);
        assert!(!config.ticker_enabled);
    }

    #[test]
    fn rejects_bad_numbers() {
        let err = EngineConfig::from_lookup(lookup(&[("BLOCKFALL_BOARD_WIDTH", "wide")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                var: "BLOCKFALL_BOARD_WIDTH",
                value: "wide".to_string()
            }
        );
    }

    #[test]
    fn rejects_out_of_range_board() {
        let err = EngineConfig::from_lookup(lookup(&[("BLOCKFALL_BOARD_HEIGHT", "300")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::BoardSize { height: 300, .. }));
        assert!(err.to_string().contains("12x300"));
    }

    #[test]
    fn rejects_zero_tick_period() {
        let err = EngineConfig::from_lookup(lookup(&[("BLOCKFALL_BASE_TICK_MS", "0")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::ZeroTickPeriod);
        assert_eq!(
            EngineConfig::default().with_base_tick_ms(0).validate(),
            Err(ConfigError::ZeroTickPeriod)
        );
    }

    #[test]
    fn builder_overrides() {
        let config = EngineConfig::default()
            .with_board_size(BoardSize::new(8, 16))
            .with_seed(3)
            .with_ticker(false);
        assert_eq!(config.board_size, BoardSize::new(8, 16));
        assert_eq!(config.seed, 3);
        assert!(!config.ticker_enabled);
        assert!(config.validate().is_ok());
    }
}
