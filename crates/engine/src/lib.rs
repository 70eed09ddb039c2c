//! Async engine around the pure game reducer.
//!
//! Commands from any number of producers go into a single FIFO queue. One
//! worker reduces them in order, so the state is never mutated concurrently.
//!
//! ```no_run
//! use blockfall_engine::{EngineConfig, EngineHandle};
//! use blockfall_types::Command;
//!
//! # async fn demo() -> Result<(), blockfall_engine::EngineError> {
//! let handle = EngineHandle::spawn(EngineConfig::from_env()?)?;
//! handle.send(Command::Rotate)?;
//! let final_state = handle.shutdown().await?;
//! println!("score: {}", final_state.score());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod observer;
pub mod runtime;

pub use config::{ConfigError, EngineConfig};
pub use error::EngineError;
pub use observer::StateObserver;
pub use runtime::{CommandSender, EngineHandle};
