//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`] values. It holds
//! no state of its own; the caller passes the current game status where a key
//! means different things in different states.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
