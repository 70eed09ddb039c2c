//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and nothing else. It has no
//! dependencies on terminals, timers or threads, which makes it:
//!
//! - **Deterministic**: the random source is part of the state, so the same
//!   seed and the same commands always replay the same game
//! - **Pure**: [`GameState::reduce`] returns a new state and never mutates
//! - **Portable**: the engine runtime and any front end drive it the same way
//!
//! # Module Structure
//!
//! - [`piece`]: immutable piece (shape, offset, color) with move, rotate and clamp
//! - [`bag`]: 7-bag generator that refills itself the moment it empties
//! - [`board`]: grid with placement validation, commit and row clearing
//! - [`scoring`]: rows-cleared → points, velocity and ticker delay
//! - [`game_state`]: the reducer and its state machine
//! - [`snapshot`]: read-only view for renderers
//! - [`rng`]: pluggable random source with a seedable LCG default
//!
//! # Game Rules
//!
//! - **Gravity**: each `Tick` drops the active piece one row, or locks it
//! - **Lock**: commit, clear full rows, score, deal the next piece; a dealt
//!   piece that collides immediately ends the game
//! - **Rotation**: 90° about the piece origin, then clamped back inside the
//!   board; no wall-kick table
//! - **Ghost Piece**: the lowest valid position of the active piece; hard drop
//!   jumps there
//! - **Scoring**: 100 / 300 / 700 / 1500 for 1–4 rows
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{BoardSize, Command, GameStatus};
//!
//! let game = GameState::start(BoardSize::new(12, 24), 12345);
//!
//! let game = game
//!     .reduce(Command::Tick)
//!     .reduce(Command::Rotate)
//!     .reduce(Command::hard_drop())
//!     .reduce(Command::Tick);
//!
//! assert_eq!(game.pieces_locked(), 1);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

pub mod bag;
pub mod board;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use bag::{generate_bag, Bag};
pub use board::Board;
pub use game_state::{project, GameState};
pub use piece::{Piece, PieceShape};
pub use rng::{PieceRng, SimpleRng};
pub use scoring::{default_tick_interval_ms, line_clear_score, tick_interval_ms, velocity_for_tick};
pub use snapshot::{GameSnapshot, PieceSnapshot};
