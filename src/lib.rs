//! Block-falling puzzle game (workspace facade crate).
//!
//! Re-exports the member crates under short names and hosts the pieces the
//! binary is built from: argument parsing, logging setup and headless mode.

pub mod cli;
pub mod headless;
pub mod logging;

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
