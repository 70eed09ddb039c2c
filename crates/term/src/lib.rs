//! Terminal renderer for the block-falling game.
//!
//! Snapshots are drawn into a plain framebuffer of styled glyphs, which a
//! [`TerminalRenderer`] diffs and flushes through crossterm. Board cells are
//! two columns wide so they come out roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
