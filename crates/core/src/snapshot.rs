//! Read-only snapshot handed to renderers and observers.

use serde::{Deserialize, Serialize};

use crate::piece::{Piece, PieceShape};
use blockfall_types::{Cell, Color, GameStatus};

/// Cells and color of a piece.
///
/// For the active piece `cells` are board coordinates; for the next-piece
/// preview they are the shape offsets around the piece origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub cells: PieceShape,
    pub color: Color,
}

impl PieceSnapshot {
    pub fn placed(piece: &Piece) -> Self {
        Self {
            cells: piece.coordinates(),
            color: piece.color,
        }
    }

    pub fn shape_only(piece: &Piece) -> Self {
        Self {
            cells: piece.shape,
            color: piece.color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Settled cells, row-major, top row first
    pub cells: Vec<Cell>,
    pub active: PieceSnapshot,
    /// Landing projection of the active piece, in board coordinates
    pub ghost: PieceShape,
    pub next: PieceSnapshot,
    pub score: u32,
    pub lines: u32,
    pub status: GameStatus,
    pub velocity: u32,
    pub tick: u32,
    /// Suggested delay before the next gravity tick
    pub tick_interval_ms: u32,
}

impl GameSnapshot {
    /// Settled cell at (x, y); `None` when empty or out of range
    pub fn cell(&self, x: i8, y: i8) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.width as i8 || y >= self.height as i8 {
            return None;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::InProgress
    }
}
