//! Piece module - immutable falling piece
//!
//! A piece is a set of four cell offsets around an origin, the origin's
//! position on the board, and a color. All operations return new values.
//! There is no wall-kick table: after a rotation the piece is only clamped
//! back inside the board with [`Piece::adjust_offset`].

use blockfall_types::{BoardSize, Color, PieceKind};

/// Offset of a single cell relative to the piece origin
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the piece origin
pub type PieceShape = [CellOffset; 4];

/// A falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: PieceShape,
    pub offset: (i8, i8),
    pub color: Color,
}

impl Piece {
    pub fn new(shape: PieceShape, offset: (i8, i8), color: Color) -> Self {
        Self {
            shape,
            offset,
            color,
        }
    }

    /// Canonical piece of `kind` with its origin at `offset`
    pub fn from_kind(kind: PieceKind, offset: (i8, i8)) -> Self {
        Self::new(kind.cells(), offset, kind.color())
    }

    /// Absolute board coordinates of every cell
    pub fn coordinates(&self) -> [(i8, i8); 4] {
        let (ox, oy) = self.offset;
        self.shape.map(|(x, y)| (x + ox, y + oy))
    }

    /// Translate by `(dx, dy)`. Never checks the board.
    pub fn moved(&self, dx: i8, dy: i8) -> Self {
        Self {
            offset: (self.offset.0 + dx, self.offset.1 + dy),
            ..*self
        }
    }

    /// Rotate every cell 90° about the origin: `(x, y) -> (y, -x)`
    pub fn rotate(&self) -> Self {
        Self {
            shape: self.shape.map(|(x, y)| (y, -x)),
            ..*self
        }
    }

    /// Smallest translation that brings every coordinate inside the board.
    ///
    /// Each axis is handled on its own: a coordinate below 0 pushes the piece
    /// forward by that amount, a coordinate past the last index pulls it back.
    /// Pieces already inside the board are returned unchanged.
    pub fn adjust_offset(&self, size: BoardSize) -> Self {
        let coords = self.coordinates();
        let dx = axis_correction(coords.iter().map(|c| c.0), size.width as i8);
        let dy = axis_correction(coords.iter().map(|c| c.1), size.height as i8);
        self.moved(dx, dy)
    }
}

fn axis_correction(values: impl Iterator<Item = i8> + Clone, bound: i8) -> i8 {
    let min = values.clone().min().unwrap_or(0);
    let max = values.max().unwrap_or(0);

    let mut shift = 0;
    if min < 0 {
        shift += -min;
    }
    if max > bound - 1 {
        shift += (bound - 1) - max;
    }
    shift
}
