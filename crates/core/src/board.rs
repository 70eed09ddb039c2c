//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is empty or holds a
//! color. Storage is a flat row-major vector for cache locality.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom;
//! row 0 is the top row.

use crate::piece::Piece;
use blockfall_types::{BoardSize, Cell, Color};

/// The game board using flat vector storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: BoardSize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    ///
    /// # Panics
    ///
    /// If `size` is outside `MIN_BOARD_DIM..=MAX_BOARD_DIM` in either dimension.
    pub fn new(size: BoardSize) -> Self {
        assert!(
            size.is_supported(),
            "unsupported board size {}x{}",
            size.width,
            size.height
        );
        Self {
            size,
            cells: vec![None; size.area()],
        }
    }

    /// Build a board from explicit rows (top row first).
    ///
    /// # Panics
    ///
    /// If the rows are ragged or the resulting size is unsupported.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        assert!(
            rows.iter().all(|row| row.len() == width),
            "board rows must all have width {}",
            width
        );
        let size = BoardSize::new(
            u8::try_from(width).unwrap_or(u8::MAX),
            u8::try_from(height).unwrap_or(u8::MAX),
        );
        assert!(
            size.is_supported(),
            "unsupported board size {}x{}",
            size.width,
            size.height
        );

        Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.size.width as usize) + (x as usize))
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn width(&self) -> u8 {
        self.size.width
    }

    pub fn height(&self) -> u8 {
        self.size.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || x >= self.size.width as i8 || y < 0 || y >= self.size.height as i8
    }

    /// Whether `piece` may occupy its current position.
    ///
    /// Every cell must be inside `[0, width)` horizontally and above the
    /// bottom edge, and must not overlap a settled cell. Cells above the top
    /// edge (negative y) are allowed so a piece can poke out of the board.
    pub fn is_valid_location(&self, piece: &Piece) -> bool {
        piece.coordinates().iter().all(|&(x, y)| {
            if x < 0 || x >= self.size.width as i8 || y >= self.size.height as i8 {
                return false;
            }
            y < 0 || self.is_valid(x, y)
        })
    }

    /// Write the piece's color into every cell it covers.
    ///
    /// Callers validate first with [`Board::is_valid_location`].
    ///
    /// # Panics
    ///
    /// If any cell of the piece lies outside the board.
    pub fn commit(mut self, piece: &Piece) -> Self {
        for (x, y) in piece.coordinates() {
            let placed = self.set(x, y, Some(piece.color));
            assert!(
                placed,
                "committed cell ({}, {}) outside {}x{} board",
                x,
                y,
                self.size.width,
                self.size.height
            );
        }
        self
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.size.height as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Remove every full row, drop the rows above into the gap and insert
    /// blank rows at the top. Returns the board and the number of rows removed.
    ///
    /// Uses a two-pointer pass from the bottom, moving rows with `copy_within`.
    pub fn clear_completed_rows(mut self) -> (Self, usize) {
        let width = self.size.width as usize;
        let height = self.size.height as usize;
        let mut write_y = height;
        let mut cleared = 0;

        // Scan from bottom to top
        for read_y in (0..height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        // Blank the rows vacated at the top
        self.cells[..write_y * width].fill(None);

        (self, cleared)
    }

    /// Cells of row `y`
    pub fn row(&self, y: usize) -> &[Cell] {
        let width = self.size.width as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.width as usize)
    }

    /// Flat row-major cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert to a 2D vector (top row first)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }

    /// Count settled cells of a given color
    pub fn count_color(&self, color: Color) -> usize {
        self.cells.iter().filter(|c| **c == Some(color)).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}
