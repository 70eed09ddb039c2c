//! Game state module - the reducer
//!
//! [`GameState`] is an immutable value. [`GameState::reduce`] takes a
//! [`Command`] and returns the next state; illegal moves return an unchanged
//! copy instead of an error. The random source lives inside the state, so the
//! same state and command always produce the same result.

use crate::bag::Bag;
use crate::board::Board;
use crate::piece::Piece;
use crate::rng::{PieceRng, SimpleRng};
use crate::scoring::{default_tick_interval_ms, line_clear_score, velocity_for_tick};
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use blockfall_types::{BoardSize, Command, Direction, GameStatus, INITIAL_VELOCITY};

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState<R: PieceRng = SimpleRng> {
    size: BoardSize,
    active: Piece,
    /// Lowest valid resting position of `active` (the ghost)
    projection: Piece,
    bag: Bag,
    board: Board,
    status: GameStatus,
    /// Successful gravity steps since start
    tick: u32,
    velocity: u32,
    score: u32,
    /// Rows cleared since start
    lines: u32,
    /// Pieces committed into the board since start
    pieces_locked: u32,
    rng: R,
}

impl GameState<SimpleRng> {
    /// Start a game on an empty board, dealing from a [`SimpleRng`] seeded with `seed`
    pub fn start(size: BoardSize, seed: u32) -> Self {
        Self::start_with_rng(size, SimpleRng::new(seed))
    }
}

impl<R: PieceRng> GameState<R> {
    /// Start a game on an empty board with a caller-supplied random source
    ///
    /// # Panics
    ///
    /// If `size` is outside `MIN_BOARD_DIM..=MAX_BOARD_DIM` in either dimension.
    pub fn start_with_rng(size: BoardSize, mut rng: R) -> Self {
        assert!(
            size.is_supported(),
            "unsupported board size {}x{}",
            size.width,
            size.height
        );
        let mut bag = Bag::generate(size, &mut rng);
        let active = bag.pop(size, &mut rng);
        let board = Board::new(size);
        let projection = project(&board, &active);

        Self {
            size,
            active,
            projection,
            bag,
            board,
            status: GameStatus::InProgress,
            tick: 0,
            velocity: INITIAL_VELOCITY,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            rng,
        }
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn projection(&self) -> &Piece {
        &self.projection
    }

    /// Head of the bag: the piece dealt at the next lock
    pub fn next_piece(&self) -> &Piece {
        self.bag.peek()
    }

    pub fn bag(&self) -> &Bag {
        &self.bag
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn velocity(&self) -> u32 {
        self.velocity
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Replace the settled cells, e.g. to set up a scenario.
    ///
    /// # Panics
    ///
    /// If `board` does not match this game's size.
    pub fn with_board(mut self, board: Board) -> Self {
        assert_eq!(board.size(), self.size, "board size mismatch");
        self.board = board;
        self.projection = project(&self.board, &self.active);
        self
    }

    /// Replace the active piece without validating it
    pub fn with_active_piece(mut self, piece: Piece) -> Self {
        self.active = piece;
        self.projection = project(&self.board, &self.active);
        self
    }

    /// Whether the active piece can fall one more row
    pub fn can_descend(&self) -> bool {
        self.board.is_valid_location(&self.active.moved(0, 1))
    }

    /// Apply one command and return the resulting state.
    ///
    /// The receiver is never modified. Commands that do not apply in the
    /// current status, and moves the board rejects, yield an equal copy.
    pub fn reduce(&self, command: Command) -> Self {
        match command {
            Command::Tick => self.gravity_step(),
            Command::Move { direction, force } => self.shift(direction, force),
            Command::Rotate => self.rotate(),
            Command::Pause => self.pause(),
            Command::Resume => self.resume(),
            Command::Restart => self.restart(),
            Command::PrimaryAction => {
                if self.status == GameStatus::GameOver {
                    self.restart()
                } else {
                    self.rotate()
                }
            }
        }
    }

    /// Read-only view for renderers and observers
    pub fn snapshot(&self) -> GameSnapshot {
        let next = self.bag.peek();
        GameSnapshot {
            width: self.size.width,
            height: self.size.height,
            cells: self.board.cells().to_vec(),
            active: PieceSnapshot::placed(&self.active),
            ghost: self.projection.coordinates(),
            next: PieceSnapshot::shape_only(next),
            score: self.score,
            lines: self.lines,
            status: self.status,
            velocity: self.velocity,
            tick: self.tick,
            tick_interval_ms: default_tick_interval_ms(self.velocity),
        }
    }

    fn pause(&self) -> Self {
        match self.status {
            GameStatus::InProgress => Self {
                status: GameStatus::Paused,
                ..self.clone()
            },
            GameStatus::Paused | GameStatus::GameOver => self.clone(),
        }
    }

    fn resume(&self) -> Self {
        match self.status {
            GameStatus::Paused => Self {
                status: GameStatus::InProgress,
                ..self.clone()
            },
            GameStatus::InProgress | GameStatus::GameOver => self.clone(),
        }
    }

    /// Fresh game of the same size; the random source carries on from here
    fn restart(&self) -> Self {
        Self::start_with_rng(self.size, self.rng.clone())
    }

    fn shift(&self, direction: Direction, force: bool) -> Self {
        if self.status != GameStatus::InProgress {
            return self.clone();
        }

        let candidate = if force && direction == Direction::Down {
            self.projection
        } else {
            let (dx, dy) = direction.offset();
            self.active.moved(dx, dy)
        };
        self.accept_if_valid(candidate)
    }

    fn rotate(&self) -> Self {
        if self.status != GameStatus::InProgress {
            return self.clone();
        }

        let candidate = self.active.rotate().adjust_offset(self.size);
        self.accept_if_valid(candidate)
    }

    fn accept_if_valid(&self, candidate: Piece) -> Self {
        if !self.board.is_valid_location(&candidate) {
            return self.clone();
        }
        Self {
            active: candidate,
            projection: project(&self.board, &candidate),
            ..self.clone()
        }
    }

    fn gravity_step(&self) -> Self {
        if self.status != GameStatus::InProgress {
            return self.clone();
        }

        if self.can_descend() {
            let tick = self.tick.wrapping_add(1);
            Self {
                tick,
                velocity: velocity_for_tick(tick),
                ..self.shift(Direction::Down, false)
            }
        } else {
            self.lock()
        }
    }

    /// Commit the active piece, clear rows, score them and deal the next piece
    fn lock(&self) -> Self {
        let (board, rows) = self
            .board
            .clone()
            .commit(&self.active)
            .clear_completed_rows();

        let mut rng = self.rng.clone();
        let mut bag = self.bag.clone();
        let active = bag.pop(self.size, &mut rng);
        let projection = project(&board, &active);
        let status = if board.is_valid_location(&active) {
            self.status
        } else {
            GameStatus::GameOver
        };

        Self {
            size: self.size,
            active,
            projection,
            bag,
            board,
            status,
            tick: self.tick,
            velocity: self.velocity,
            score: self.score.saturating_add(line_clear_score(rows)),
            lines: self.lines.saturating_add(rows as u32),
            pieces_locked: self.pieces_locked.wrapping_add(1),
            rng,
        }
    }
}

/// Drop `piece` row by row until the next row would be invalid
pub fn project(board: &Board, piece: &Piece) -> Piece {
    let mut landed = *piece;
    loop {
        let next = landed.moved(0, 1);
        if !board.is_valid_location(&next) {
            return landed;
        }
        landed = next;
    }
}
