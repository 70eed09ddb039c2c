//! Core types module - shared data structures and constants
//!
//! This module defines the plain data exchanged between the game core, the
//! engine runtime and the front ends. Everything here is a value type with no
//! behavior beyond parsing and small lookups.
//!
//! # Board Dimensions
//!
//! The default playfield is 12 columns by 24 rows. Row 0 is the top row;
//! x grows to the right and y grows downward.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_TICK_MS` | 300 | Gravity period at velocity 1 |
//! | `VELOCITY_PERIOD` | 10 | Velocity is `tick mod VELOCITY_PERIOD` |
//! | `INITIAL_VELOCITY` | 1 | Velocity of a freshly started game |
//!
//! The ticker delay is `BASE_TICK_MS / velocity` (a zero velocity counts as 1).
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, Direction, PieceKind, BoardSize};
//!
//! let size = BoardSize::default();
//! assert_eq!((size.width, size.height), (12, 24));
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_eq!(Direction::Left.offset(), (-1, 0));
//!
//! let cmd = Command::hard_drop();
//! assert_eq!(cmd, Command::Move { direction: Direction::Down, force: true });
//! ```

use serde::{Deserialize, Serialize};

/// Default board width in cells (12 columns)
pub const DEFAULT_BOARD_WIDTH: u8 = 12;

/// Default board height in cells (24 rows)
pub const DEFAULT_BOARD_HEIGHT: u8 = 24;

/// Smallest accepted board dimension. Every canonical shape spans at most 4 cells.
pub const MIN_BOARD_DIM: u8 = 4;

/// Largest accepted board dimension. Keeps every coordinate inside `i8`.
pub const MAX_BOARD_DIM: u8 = 64;

/// Gravity period at velocity 1, in milliseconds
pub const BASE_TICK_MS: u32 = 300;

/// Velocity wraps every `VELOCITY_PERIOD` gravity steps
pub const VELOCITY_PERIOD: u32 = 10;

/// Velocity of a freshly started game
pub const INITIAL_VELOCITY: u32 = 1;

/// Number of pieces in one bag
pub const BAG_SIZE: usize = 7;

/// Points per lock event, indexed by rows cleared (0..=4)
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 700, 1500];

/// Board dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSize {
    pub width: u8,
    pub height: u8,
}

impl BoardSize {
    pub const fn new(width: u8, height: u8) -> Self {
        Self { width, height }
    }

    /// Total number of cells
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether both dimensions lie in `MIN_BOARD_DIM..=MAX_BOARD_DIM`
    pub fn is_supported(&self) -> bool {
        (MIN_BOARD_DIM..=MAX_BOARD_DIM).contains(&self.width)
            && (MIN_BOARD_DIM..=MAX_BOARD_DIM).contains(&self.height)
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT)
    }
}

/// Opaque ARGB color carried by pieces and settled cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    /// Red, green and blue channels (alpha dropped)
    pub fn rgb(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xFF) as u8,
            ((self.0 >> 8) & 0xFF) as u8,
            (self.0 & 0xFF) as u8,
        )
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell filled by a settled piece of that color
pub type Cell = Option<Color>;

/// The seven canonical piece shapes
///
/// Each kind has a fixed color:
/// - **S**: Blue
/// - **Z**: Purple
/// - **I**: Red
/// - **T**: Green
/// - **O**: Yellow
/// - **J**: Sky blue
/// - **L**: Off-white
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    S,
    Z,
    I,
    T,
    O,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in canonical table order
    pub const ALL: [PieceKind; BAG_SIZE] = [
        PieceKind::S,
        PieceKind::Z,
        PieceKind::I,
        PieceKind::T,
        PieceKind::O,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Cell offsets relative to the piece origin, in spawn orientation.
    pub fn cells(&self) -> [(i8, i8); 4] {
        match self {
            PieceKind::S => [(0, -1), (0, 0), (-1, 0), (-1, 1)],
            PieceKind::Z => [(0, -1), (0, 0), (1, 0), (1, 1)],
            PieceKind::I => [(0, -1), (0, 0), (0, 1), (0, 2)],
            PieceKind::T => [(0, 1), (0, 0), (0, -1), (1, 0)],
            PieceKind::O => [(0, 0), (-1, 0), (0, -1), (-1, -1)],
            PieceKind::J => [(-1, -1), (0, -1), (0, 0), (0, 1)],
            PieceKind::L => [(1, -1), (0, -1), (0, 0), (0, 1)],
        }
    }

    pub fn color(&self) -> Color {
        match self {
            PieceKind::S => Color(0xFF3D76B5),
            PieceKind::Z => Color(0xFFA369B8),
            PieceKind::I => Color(0xFFFF0128),
            PieceKind::T => Color(0xFF43D462),
            PieceKind::O => Color(0xFFFBCD05),
            PieceKind::J => Color(0xFF53B1FD),
            PieceKind::L => Color(0xFFEDEAE9),
        }
    }
}

/// Direction of a player move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// Unit offset `(dx, dy)` for one step in this direction
    pub fn offset(&self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Down => "down",
        }
    }
}

/// Commands reduced by the game engine
///
/// This is the only mutation surface: gravity ticks from the timer and
/// intents from the input layer arrive as one of these values.
///
/// Serialized form is internally tagged, e.g.
/// `{"type":"move","direction":"left","force":false}` or `{"type":"tick"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    /// One gravity step
    Tick,
    /// Shift the active piece; `force` with `Down` jumps to the projection
    Move {
        direction: Direction,
        #[serde(default)]
        force: bool,
    },
    /// Rotate the active piece 90°
    Rotate,
    Pause,
    Resume,
    /// Discard the game and start a fresh one of the same size
    Restart,
    /// Contextual tap: restart after game over, rotate otherwise
    PrimaryAction,
}

impl Command {
    /// Single-cell move in `direction`
    pub fn step(direction: Direction) -> Self {
        Command::Move {
            direction,
            force: false,
        }
    }

    /// Jump straight to the landing projection
    pub fn hard_drop() -> Self {
        Command::Move {
            direction: Direction::Down,
            force: true,
        }
    }

    /// Parse the short text form used by scripts and logs
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::{Command, Direction};
    ///
    /// assert_eq!(Command::from_str("tick"), Some(Command::Tick));
    /// assert_eq!(Command::from_str("left"), Some(Command::step(Direction::Left)));
    /// assert_eq!(Command::from_str("hardDrop"), Some(Command::hard_drop()));
    /// assert_eq!(Command::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tick" => Some(Command::Tick),
            "left" => Some(Command::step(Direction::Left)),
            "right" => Some(Command::step(Direction::Right)),
            "down" => Some(Command::step(Direction::Down)),
            "harddrop" | "drop" => Some(Command::hard_drop()),
            "rotate" => Some(Command::Rotate),
            "pause" => Some(Command::Pause),
            "resume" => Some(Command::Resume),
            "restart" => Some(Command::Restart),
            "tap" | "primary" | "primaryaction" => Some(Command::PrimaryAction),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Tick => "tick",
            Command::Move {
                direction: Direction::Down,
                force: true,
            } => "hardDrop",
            Command::Move { direction, .. } => direction.as_str(),
            Command::Rotate => "rotate",
            Command::Pause => "pause",
            Command::Resume => "resume",
            Command::Restart => "restart",
            Command::PrimaryAction => "primaryAction",
        }
    }
}

/// Lifecycle status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    #[default]
    InProgress,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::InProgress => "inProgress",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "gameOver",
        }
    }
}
