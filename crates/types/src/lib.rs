//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable by the engine, the terminal renderer and the input mapper alike.
//!
//! # Board Dimensions
//!
//! Default playfield dimensions (configurable at game creation):
//!
//! - **Rows**: 20 (indexed 0-19, row 0 is the top)
//! - **Columns**: 10 (indexed 0-9)
//! - **Spawn origin**: (row 0, column 4)
//!
//! # Scoring and Timing Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `POINTS_PER_PIECE` | 10 | Awarded on every spawn |
//! | `POINTS_PER_LINE` | 100 | Awarded once per cleared line |
//! | `BASE_INTERVAL_MS` | 1000 | Tick interval before any speed-up |
//! | `LINES_PER_SPEEDUP` | 5 | Lines needed for each 10% speed-up |
//!
//! # Examples
//!
//! ```
//! use classic_tetris_types::{Cell, Color, Command, ShapeKind, BOARD_COLUMNS, BOARD_ROWS};
//!
//! let kind = ShapeKind::T;
//! assert_eq!(kind.color(), Color::Cyan);
//! assert_eq!(Cell::Filled(kind.color()).color(), Some(Color::Cyan));
//!
//! // Commands parse case-insensitively
//! assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
//!
//! assert_eq!(BOARD_ROWS, 20);
//! assert_eq!(BOARD_COLUMNS, 10);
//! ```

/// Default board height in cells
pub const BOARD_ROWS: i32 = 20;

/// Default board width in cells
pub const BOARD_COLUMNS: i32 = 10;

/// Origin of every freshly spawned piece as (row, column)
pub const SPAWN_ORIGIN: (i32, i32) = (0, 4);

/// Points awarded each time a piece is spawned
pub const POINTS_PER_PIECE: u32 = 10;

/// Points awarded for each cleared line
pub const POINTS_PER_LINE: u32 = 100;

/// Tick interval with zero lines cleared (milliseconds)
pub const BASE_INTERVAL_MS: u32 = 1000;

/// Every this many cleared lines the tick interval shrinks by a tenth of the base
pub const LINES_PER_SPEEDUP: u32 = 5;

/// The seven colours of the palette, one per shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Red,
    Blue,
    Green,
    Magenta,
    Yellow,
    Black,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Cyan => "cyan",
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Magenta => "magenta",
            Color::Yellow => "yellow",
            Color::Black => "black",
        }
    }
}

/// A single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Color),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_filled(&self) -> bool {
        !self.is_empty()
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Filled(color) => Some(*color),
        }
    }
}

/// The seven piece shapes
///
/// - **T**: cyan, T-shaped
/// - **I**: red, long bar
/// - **O**: blue, 2x2 square (never rotates)
/// - **J**: green, bar with the foot under its right end
/// - **L**: magenta, bar with the foot under its left end
/// - **S**: yellow, upper pair shifted left
/// - **Z**: black, upper pair shifted right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    T,
    I,
    O,
    J,
    L,
    S,
    Z,
}

impl ShapeKind {
    /// Every shape, in table order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::T,
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Fixed colour of the shape
    pub fn color(&self) -> Color {
        match self {
            ShapeKind::T => Color::Cyan,
            ShapeKind::I => Color::Red,
            ShapeKind::O => Color::Blue,
            ShapeKind::J => Color::Green,
            ShapeKind::L => Color::Magenta,
            ShapeKind::S => Color::Yellow,
            ShapeKind::Z => Color::Black,
        }
    }

    /// Parse shape kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "t" => Some(ShapeKind::T),
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::T => "t",
            ShapeKind::I => "i",
            ShapeKind::O => "o",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
        }
    }
}

/// Inbound commands from the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    TogglePause,
    NewGame,
}

impl Command {
    /// Parse command from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "rotate" => Some(Command::Rotate),
            "softdrop" => Some(Command::SoftDrop),
            "togglepause" | "pause" => Some(Command::TogglePause),
            "newgame" => Some(Command::NewGame),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::Rotate => "rotate",
            Command::SoftDrop => "softDrop",
            Command::TogglePause => "togglePause",
            Command::NewGame => "newGame",
        }
    }

    /// Whether the command is still honoured while the game is not running
    pub fn allowed_when_stopped(&self) -> bool {
        matches!(self, Command::TogglePause | Command::NewGame)
    }
}

/// Run state of the game controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunState {
    #[default]
    Running,
    Paused,
    GameOver,
}

impl RunState {
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Running => "running",
            RunState::Paused => "paused",
            RunState::GameOver => "gameOver",
        }
    }
}
