//! Shared types - plain data used by the engine, the driver and the snapshot consumers
//!
//! Everything in here is pure data with no game logic attached, so it can be handed to a
//! renderer, a feedback collaborator or a serializer without pulling in the core crate.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn origin**: (5, 0), i.e. `(BOARD_WIDTH / 2, 0)`
//!
//! Pieces may hang above the visible board (negative `y`) while spawning or rotating.
//!
//! # Mode Pacing
//!
//! Fall intervals are in milliseconds:
//!
//! | Mode | Baseline | Notes |
//! |------|----------|-------|
//! | Classic | 700ms | fixed |
//! | Marathon | 800ms | `max(100, 800 - 35 * (level - 1))`, level capped at 20 |
//! | Sprint | 50ms | complete at 40 lines |
//! | Zen | 700ms | spawn collisions scroll the board instead of ending the game |
//! | Chaos | 600ms | 1-in-16 chance of a garbage row per tick |
//!
//! # Examples
//!
//! ```
//! use tetrissy_types::{GameAction, GameMode, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(GameMode::from_str("sprint"), Some(GameMode::Sprint));
//! assert_eq!(GameMode::Sprint.display_name(), "Sprint 40");
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Number of upcoming pieces exposed in the next-queue preview
pub const NEXT_PREVIEW: usize = 5;

/// Line clear reward table, indexed by clear count capped at 4.
///
/// Points are multiplied by the current level (which starts at 1).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Lines needed to finish a sprint
pub const SPRINT_TARGET_LINES: u32 = 40;

/// Lines per marathon level
pub const MARATHON_LINES_PER_LEVEL: u32 = 10;

/// Highest reachable marathon level
pub const MARATHON_MAX_LEVEL: u32 = 20;

/// Classic fall interval (700ms)
pub const CLASSIC_FALL_MS: u32 = 700;

/// Marathon fall interval at level 1 (800ms)
pub const MARATHON_FALL_MS: u32 = 800;

/// Marathon speed-up per level (35ms)
pub const MARATHON_FALL_STEP_MS: u32 = 35;

/// Marathon fall interval floor (100ms)
pub const MARATHON_FALL_FLOOR_MS: u32 = 100;

/// Sprint fall interval (50ms)
pub const SPRINT_FALL_MS: u32 = 50;

/// Zen fall interval (700ms)
pub const ZEN_FALL_MS: u32 = 700;

/// Chaos fall interval (600ms)
pub const CHAOS_FALL_MS: u32 = 600;

/// Chaos injects a garbage row when a roll in `0..GARBAGE_ODDS` comes up zero
pub const GARBAGE_ODDS: u32 = 16;


/// Integer board coordinate or piece-relative offset.
///
/// `x` grows to the right, `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i8,
    pub y: i8,
}

impl Point {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`
    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The seven tetromino piece kinds
///
/// - **I**: four in a row
/// - **O**: 2x2 square, same in every rotation
/// - **T**: T-shaped
/// - **S**: S-shaped, two orientations
/// - **Z**: mirror of S
/// - **J**: J-shaped
/// - **L**: mirror of J
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in declaration order. One full bag.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Position in [`PieceKind::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use tetrissy_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Game modes
///
/// The mode decides pacing, leveling and what happens when a spawn collides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Classic,
    Marathon,
    Sprint,
    Zen,
    Chaos,
}

impl GameMode {
    pub const ALL: [GameMode; 5] = [
        GameMode::Classic,
        GameMode::Marathon,
        GameMode::Sprint,
        GameMode::Zen,
        GameMode::Chaos,
    ];

    /// Parse from the lowercase id or the display name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Some(GameMode::Classic),
            "marathon" => Some(GameMode::Marathon),
            "sprint" | "sprint 40" | "sprint40" => Some(GameMode::Sprint),
            "zen" => Some(GameMode::Zen),
            "chaos" => Some(GameMode::Chaos),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Classic => "classic",
            GameMode::Marathon => "marathon",
            GameMode::Sprint => "sprint",
            GameMode::Zen => "zen",
            GameMode::Chaos => "chaos",
        }
    }

    /// Human-facing name for menus and results screens
    pub fn display_name(&self) -> &'static str {
        match self {
            GameMode::Classic => "Classic",
            GameMode::Marathon => "Marathon",
            GameMode::Sprint => "Sprint 40",
            GameMode::Zen => "Zen",
            GameMode::Chaos => "Chaos",
        }
    }
}

/// Discrete commands accepted by the engine.
///
/// Every action is a silent no-op when it is illegal in the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Advance to the next rotation state (no wall kicks)
    Rotate,
    /// Drop one cell, locking if blocked
    SoftDrop,
    /// Drop to the lowest legal position and lock
    HardDrop,
    /// Swap with the held piece (once per spawn)
    Hold,
    /// Toggle pause
    PauseResume,
    /// Start over in the same mode
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive, camelCase names)
    ///
    /// ```
    /// use tetrissy_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("pause"), Some(GameAction::PauseResume));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotate" => Some(GameAction::Rotate),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "hold" => Some(GameAction::Hold),
            "pause" | "pauseresume" => Some(GameAction::PauseResume),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Hold => "hold",
            GameAction::PauseResume => "pauseResume",
            GameAction::Restart => "restart",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;
