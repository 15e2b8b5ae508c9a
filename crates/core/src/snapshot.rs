use serde::{Deserialize, Serialize};

use tetrissy_types::{
    Cell, GameMode, PieceKind, Point, BOARD_HEIGHT, BOARD_WIDTH, NEXT_PREVIEW,
};

use crate::game_state::GameStatus;
use crate::pieces::Piece;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: u8,
    pub origin: Point,
    pub cells: [Point; 4],
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            origin: value.origin,
            cells: value.cells(),
        }
    }
}

/// Read-only view of the engine handed to renderers and drivers after each mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub mode: GameMode,
    pub status: GameStatus,
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub next_queue: [PieceKind; NEXT_PREVIEW],
    pub hold: Option<PieceKind>,
    pub can_hold: bool,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub paused: bool,
    pub game_over: bool,
    pub sprint_completed: bool,
    pub last_clear_count: u32,
    pub fall_interval_ms: u32,
    pub episode_id: u32,
    pub piece_id: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }

    /// Last lock cleared 2+ lines
    pub fn celebrate(&self) -> bool {
        self.last_clear_count >= 2
    }

    /// Filled cells on the board (not counting the active piece)
    pub fn filled_cells(&self) -> usize {
        self.board
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_some())
            .count()
    }
}
