//! Pieces module - tetromino shapes and kick-free rotation
//!
//! Each kind has four fixed rotation states, stored as offsets from the piece origin.
//! Rotation simply selects the next table entry; nothing is computed at runtime and no
//! alternate offsets are tried when the rotated pose is blocked.

use tetrissy_types::{PieceKind, Point, BOARD_WIDTH};

/// Shape of a piece - 4 mino offsets from piece origin
pub type PieceShape = [Point; 4];

/// Number of rotation states per kind
pub const ROTATION_STATES: u8 = 4;

/// Spawn origin for new pieces
pub const SPAWN_ORIGIN: Point = Point::new((BOARD_WIDTH / 2) as i8, 0);

const fn p(x: i8, y: i8) -> Point {
    Point::new(x, y)
}

const I_STATES: [PieceShape; 4] = [
    [p(-2, 0), p(-1, 0), p(0, 0), p(1, 0)],
    [p(0, -1), p(0, 0), p(0, 1), p(0, 2)],
    [p(-2, 1), p(-1, 1), p(0, 1), p(1, 1)],
    [p(-1, -1), p(-1, 0), p(-1, 1), p(-1, 2)],
];

const O_STATES: [PieceShape; 4] = [[p(0, 0), p(1, 0), p(0, 1), p(1, 1)]; 4];

const T_STATES: [PieceShape; 4] = [
    [p(-1, 0), p(0, 0), p(1, 0), p(0, 1)],
    [p(0, -1), p(0, 0), p(0, 1), p(1, 0)],
    [p(-1, 0), p(0, 0), p(1, 0), p(0, -1)],
    [p(0, -1), p(0, 0), p(0, 1), p(-1, 0)],
];

// S and Z only have two distinct orientations; states 2 and 3 repeat 0 and 1.
const S_STATES: [PieceShape; 4] = [
    [p(0, 0), p(1, 0), p(-1, 1), p(0, 1)],
    [p(0, -1), p(0, 0), p(1, 0), p(1, 1)],
    [p(0, 0), p(1, 0), p(-1, 1), p(0, 1)],
    [p(0, -1), p(0, 0), p(1, 0), p(1, 1)],
];

const Z_STATES: [PieceShape; 4] = [
    [p(-1, 0), p(0, 0), p(0, 1), p(1, 1)],
    [p(1, -1), p(0, 0), p(1, 0), p(0, 1)],
    [p(-1, 0), p(0, 0), p(0, 1), p(1, 1)],
    [p(1, -1), p(0, 0), p(1, 0), p(0, 1)],
];

const J_STATES: [PieceShape; 4] = [
    [p(-1, 0), p(0, 0), p(1, 0), p(-1, 1)],
    [p(0, -1), p(0, 0), p(0, 1), p(1, -1)],
    [p(-1, 0), p(0, 0), p(1, 0), p(1, -1)],
    [p(0, -1), p(0, 0), p(0, 1), p(-1, 1)],
];

const L_STATES: [PieceShape; 4] = [
    [p(-1, 0), p(0, 0), p(1, 0), p(1, 1)],
    [p(0, -1), p(0, 0), p(0, 1), p(1, 1)],
    [p(-1, 0), p(0, 0), p(1, 0), p(-1, -1)],
    [p(0, -1), p(0, 0), p(0, 1), p(-1, -1)],
];

/// All four rotation states for a piece kind
pub fn rotation_states(kind: PieceKind) -> &'static [PieceShape; 4] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::Z => &Z_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
    }
}

/// Offsets for a kind at a rotation index. The index wraps modulo 4.
pub fn rotation_state(kind: PieceKind, index: u8) -> PieceShape {
    rotation_states(kind)[(index % ROTATION_STATES) as usize]
}

/// Active falling piece.
///
/// Moves and rotations return a new value; the engine swaps it in only when the new pose
/// is legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    /// Rotation index, always in `0..4`
    pub rotation: u8,
    pub origin: Point,
}

impl Piece {
    /// A piece at the spawn pose (rotation 0, [`SPAWN_ORIGIN`])
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            origin: SPAWN_ORIGIN,
        }
    }

    pub fn shape(&self) -> PieceShape {
        rotation_state(self.kind, self.rotation)
    }

    /// Absolute board cells covered by this piece
    pub fn cells(&self) -> [Point; 4] {
        self.shape()
            .map(|offset| self.origin.offset(offset.x, offset.y))
    }

    pub fn moved(&self, dx: i8, dy: i8) -> Self {
        Self {
            origin: self.origin.offset(dx, dy),
            ..*self
        }
    }

    /// Same origin, next rotation state
    pub fn rotated(&self) -> Self {
        Self {
            rotation: (self.rotation + 1) % ROTATION_STATES,
            ..*self
        }
    }
}
