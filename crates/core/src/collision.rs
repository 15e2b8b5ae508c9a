//! Collision - legality of a piece pose against the board
//!
//! A pose is illegal when any cell leaves the side walls or the floor, or overlaps a
//! locked cell. Cells above the board (negative `y`, in-range `x`) are allowed: there is
//! no stack up there to hit, which lets pieces spawn and rotate partially off the top.

use tetrissy_types::{Point, BOARD_HEIGHT, BOARD_WIDTH};

use crate::board::Board;
use crate::pieces::Piece;

/// True if any of `cells` is outside the playfield or on an occupied cell
pub fn collides(board: &Board, cells: &[Point]) -> bool {
    cells.iter().any(|&p| {
        if p.x < 0 || p.x >= BOARD_WIDTH as i8 || p.y >= BOARD_HEIGHT as i8 {
            return true;
        }
        p.y >= 0 && board.is_occupied(p)
    })
}

/// [`collides`] for a whole piece
pub fn piece_collides(board: &Board, piece: &Piece) -> bool {
    collides(board, &piece.cells())
}

/// Lowest legal pose reachable by moving straight down from `piece`.
///
/// Returns `piece` itself when it cannot move at all.
pub fn drop_position(board: &Board, piece: &Piece) -> Piece {
    let mut landed = *piece;
    loop {
        let next = landed.moved(0, 1);
        if piece_collides(board, &next) {
            return landed;
        }
        landed = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tetrissy_types::PieceKind;

    fn full_board() -> Board {
        let mut board = Board::new();
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                board.set_cell(Point::new(x, y), Some(PieceKind::I));
            }
        }
        board
    }

    #[test]
    fn test_in_bounds_over_empty_never_collides() {
        let board = Board::new();
        for kind in PieceKind::ALL {
            let piece = Piece::spawn(kind).moved(0, 5);
            assert!(!piece_collides(&board, &piece), "{:?}", kind);
        }
    }

    #[test]
    fn test_walls_and_floor_always_collide() {
        let board = Board::new();
        assert!(collides(&board, &[Point::new(-1, 5)]));
        assert!(collides(&board, &[Point::new(BOARD_WIDTH as i8, 5)]));
        assert!(collides(&board, &[Point::new(4, BOARD_HEIGHT as i8)]));
        // Even above the board the side walls still count.
        assert!(collides(&board, &[Point::new(-1, -3)]));
    }

    #[test]
    fn test_above_board_ignores_stack() {
        let board = full_board();
        let cells = [
            Point::new(3, -1),
            Point::new(4, -1),
            Point::new(5, -2),
            Point::new(6, -4),
        ];
        assert!(!collides(&board, &cells));
    }

    #[test]
    fn test_occupied_cell_collides() {
        let mut board = Board::new();
        board.set_cell(Point::new(5, 10), Some(PieceKind::T));
        assert!(collides(&board, &[Point::new(5, 10)]));
        assert!(!collides(&board, &[Point::new(5, 9)]));
    }

    #[test]
    fn test_drop_position_lands_on_floor() {
        let board = Board::new();
        let landed = drop_position(&board, &Piece::spawn(PieceKind::I));
        assert_eq!(landed.origin.y, BOARD_HEIGHT as i8 - 1);
    }

    #[test]
    fn test_drop_position_lands_on_stack() {
        let mut board = Board::new();
        board.set_cell(Point::new(5, 12), Some(PieceKind::O));
        let landed = drop_position(&board, &Piece::spawn(PieceKind::I));
        assert_eq!(landed.origin.y, 11);
    }
}
