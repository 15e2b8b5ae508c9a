//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for cache locality; every row operation is an in-place `copy_within`.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).

use arrayvec::ArrayVec;

use tetrissy_types::{Cell, PieceKind, Point, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// Row indices cleared by a single [`Board::clear_full_rows`] call.
///
/// Sized for the whole board so pathological inputs cannot overflow it.
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// One board row, left to right
pub type Row = [Cell; WIDTH];

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Build a board from rows, top row first
    pub fn from_rows(rows: [Row; HEIGHT]) -> Self {
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            board.cells[y * WIDTH..(y + 1) * WIDTH].copy_from_slice(row);
        }
        board
    }

    #[inline(always)]
    fn index(p: Point) -> Option<usize> {
        if !Self::in_bounds(p) {
            return None;
        }
        Some((p.y as usize) * WIDTH + (p.x as usize))
    }

    #[inline(always)]
    fn in_bounds(p: Point) -> bool {
        p.x >= 0 && (p.x as usize) < WIDTH && p.y >= 0 && (p.y as usize) < HEIGHT
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// x in [0, W) and y in [0, H)
    pub fn is_in_bounds(&self, p: Point) -> bool {
        Self::in_bounds(p)
    }

    /// Get cell at `p`, or `None` if out of bounds
    pub fn get(&self, p: Point) -> Option<Cell> {
        Self::index(p).map(|idx| self.cells[idx])
    }

    /// True only for in-bounds, filled cells
    pub fn is_occupied(&self, p: Point) -> bool {
        matches!(self.get(p), Some(Some(_)))
    }

    /// Write a cell. Out-of-range writes are ignored and return false.
    ///
    /// Cells of a piece still hanging above the board (negative `y`) take this path when
    /// the piece locks.
    pub fn set_cell(&mut self, p: Point, cell: Cell) -> bool {
        match Self::index(p) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Stamp a piece's cells with its kind, skipping any that are off the board
    pub fn stamp(&mut self, cells: &[Point], kind: PieceKind) {
        for &p in cells {
            self.set_cell(p, Some(kind));
        }
    }

    pub fn row(&self, y: usize) -> &[Cell] {
        assert!(y < HEIGHT, "row {} out of range", y);
        &self.cells[y * WIDTH..(y + 1) * WIDTH]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Remove every full row, shift the survivors down in their original order and refill
    /// the top with empty rows. Returns the cleared row indices, top to bottom.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let mut write_y = HEIGHT;

        // Two pointers, bottom up: survivors are copied down to `write_y`.
        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    self.cells
                        .copy_within(read_y * WIDTH..(read_y + 1) * WIDTH, write_y * WIDTH);
                }
            }
        }

        self.cells[..write_y * WIDTH].fill(None);

        cleared_rows.reverse();
        cleared_rows
    }

    /// Drop the top row and push a garbage row at the bottom: every cell is `fill` except
    /// `hole_column`.
    pub fn inject_garbage_row(&mut self, hole_column: u8, fill: PieceKind) {
        assert!(
            hole_column < BOARD_WIDTH,
            "garbage hole column {} out of range",
            hole_column
        );
        self.shift_up();
        let bottom = &mut self.cells[(HEIGHT - 1) * WIDTH..];
        bottom.fill(Some(fill));
        bottom[hole_column as usize] = None;
    }

    /// Drop the top row and push an empty row at the bottom
    pub fn scroll_up_one(&mut self) {
        self.shift_up();
        self.cells[(HEIGHT - 1) * WIDTH..].fill(None);
    }

    /// Rows 1..H move to 0..H-1; the bottom row keeps stale contents for the caller to fill.
    fn shift_up(&mut self) {
        self.cells.copy_within(WIDTH.., 0);
    }

    /// Copy the grid out as rows, top row first
    pub fn to_rows(&self) -> [Row; HEIGHT] {
        let mut rows = [[None; WIDTH]; HEIGHT];
        for (y, row) in rows.iter_mut().enumerate() {
            row.copy_from_slice(self.row(y));
        }
        rows
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
