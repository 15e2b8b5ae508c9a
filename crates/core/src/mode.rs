//! Mode policies
//!
//! Everything that differs between game modes sits behind [`ModePolicy`], so the state
//! machine in [`crate::game_state`] never branches on the mode itself. Each mode is a unit
//! struct; [`policy`] maps a [`GameMode`] to its static instance.

use rand::{Rng, RngCore};

use tetrissy_types::{
    GameMode, PieceKind, BOARD_WIDTH, CHAOS_FALL_MS, CLASSIC_FALL_MS, GARBAGE_ODDS,
    MARATHON_FALL_MS, SPRINT_FALL_MS, SPRINT_TARGET_LINES, ZEN_FALL_MS,
};

use crate::board::Board;
use crate::scoring::{marathon_fall_interval_ms, marathon_level};

/// What to do when a freshly spawned piece collides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnCollision {
    /// The policy made room; try the spawn pose again
    Retry,
    /// End the game
    GameOver,
}

/// A garbage row pushed in by a tick hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GarbageRow {
    pub hole_column: u8,
    pub fill: PieceKind,
}

/// Per-mode rules hooked into the engine
pub trait ModePolicy: Send + Sync {
    fn mode(&self) -> GameMode;

    /// Fall interval at the start of a game, in milliseconds
    fn base_fall_interval_ms(&self) -> u32;

    /// Fall interval for a level
    fn fall_interval_ms(&self, _level: u32) -> u32 {
        self.base_fall_interval_ms()
    }

    /// New level after a tick, if it went up
    fn on_level_recalc(&self, _lines: u32, _level: u32) -> Option<u32> {
        None
    }

    /// Runs after the tick's gravity step
    fn on_tick(&self, _board: &mut Board, _rng: &mut dyn RngCore) -> Option<GarbageRow> {
        None
    }

    fn on_spawn_collision(&self, _board: &mut Board) -> SpawnCollision {
        SpawnCollision::GameOver
    }

    /// Mode-specific finish line
    fn is_completed(&self, _lines: u32) -> bool {
        false
    }
}

/// Fixed pace, no extras
#[derive(Debug, Clone, Copy, Default)]
pub struct Classic;

impl ModePolicy for Classic {
    fn mode(&self) -> GameMode {
        GameMode::Classic
    }

    fn base_fall_interval_ms(&self) -> u32 {
        CLASSIC_FALL_MS
    }
}

/// Levels up every 10 lines and speeds up with each level
#[derive(Debug, Clone, Copy, Default)]
pub struct Marathon;

impl ModePolicy for Marathon {
    fn mode(&self) -> GameMode {
        GameMode::Marathon
    }

    fn base_fall_interval_ms(&self) -> u32 {
        MARATHON_FALL_MS
    }

    fn fall_interval_ms(&self, level: u32) -> u32 {
        marathon_fall_interval_ms(level)
    }

    fn on_level_recalc(&self, lines: u32, level: u32) -> Option<u32> {
        let next = marathon_level(lines);
        (next > level).then_some(next)
    }
}

/// Very fast gravity; done at 40 lines
#[derive(Debug, Clone, Copy, Default)]
pub struct Sprint;

impl ModePolicy for Sprint {
    fn mode(&self) -> GameMode {
        GameMode::Sprint
    }

    fn base_fall_interval_ms(&self) -> u32 {
        SPRINT_FALL_MS
    }

    fn is_completed(&self, lines: u32) -> bool {
        lines >= SPRINT_TARGET_LINES
    }
}

/// Never ends: a blocked spawn scrolls the board instead
#[derive(Debug, Clone, Copy, Default)]
pub struct Zen;

impl ModePolicy for Zen {
    fn mode(&self) -> GameMode {
        GameMode::Zen
    }

    fn base_fall_interval_ms(&self) -> u32 {
        ZEN_FALL_MS
    }

    fn on_spawn_collision(&self, board: &mut Board) -> SpawnCollision {
        board.scroll_up_one();
        SpawnCollision::Retry
    }
}

/// Random garbage rows push the stack up
#[derive(Debug, Clone, Copy, Default)]
pub struct Chaos;

impl ModePolicy for Chaos {
    fn mode(&self) -> GameMode {
        GameMode::Chaos
    }

    fn base_fall_interval_ms(&self) -> u32 {
        CHAOS_FALL_MS
    }

    fn on_tick(&self, board: &mut Board, rng: &mut dyn RngCore) -> Option<GarbageRow> {
        if rng.gen_range(0..GARBAGE_ODDS) != 0 {
            return None;
        }
        let row = GarbageRow {
            hole_column: rng.gen_range(0..BOARD_WIDTH),
            fill: PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())],
        };
        board.inject_garbage_row(row.hole_column, row.fill);
        Some(row)
    }
}

/// The policy for a mode
pub fn policy(mode: GameMode) -> &'static dyn ModePolicy {
    match mode {
        GameMode::Classic => &Classic,
        GameMode::Marathon => &Marathon,
        GameMode::Sprint => &Sprint,
        GameMode::Zen => &Zen,
        GameMode::Chaos => &Chaos,
    }
}
