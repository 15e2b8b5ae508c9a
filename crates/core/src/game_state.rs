//! Game state module - the engine state machine
//!
//! Ties together the board, the active piece, the bag queue and session counters, and
//! applies the discrete commands an external driver delivers. Mode differences are
//! delegated to [`ModePolicy`](crate::mode::ModePolicy).
//!
//! Illegal commands (blocked moves, a second hold) are silent no-ops that return `false`.
//! Only [`GameState::tick`] looks at the pause and game-over flags; gating player input on
//! them is the driver's job. Game over is a normal outcome, not an error.

use std::time::Duration;

use rand::RngCore;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use tetrissy_types::{GameAction, GameMode, PieceKind, BOARD_HEIGHT, NEXT_PREVIEW};

use crate::board::Board;
use crate::collision::{drop_position, piece_collides};
use crate::events::GameEvent;
use crate::mode::{self, ModePolicy, SpawnCollision};
use crate::pieces::Piece;
use crate::rng::PieceQueue;
use crate::scoring::line_clear_score;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};

/// Coarse lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
    /// Sprint target reached
    Completed,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = ChaCha8Rng> {
    mode: GameMode,
    board: Board,
    active: Option<Piece>,
    hold: Option<PieceKind>,
    can_hold: bool,
    queue: PieceQueue<R>,
    score: u32,
    lines: u32,
    level: u32,
    paused: bool,
    game_over: bool,
    last_clear_count: u32,
    fall_interval_ms: u32,
    /// Increments on restart
    episode_id: u32,
    /// Increments on every spawn from the queue
    piece_id: u32,
    events: Vec<GameEvent>,
}

impl GameState<ChaCha8Rng> {
    /// Create a game with a seeded RNG and spawn the first piece
    pub fn new(mode: GameMode, seed: u64) -> Self {
        Self::with_queue(mode, PieceQueue::from_seed(seed))
    }
}

impl<R: RngCore> GameState<R> {
    /// Create a game drawing all randomness from `rng`
    pub fn with_rng(mode: GameMode, rng: R) -> Self {
        Self::with_queue(mode, PieceQueue::new(rng))
    }

    fn with_queue(mode: GameMode, queue: PieceQueue<R>) -> Self {
        let mut state = Self {
            mode,
            board: Board::new(),
            active: None,
            hold: None,
            can_hold: true,
            queue,
            score: 0,
            lines: 0,
            level: 1,
            paused: false,
            game_over: false,
            last_clear_count: 0,
            fall_interval_ms: mode::policy(mode).base_fall_interval_ms(),
            episode_id: 0,
            piece_id: 0,
            events: Vec::new(),
        };
        state.spawn();
        state
    }

    fn policy(&self) -> &'static dyn ModePolicy {
        mode::policy(self.mode)
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn next_queue(&self) -> [PieceKind; NEXT_PREVIEW] {
        self.queue.preview()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn last_clear_count(&self) -> u32 {
        self.last_clear_count
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    /// Current gravity interval in milliseconds; the tick source runs at this pace
    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn fall_interval(&self) -> Duration {
        Duration::from_millis(self.fall_interval_ms as u64)
    }

    /// Sprint mode with 40+ lines.
    ///
    /// Only a query: ticking carries on after the target unless the driver stops it.
    pub fn sprint_finished(&self) -> bool {
        self.policy().is_completed(self.lines)
    }

    pub fn status(&self) -> GameStatus {
        if self.game_over {
            GameStatus::GameOver
        } else if self.sprint_finished() {
            GameStatus::Completed
        } else if self.paused {
            GameStatus::Paused
        } else {
            GameStatus::Running
        }
    }

    fn playable(&self) -> bool {
        !self.paused && !self.game_over
    }

    /// Drain events queued since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            mode: self.mode,
            status: self.status(),
            board: self.board.to_rows(),
            active: self.active.map(ActiveSnapshot::from),
            next_queue: self.queue.preview(),
            hold: self.hold,
            can_hold: self.can_hold,
            score: self.score,
            lines: self.lines,
            level: self.level,
            paused: self.paused,
            game_over: self.game_over,
            sprint_completed: self.sprint_finished(),
            last_clear_count: self.last_clear_count,
            fall_interval_ms: self.fall_interval_ms,
            episode_id: self.episode_id,
            piece_id: self.piece_id,
        }
    }

    /// Spawn the next queued piece at the spawn pose.
    ///
    /// A blocked spawn is handed to the mode policy, which either makes room (and the
    /// spawn is retried) or ends the game. Returns false on game over.
    pub fn spawn(&mut self) -> bool {
        let piece = Piece::spawn(self.queue.draw());
        self.piece_id = self.piece_id.wrapping_add(1);
        self.can_hold = true;
        self.active = Some(piece);

        // A policy that keeps retrying has scrolled every row away by the last attempt.
        for _ in 0..=BOARD_HEIGHT {
            if !piece_collides(&self.board, &piece) {
                return true;
            }
            match self.policy().on_spawn_collision(&mut self.board) {
                SpawnCollision::Retry => {
                    debug!(kind = ?piece.kind, "spawn blocked, board scrolled");
                    self.events.push(GameEvent::BoardScrolled);
                }
                SpawnCollision::GameOver => {
                    info!(
                        mode = self.mode.as_str(),
                        score = self.score,
                        lines = self.lines,
                        "game over"
                    );
                    self.game_over = true;
                    self.events.push(GameEvent::GameOver);
                    return false;
                }
            }
        }
        true
    }

    /// Translate the active piece if the new pose is legal
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let moved = active.moved(dx, dy);
        if piece_collides(&self.board, &moved) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    /// Shift the active piece one column (`dx` is -1 or 1)
    pub fn move_by(&mut self, dx: i8) -> bool {
        self.try_move(dx, 0)
    }

    /// Advance to the next rotation state in place. No kicks: a blocked rotation fails.
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let rotated = active.rotated();
        if piece_collides(&self.board, &rotated) {
            return false;
        }
        self.active = Some(rotated);
        true
    }

    /// Move down one row, or lock where it stands if that is blocked
    pub fn soft_drop(&mut self) -> bool {
        self.gravity_step()
    }

    fn gravity_step(&mut self) -> bool {
        if self.active.is_none() {
            return false;
        }
        if !self.try_move(0, 1) {
            self.lock();
        }
        true
    }

    /// Drop to the lowest legal pose and lock
    pub fn hard_drop(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        self.active = Some(drop_position(&self.board, &active));
        self.lock();
        true
    }

    /// Stash the active piece, or swap it with the held one.
    ///
    /// A swapped-in piece goes straight to the spawn pose without a collision check.
    pub fn hold(&mut self) -> bool {
        if !self.can_hold {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        match self.hold.replace(active.kind) {
            Some(held) => self.active = Some(Piece::spawn(held)),
            None => {
                self.spawn();
            }
        }
        self.can_hold = false;
        true
    }

    /// Write the active piece into the board, clear rows, score, then spawn the next piece.
    ///
    /// Returns the number of rows cleared.
    pub fn lock(&mut self) -> u32 {
        let Some(active) = self.active.take() else {
            return 0;
        };

        self.board.stamp(&active.cells(), active.kind);
        let cleared = self.board.clear_full_rows().len() as u32;
        self.last_clear_count = cleared;

        if cleared > 0 {
            let points = line_clear_score(cleared as usize, self.level);
            self.score = self.score.saturating_add(points);
            self.lines += cleared;
            debug!(
                cleared,
                points,
                lines = self.lines,
                "lines cleared"
            );
            self.events.push(GameEvent::LinesCleared { count: cleared });
        }

        self.spawn();
        cleared
    }

    /// One gravity tick plus the mode's per-tick rules
    pub fn tick(&mut self) -> bool {
        if !self.playable() {
            return false;
        }
        self.gravity_step();

        let policy = self.policy();
        if let Some(level) = policy.on_level_recalc(self.lines, self.level) {
            self.level = level;
            self.fall_interval_ms = policy.fall_interval_ms(level);
            info!(
                level,
                interval_ms = self.fall_interval_ms,
                "level up"
            );
            self.events.push(GameEvent::FallIntervalChanged {
                level,
                interval_ms: self.fall_interval_ms,
            });
        }

        if let Some(row) = policy.on_tick(&mut self.board, self.queue.rng_mut()) {
            debug!(hole = row.hole_column, fill = ?row.fill, "garbage row");
            self.events.push(GameEvent::GarbageInjected {
                hole_column: row.hole_column,
                fill: row.fill,
            });
        }
        true
    }

    /// Toggle pause. Ignored after game over.
    pub fn pause_resume(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        if self.paused {
            self.events.push(GameEvent::Paused);
        } else {
            self.events.push(GameEvent::Resumed {
                interval_ms: self.fall_interval_ms,
            });
        }
        true
    }

    /// Start over in the same mode. The RNG carries on, so the piece order differs.
    pub fn restart(&mut self) {
        self.board.clear();
        self.queue.reset();
        self.active = None;
        self.hold = None;
        self.can_hold = true;
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.paused = false;
        self.game_over = false;
        self.last_clear_count = 0;
        self.fall_interval_ms = self.policy().base_fall_interval_ms();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.piece_id = 0;
        self.events.clear();
        self.events.push(GameEvent::Restarted {
            interval_ms: self.fall_interval_ms,
        });
        self.spawn();
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_by(-1),
            GameAction::MoveRight => self.move_by(1),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Hold => self.hold(),
            GameAction::PauseResume => self.pause_resume(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }
}

/// Setup hooks for building mid-game positions
#[cfg(any(test, feature = "test-support"))]
impl<R: RngCore> GameState<R> {
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Overwrite the cleared-line total. The level catches up on the next tick.
    pub fn set_lines(&mut self, lines: u32) {
        self.lines = lines;
    }
}

impl Default for GameState<ChaCha8Rng> {
    fn default() -> Self {
        Self::new(GameMode::Classic, 1)
    }
}
