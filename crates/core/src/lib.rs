//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains every game rule and all engine state. It has **no dependencies**
//! on rendering, input devices, timers or I/O:
//!
//! - **Deterministic**: the same seed produces the same game
//! - **Driver-agnostic**: an external driver delivers ticks and commands one at a time
//! - **Observable**: state is read through [`GameSnapshot`]; changes the driver must react
//!   to are queued as [`GameEvent`]s
//!
//! # Module Structure
//!
//! - [`pieces`]: rotation tables and the active [`Piece`]
//! - [`board`]: 10x20 grid with row clearing, garbage injection and scrolling
//! - [`collision`]: pose legality
//! - [`rng`]: 7-bag randomizer feeding the next queue
//! - [`scoring`]: line clear rewards and marathon pacing
//! - [`mode`]: per-mode rules behind the [`ModePolicy`] trait
//! - [`game_state`]: the engine state machine
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: every bag deals each of the 7 kinds exactly once
//! - **Kick-free rotation**: a rotation that collides simply fails
//! - **No lock delay**: a piece locks as soon as gravity or a soft drop is blocked
//! - **Hold**: once per spawned piece
//! - **Scoring**: `[0, 100, 300, 500, 800][min(lines, 4)] * level`
//!
//! # Example
//!
//! ```
//! use tetrissy_core::{GameEvent, GameState};
//! use tetrissy_types::{GameAction, GameMode};
//!
//! let mut game = GameState::new(GameMode::Marathon, 12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//! game.tick();
//!
//! assert!(!game.game_over());
//! assert_eq!(game.level(), 1);
//! for event in game.take_events() {
//!     if let GameEvent::FallIntervalChanged { interval_ms, .. } = event {
//!         println!("re-arm tick source at {}ms", interval_ms);
//!     }
//! }
//! ```

pub mod board;
pub mod collision;
pub mod events;
pub mod game_state;
pub mod mode;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tetrissy_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::{collides, drop_position, piece_collides};
pub use events::GameEvent;
pub use game_state::{GameState, GameStatus};
pub use mode::{policy, ModePolicy, SpawnCollision};
pub use pieces::{rotation_state, Piece, PieceShape, SPAWN_ORIGIN};
pub use rng::PieceQueue;
pub use scoring::{line_clear_score, marathon_fall_interval_ms, marathon_level};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
