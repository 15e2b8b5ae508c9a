//! Session driver for the engine in `tetrissy-core`
//!
//! The core crate is timer-free; this crate supplies time. A [`Session`] owns one
//! `GameState` on a tokio task, delivers gravity ticks at the engine's current fall
//! interval and applies commands in arrival order. Snapshots are published on a watch
//! channel after every input.
//!
//! - [`schedule`]: reacts to engine events (pause, resume, game over, level up) by arming,
//!   re-arming or stopping the tick timer
//! - [`driver`]: the select loop and [`Session`] handle
//! - [`feedback`]: line-clear notifications for haptics/audio collaborators
//! - [`autoplay`]: a random-input player for headless runs
//! - [`config`]: [`DriverConfig`] with environment overrides
//!
//! # Example
//!
//! ```
//! use tetrissy_core::GameState;
//! use tetrissy_engine::{NoFeedback, Session};
//! use tetrissy_types::{GameAction, GameMode};
//!
//! # tokio_test::block_on(async {
//! let session = Session::spawn(GameState::new(GameMode::Classic, 1), NoFeedback);
//! session.commands.send(GameAction::HardDrop).await.unwrap();
//! let last = session.finish().await.unwrap();
//! assert_eq!(last.filled_cells(), 4);
//! # });
//! ```

pub mod autoplay;
pub mod config;
pub mod driver;
pub mod feedback;
pub mod schedule;

pub use autoplay::{random_action, Autoplay, StopReason};
pub use config::DriverConfig;
pub use driver::{accepts_command, route_event, run_session, Session};
pub use feedback::{Feedback, FeedbackIntensity, LogFeedback, NoFeedback};
pub use schedule::{ScheduleChange, TickSchedule};
