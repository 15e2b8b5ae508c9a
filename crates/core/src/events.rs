//! Outbound engine events
//!
//! The engine queues these while it mutates state; the driver drains them after every
//! command or tick with [`GameState::take_events`](crate::GameState::take_events) and
//! reacts (re-arming the tick timer, notifying feedback, triggering effects).

use serde::{Deserialize, Serialize};

use tetrissy_types::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A lock cleared `count` rows (never emitted for 0)
    LinesCleared { count: u32 },
    /// The level went up and the tick source must be re-armed at `interval_ms`
    FallIntervalChanged { level: u32, interval_ms: u32 },
    /// A garbage row was pushed in from the bottom
    GarbageInjected { hole_column: u8, fill: PieceKind },
    /// The board scrolled up one row to make room for a spawn
    BoardScrolled,
    /// A spawn collided; ticking must stop
    GameOver,
    Paused,
    /// Ticking restarts at `interval_ms`
    Resumed { interval_ms: u32 },
    /// Fresh game in the same mode, ticking at `interval_ms`
    Restarted { interval_ms: u32 },
}

impl GameEvent {
    /// Multi-line clears get the celebratory effect
    pub fn is_celebration(&self) -> bool {
        matches!(self, GameEvent::LinesCleared { count } if *count >= 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celebration_needs_two_lines() {
        assert!(!GameEvent::LinesCleared { count: 1 }.is_celebration());
        assert!(GameEvent::LinesCleared { count: 2 }.is_celebration());
        assert!(GameEvent::LinesCleared { count: 4 }.is_celebration());
        assert!(!GameEvent::BoardScrolled.is_celebration());
    }
}
