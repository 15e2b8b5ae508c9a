//! Tick schedule - when the driver should deliver the next tick
//!
//! Pure bookkeeping with no timers of its own. The driver feeds it every engine event and
//! resets its real timer whenever [`TickSchedule::apply`] reports [`ScheduleChange::Armed`],
//! so a timer started at an old interval never keeps running.

use std::time::Duration;

use tetrissy_core::{GameEvent, GameState, GameStatus};

/// What the driver has to do with its timer after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleChange {
    Unchanged,
    /// Start a fresh countdown at this interval
    Armed(Duration),
    /// Stop ticking
    Disarmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSchedule {
    armed: bool,
    interval: Duration,
}

fn millis(ms: u32) -> Duration {
    Duration::from_millis(ms as u64)
}

impl TickSchedule {
    /// Armed at `interval_ms`
    pub fn new(interval_ms: u32) -> Self {
        Self {
            armed: true,
            interval: millis(interval_ms),
        }
    }

    /// Armed only if the game is currently running
    pub fn for_state<R: rand::RngCore>(state: &GameState<R>) -> Self {
        Self {
            armed: state.status() == GameStatus::Running,
            interval: state.fall_interval(),
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn arm(&mut self, interval: Duration) -> ScheduleChange {
        self.armed = true;
        self.interval = interval;
        ScheduleChange::Armed(interval)
    }

    pub fn disarm(&mut self) -> ScheduleChange {
        if !self.armed {
            return ScheduleChange::Unchanged;
        }
        self.armed = false;
        ScheduleChange::Disarmed
    }

    pub fn apply(&mut self, event: &GameEvent) -> ScheduleChange {
        match *event {
            GameEvent::Paused | GameEvent::GameOver => self.disarm(),
            GameEvent::Resumed { interval_ms } | GameEvent::Restarted { interval_ms } => {
                self.arm(millis(interval_ms))
            }
            GameEvent::FallIntervalChanged { interval_ms, .. } => {
                if self.armed {
                    self.arm(millis(interval_ms))
                } else {
                    // Picked up again by the next Resumed.
                    self.interval = millis(interval_ms);
                    ScheduleChange::Unchanged
                }
            }
            GameEvent::LinesCleared { .. }
            | GameEvent::GarbageInjected { .. }
            | GameEvent::BoardScrolled => ScheduleChange::Unchanged,
        }
    }
}
