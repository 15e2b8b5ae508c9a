//! Session driver
//!
//! Owns a [`GameState`] on a tokio task and serializes every input into it: gravity ticks
//! from a resettable timer and commands from an mpsc channel. After each input the queued
//! engine events are routed (tick schedule, feedback) and a fresh snapshot is published on a
//! watch channel.

use std::future::Future;

use rand::RngCore;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::{debug, info};

use tetrissy_core::{GameEvent, GameSnapshot, GameState, GameStatus};
use tetrissy_types::GameAction;

use crate::feedback::Feedback;
use crate::schedule::{ScheduleChange, TickSchedule};

/// Bound of the command channel created by [`Session::spawn`]
pub const COMMAND_CAPACITY: usize = 64;

/// Running session handle
pub struct Session {
    pub commands: mpsc::Sender<GameAction>,
    pub snapshots: watch::Receiver<GameSnapshot>,
    pub task: JoinHandle<GameSnapshot>,
}

impl Session {
    /// Start driving `state` on a new task
    ///
    /// The session runs until every clone of `commands` is dropped; the task then resolves
    /// to the final snapshot.
    pub fn spawn<R, F>(state: GameState<R>, feedback: F) -> Self
    where
        R: RngCore + Send + 'static,
        F: Feedback + 'static,
    {
        let (commands, command_rx) = mpsc::channel(COMMAND_CAPACITY);
        let (snapshot_tx, snapshots) = watch::channel(state.snapshot());
        let task = tokio::spawn(run_session(state, command_rx, snapshot_tx, feedback));
        Self {
            commands,
            snapshots,
            task,
        }
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> GameSnapshot {
        *self.snapshots.borrow()
    }

    /// Close the command channel and wait for the final snapshot
    pub fn finish(self) -> impl Future<Output = Result<GameSnapshot, tokio::task::JoinError>> {
        drop(self.commands);
        self.task
    }
}

/// Whether a command may reach the engine right now
///
/// Restart always gets through. A paused game only takes the resume toggle; a finished
/// sprint or a game over takes nothing else.
pub fn accepts_command<R: RngCore>(state: &GameState<R>, action: GameAction) -> bool {
    match (action, state.status()) {
        (GameAction::Restart, _) | (_, GameStatus::Running) => true,
        (GameAction::PauseResume, GameStatus::Paused) => true,
        _ => false,
    }
}

/// Route one engine event to the schedule and the feedback collaborator
pub fn route_event<F: Feedback + ?Sized>(
    event: &GameEvent,
    schedule: &mut TickSchedule,
    feedback: &mut F,
) -> ScheduleChange {
    match *event {
        GameEvent::LinesCleared { count } => feedback.lines_cleared(count),
        GameEvent::FallIntervalChanged { level, interval_ms } => {
            info!(level, interval_ms, "level up");
        }
        GameEvent::GameOver => info!("game over"),
        _ => debug!(?event, "engine event"),
    }
    schedule.apply(event)
}

/// Drive `state` until the command channel closes, returning the final snapshot
pub async fn run_session<R, F>(
    mut state: GameState<R>,
    mut commands: mpsc::Receiver<GameAction>,
    snapshots: watch::Sender<GameSnapshot>,
    mut feedback: F,
) -> GameSnapshot
where
    R: RngCore + Send,
    F: Feedback,
{
    let mut schedule = TickSchedule::for_state(&state);
    let sleep = time::sleep(schedule.interval());
    tokio::pin!(sleep);

    info!(
        mode = state.mode().as_str(),
        interval_ms = state.fall_interval_ms(),
        "session started"
    );
    snapshots.send_replace(state.snapshot());

    loop {
        tokio::select! {
            _ = &mut sleep, if schedule.is_armed() => {
                state.tick();
                sleep.as_mut().reset(Instant::now() + schedule.interval());
            }
            command = commands.recv() => {
                let Some(action) = command else {
                    break;
                };
                if accepts_command(&state, action) {
                    state.apply_action(action);
                } else {
                    debug!(action = action.as_str(), status = ?state.status(), "command ignored");
                }
            }
        }

        for event in state.take_events() {
            if let ScheduleChange::Armed(interval) =
                route_event(&event, &mut schedule, &mut feedback)
            {
                sleep.as_mut().reset(Instant::now() + interval);
            }
        }

        if state.sprint_finished() && schedule.disarm() == ScheduleChange::Disarmed {
            info!(lines = state.lines(), "sprint completed");
        }

        snapshots.send_replace(state.snapshot());
    }

    let snapshot = state.snapshot();
    info!(
        score = snapshot.score,
        lines = snapshot.lines,
        level = snapshot.level,
        status = ?snapshot.status,
        "session ended"
    );
    snapshot
}
