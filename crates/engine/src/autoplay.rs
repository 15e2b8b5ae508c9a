//! Random-input player for headless sessions
//!
//! Sends weighted random gameplay commands on a fixed interval until the game ends, a
//! sprint completes, the time budget runs out or the session stops listening.

use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;
use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

use tetrissy_core::GameSnapshot;
use tetrissy_types::GameAction;

/// Relative weights; pause and restart are never chosen
const ACTION_WEIGHTS: [(GameAction, u32); 6] = [
    (GameAction::MoveLeft, 4),
    (GameAction::MoveRight, 4),
    (GameAction::Rotate, 3),
    (GameAction::SoftDrop, 2),
    (GameAction::HardDrop, 2),
    (GameAction::Hold, 1),
];

/// Why autoplay stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    GameOver,
    SprintCompleted,
    TimeUp,
    SessionClosed,
}

pub fn random_action<R: Rng + ?Sized>(rng: &mut R) -> GameAction {
    ACTION_WEIGHTS
        .choose_weighted(rng, |(_, weight)| *weight)
        .map(|(action, _)| *action)
        .unwrap_or(GameAction::HardDrop)
}

pub struct Autoplay<R> {
    rng: R,
    interval: Duration,
    max_duration: Duration,
}

impl<R: Rng + Send> Autoplay<R> {
    pub fn new(rng: R, interval: Duration, max_duration: Duration) -> Self {
        Self {
            rng,
            interval,
            max_duration,
        }
    }

    /// Play until a stop condition; returns the reason and the number of commands sent
    pub async fn run(
        mut self,
        commands: mpsc::Sender<GameAction>,
        mut snapshots: watch::Receiver<GameSnapshot>,
    ) -> (StopReason, u64) {
        let deadline = time::sleep_until(Instant::now() + self.max_duration);
        tokio::pin!(deadline);
        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut sent = 0u64;

        let reason = loop {
            tokio::select! {
                _ = &mut deadline => break StopReason::TimeUp,
                _ = ticker.tick() => {}
            }

            let snapshot = *snapshots.borrow_and_update();
            if snapshot.game_over {
                break StopReason::GameOver;
            }
            if snapshot.sprint_completed {
                break StopReason::SprintCompleted;
            }

            let action = random_action(&mut self.rng);
            if commands.send(action).await.is_err() {
                break StopReason::SessionClosed;
            }
            sent += 1;
        };

        debug!(?reason, sent, "autoplay stopped");
        (reason, sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::Session;
    use crate::feedback::NoFeedback;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tetrissy_core::GameState;
    use tetrissy_types::GameMode;

    #[test]
    fn test_random_action_skips_meta_actions() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1000 {
            let action = random_action(&mut rng);
            assert_ne!(action, GameAction::PauseResume);
            assert_ne!(action, GameAction::Restart);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_autoplay_runs_until_time_up_or_game_over() {
        let session = Session::spawn(GameState::new(GameMode::Classic, 21), NoFeedback);
        let autoplay = Autoplay::new(
            StdRng::seed_from_u64(21),
            Duration::from_millis(100),
            Duration::from_secs(30),
        );

        let (reason, sent) = autoplay
            .run(session.commands.clone(), session.snapshots.clone())
            .await;
        assert!(sent > 0);
        match reason {
            StopReason::TimeUp => assert!(sent <= 301, "{} commands", sent),
            StopReason::GameOver => assert!(session.snapshot().game_over),
            other => panic!("unexpected stop: {:?}", other),
        }

        session.finish().await.unwrap();
    }

    #[tokio::test]
    async fn test_autoplay_stops_when_session_closes() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let (_snapshot_tx, snapshots) = watch::channel(GameState::default().snapshot());
        let autoplay = Autoplay::new(
            StdRng::seed_from_u64(1),
            Duration::from_millis(1),
            Duration::from_secs(5),
        );
        assert_eq!(autoplay.run(tx, snapshots).await, (StopReason::SessionClosed, 0));
    }
}
