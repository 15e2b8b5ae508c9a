//! Driver configuration

use std::env;

use tetrissy_types::GameMode;

/// Session settings for the headless driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    pub mode: GameMode,
    pub seed: u64,
    /// Pause between autoplay commands
    pub autoplay_interval_ms: u64,
    /// Stop the session after this long even if the game is still going
    pub max_duration_ms: u64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Classic,
            seed: 1,
            autoplay_interval_ms: 120,
            max_duration_ms: 60_000,
        }
    }
}

impl DriverConfig {
    /// Create from environment variables
    ///
    /// `TETRISSY_MODE`, `TETRISSY_SEED`, `TETRISSY_AUTOPLAY_MS`, `TETRISSY_MAX_DURATION_MS`.
    /// Missing or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`DriverConfig::from_env`] with a custom variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let mode = lookup("TETRISSY_MODE")
            .and_then(|s| GameMode::from_str(&s))
            .unwrap_or(defaults.mode);
        let seed = lookup("TETRISSY_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);
        let autoplay_interval_ms = lookup("TETRISSY_AUTOPLAY_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u64| ms > 0)
            .unwrap_or(defaults.autoplay_interval_ms);
        let max_duration_ms = lookup("TETRISSY_MAX_DURATION_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.max_duration_ms);

        Self {
            mode,
            seed,
            autoplay_interval_ms,
            max_duration_ms,
        }
    }
}
