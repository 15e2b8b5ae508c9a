//! Feedback seam for haptics/audio
//!
//! The driver calls [`Feedback::lines_cleared`] once per lock that cleared rows. What the
//! collaborator does with it (vibrate, play a sound) is outside the engine.

use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FeedbackIntensity {
    Light,
    Medium,
    Heavy,
}

impl FeedbackIntensity {
    /// 1 line is light, 2-3 medium, 4+ heavy; nothing for 0
    pub fn from_clear_count(count: u32) -> Option<Self> {
        match count {
            0 => None,
            1 => Some(FeedbackIntensity::Light),
            2 | 3 => Some(FeedbackIntensity::Medium),
            _ => Some(FeedbackIntensity::Heavy),
        }
    }
}

pub trait Feedback: Send {
    fn lines_cleared(&mut self, count: u32);
}

/// Drops every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFeedback;

impl Feedback for NoFeedback {
    fn lines_cleared(&mut self, _count: u32) {}
}

/// Logs each notification; stands in for a device on headless runs
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFeedback;

impl Feedback for LogFeedback {
    fn lines_cleared(&mut self, count: u32) {
        if let Some(intensity) = FeedbackIntensity::from_clear_count(count) {
            info!(count, ?intensity, "feedback");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_mapping() {
        assert_eq!(FeedbackIntensity::from_clear_count(0), None);
        assert_eq!(
            FeedbackIntensity::from_clear_count(1),
            Some(FeedbackIntensity::Light)
        );
        assert_eq!(
            FeedbackIntensity::from_clear_count(3),
            Some(FeedbackIntensity::Medium)
        );
        assert_eq!(
            FeedbackIntensity::from_clear_count(4),
            Some(FeedbackIntensity::Heavy)
        );
        assert!(FeedbackIntensity::Heavy > FeedbackIntensity::Light);
    }
}
