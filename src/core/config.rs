//! # Monitor configuration.
//!
//! Provides [`MonitorConfig`] centralized settings for the signal monitor.
//!
//! ## Sentinel values
//! - `poll_interval = 0` → clamped to 1ms by [`MonitorConfig::poll_interval_clamped`]
//!   (a zero interval would turn the poll loop into a busy spin)

use std::time::Duration;

use crate::policies::DispositionPolicy;

/// Configuration for the signal monitor.
///
/// Defines:
/// - **Polling cadence**: how often the monitoring thread checks the cell
/// - **Classification**: which captured signals are terminal vs resumable
///
/// ## Field semantics
/// - `poll_interval`: sleep between cell checks; also the upper bound on
///   signal-observation latency and on `stop()` latency
/// - `dispositions`: see [`DispositionPolicy`] (default: every signal quits)
///
/// ## Notes
/// All fields are public for flexibility. Prefer [`MonitorConfig::poll_interval_clamped`]
/// over reading `poll_interval` directly to avoid sprinkling the zero-sentinel
/// check across the codebase.
#[derive(Clone, Debug)]
pub struct MonitorConfig {
    /// Interval between polls of the signal cell.
    ///
    /// The reference cadence is 500ms: coarse enough to stay invisible in
    /// profiles, fine enough that shutdown feels immediate to an operator.
    pub poll_interval: Duration,

    /// Terminal-vs-resume classification for captured signals.
    pub dispositions: DispositionPolicy,
}

impl Default for MonitorConfig {
    /// Returns the reference behavior: 500ms polling, every signal terminal.
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(500),
            dispositions: DispositionPolicy::default(),
        }
    }
}

impl MonitorConfig {
    /// Poll interval with the zero sentinel clamped to 1ms.
    pub fn poll_interval_clamped(&self) -> Duration {
        self.poll_interval.max(Duration::from_millis(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_cadence() {
        let cfg = MonitorConfig::default();
        assert_eq!(cfg.poll_interval, Duration::from_millis(500));
        assert_eq!(cfg.poll_interval_clamped(), Duration::from_millis(500));
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let cfg = MonitorConfig {
            poll_interval: Duration::ZERO,
            ..MonitorConfig::default()
        };
        assert_eq!(cfg.poll_interval_clamped(), Duration::from_millis(1));
    }
}
