//! Error types used by the signal monitor.
//!
//! This module defines [`MonitorError`] - status results for registration and
//! lifecycle operations. The type provides helper methods (`as_label`,
//! `as_message`) for logging/metrics.
//!
//! There is no recovery logic here: a registration failure for one signal does
//! not abort the remaining registrations (the monitor runs partially covered,
//! see [`SignalMonitor::failed_registrations`](crate::SignalMonitor::failed_registrations)),
//! and lifecycle errors are reported to the caller as-is.

use std::io;

use nix::errno::Errno;
use thiserror::Error;

use crate::signal::SignalKind;

/// # Errors produced by the signal monitor.
///
/// These represent failures of the capture/monitor machinery itself, such as
/// the OS rejecting a handler registration or refusing to spawn the
/// monitoring thread.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum MonitorError {
    /// `sigaction` failed for one signal of the fixed set.
    ///
    /// The monitor keeps the registrations that succeeded; this signal falls
    /// through to its default OS action (degraded coverage, not a crash).
    #[error("failed to register handler for {signal}: {source}")]
    Registration {
        /// The signal that could not be registered.
        signal: SignalKind,
        /// OS error returned by `sigaction`.
        #[source]
        source: Errno,
    },

    /// The monitoring thread could not be spawned.
    #[error("failed to spawn monitoring thread: {source}")]
    ThreadSpawn {
        /// OS error returned by `std::thread::Builder::spawn`.
        #[source]
        source: io::Error,
    },

    /// `start` was called while a monitoring thread is already running.
    ///
    /// Replaces the undefined two-competing-threads behavior with a checked
    /// error; call [`stop`](crate::SignalMonitor::stop) first.
    #[error("monitor is already running")]
    AlreadyRunning,
}

impl MonitorError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use sigvisor::MonitorError;
    ///
    /// let err = MonitorError::AlreadyRunning;
    /// assert_eq!(err.as_label(), "monitor_already_running");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            MonitorError::Registration { .. } => "signal_registration_failed",
            MonitorError::ThreadSpawn { .. } => "monitor_thread_spawn_failed",
            MonitorError::AlreadyRunning => "monitor_already_running",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            MonitorError::Registration { signal, source } => {
                format!("registration failed for {signal}: {source}")
            }
            MonitorError::ThreadSpawn { source } => {
                format!("monitoring thread spawn failed: {source}")
            }
            MonitorError::AlreadyRunning => "monitor is already running".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_stable() {
        let reg = MonitorError::Registration {
            signal: SignalKind::Terminate,
            source: Errno::EINVAL,
        };
        assert_eq!(reg.as_label(), "signal_registration_failed");
        assert_eq!(MonitorError::AlreadyRunning.as_label(), "monitor_already_running");
    }

    #[test]
    fn test_registration_message_names_the_signal() {
        let err = MonitorError::Registration {
            signal: SignalKind::Hangup,
            source: Errno::EPERM,
        };
        assert!(err.as_message().contains("SIGHUP"));
        assert!(err.to_string().contains("SIGHUP"));
    }
}
