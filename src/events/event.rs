//! # Monitor events emitted during registration and polling.
//!
//! The [`EventKind`] enum classifies event types across three categories:
//! - **Registration events**: outcome of the construction-time sigaction sweep
//! - **Lifecycle events**: monitoring thread start/stop
//! - **Signal events**: observed signals and their classification outcome
//!
//! The [`Event`] struct carries additional metadata such as timestamps, the
//! raw signal number, the classified signal, and human-readable reasons.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically. Events are delivered synchronously on the emitting thread,
//! so per-observer order already matches `seq` order; the number exists for
//! correlating lines across sinks.
//!
//! ## Example
//! ```rust
//! use sigvisor::{Event, EventKind, SignalKind};
//!
//! let ev = Event::new(EventKind::QuitRequested).with_signal(SignalKind::Terminate);
//!
//! assert_eq!(ev.kind, EventKind::QuitRequested);
//! assert_eq!(ev.signal, Some(SignalKind::Terminate));
//! assert_eq!(ev.signo, Some(SignalKind::Terminate.as_raw()));
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::SystemTime;

use crate::signal::SignalKind;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of monitor events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Registration events ===
    /// A signal in the fixed set could not be registered; the monitor runs
    /// partially covered and that signal keeps its default OS action.
    ///
    /// Sets:
    /// - `signal`: the signal that failed to register
    /// - `reason`: OS error text
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    RegistrationFailed,

    // === Lifecycle events ===
    /// The monitoring thread started polling.
    ///
    /// Sets:
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    MonitorStarted,

    /// The monitoring thread exited its loop (terminal signal or `stop()`).
    ///
    /// Sets:
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    MonitorStopped,

    // === Signal events ===
    /// A pending signal was observed in the cell.
    ///
    /// Sets:
    /// - `signo`: raw signal number as read from the cell
    /// - `signal`: classified signal, when the number maps to the monitored set
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    SignalCaught,

    /// The observed signal was terminal; the event loop was asked to quit.
    ///
    /// Sets:
    /// - `signal`/`signo`: the terminal signal, when classifiable
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    QuitRequested,

    /// The observed signal was non-terminal; the cell was cleared and polling
    /// continues.
    ///
    /// Sets:
    /// - `signal`/`signo`: the resumed-after signal
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    MonitoringResumed,
}

/// Monitor event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,

    /// Raw signal number, when the event concerns a cell observation.
    pub signo: Option<i32>,
    /// Classified signal, when the raw number maps to the monitored set.
    pub signal: Option<SignalKind>,
    /// Human-readable reason (registration errors, etc.).
    pub reason: Option<Arc<str>>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next
    /// sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            signo: None,
            signal: None,
            reason: None,
        }
    }

    /// Attaches a classified signal (and its raw number).
    #[inline]
    pub fn with_signal(mut self, signal: SignalKind) -> Self {
        self.signo = Some(signal.as_raw());
        self.signal = Some(signal);
        self
    }

    /// Attaches a raw signal number, classifying it when possible.
    #[inline]
    pub fn with_signo(mut self, signo: i32) -> Self {
        self.signo = Some(signo);
        self.signal = SignalKind::from_raw(signo);
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_is_monotonic() {
        let a = Event::new(EventKind::MonitorStarted);
        let b = Event::new(EventKind::MonitorStopped);
        assert!(b.seq > a.seq);
    }

    #[test]
    fn test_with_signo_classifies_known_signals() {
        let ev = Event::new(EventKind::SignalCaught).with_signo(SignalKind::Quit.as_raw());
        assert_eq!(ev.signal, Some(SignalKind::Quit));
        assert_eq!(ev.signo, Some(SignalKind::Quit.as_raw()));
    }

    #[test]
    fn test_with_signo_keeps_unknown_raw_value() {
        let ev = Event::new(EventKind::SignalCaught).with_signo(64);
        assert_eq!(ev.signal, None);
        assert_eq!(ev.signo, Some(64));
    }
}
