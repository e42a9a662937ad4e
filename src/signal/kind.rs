//! # Monitored signal vocabulary.
//!
//! [`SignalKind`] names the fixed set of signals the monitor registers and
//! classifies. The set is not configurable: these are the termination-shaped
//! signals a daemon must not be killed abruptly by.
//!
//! Raw `c_int` values cross the async-signal boundary (the cell stores a plain
//! integer); `SignalKind` is the typed view used everywhere else.

use std::fmt;

use nix::sys::signal::Signal;

/// A signal in the fixed monitored set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignalKind {
    /// SIGTERM: polite termination request (systemd, `kill` default).
    Terminate,
    /// SIGINT: interactive interrupt (Ctrl-C).
    Interrupt,
    /// SIGABRT: abnormal termination requested by the process itself.
    Abort,
    /// SIGQUIT: quit from keyboard, conventionally with a core dump.
    Quit,
    /// SIGTSTP: terminal stop request (Ctrl-Z).
    TerminalStop,
    /// SIGPIPE: write to a pipe with no readers.
    BrokenPipe,
    /// SIGHUP: controlling terminal hang-up.
    Hangup,
}

impl SignalKind {
    /// The complete monitored set, in registration order.
    pub const ALL: [SignalKind; 7] = [
        SignalKind::Terminate,
        SignalKind::Interrupt,
        SignalKind::Abort,
        SignalKind::Quit,
        SignalKind::TerminalStop,
        SignalKind::BrokenPipe,
        SignalKind::Hangup,
    ];

    /// Maps a raw signal number back to the monitored set.
    ///
    /// Returns `None` for `0` (no signal) and for any number outside the set,
    /// including valid signals the monitor does not register.
    pub fn from_raw(signo: i32) -> Option<SignalKind> {
        match Signal::try_from(signo).ok()? {
            Signal::SIGTERM => Some(SignalKind::Terminate),
            Signal::SIGINT => Some(SignalKind::Interrupt),
            Signal::SIGABRT => Some(SignalKind::Abort),
            Signal::SIGQUIT => Some(SignalKind::Quit),
            Signal::SIGTSTP => Some(SignalKind::TerminalStop),
            Signal::SIGPIPE => Some(SignalKind::BrokenPipe),
            Signal::SIGHUP => Some(SignalKind::Hangup),
            _ => None,
        }
    }

    /// The `nix` signal used for registration and delivery.
    pub fn as_signal(self) -> Signal {
        match self {
            SignalKind::Terminate => Signal::SIGTERM,
            SignalKind::Interrupt => Signal::SIGINT,
            SignalKind::Abort => Signal::SIGABRT,
            SignalKind::Quit => Signal::SIGQUIT,
            SignalKind::TerminalStop => Signal::SIGTSTP,
            SignalKind::BrokenPipe => Signal::SIGPIPE,
            SignalKind::Hangup => Signal::SIGHUP,
        }
    }

    /// Raw signal number as stored in the cell.
    pub fn as_raw(self) -> i32 {
        self.as_signal() as i32
    }

    /// Conventional name, e.g. `"SIGTERM"`.
    pub fn as_str(self) -> &'static str {
        self.as_signal().as_str()
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_round_trip_for_monitored_set() {
        for kind in SignalKind::ALL {
            assert_eq!(SignalKind::from_raw(kind.as_raw()), Some(kind));
        }
    }

    #[test]
    fn test_from_raw_rejects_zero_and_unmonitored() {
        assert_eq!(SignalKind::from_raw(0), None);
        // SIGUSR1 is a valid signal but outside the monitored set.
        assert_eq!(SignalKind::from_raw(Signal::SIGUSR1 as i32), None);
        assert_eq!(SignalKind::from_raw(-1), None);
        assert_eq!(SignalKind::from_raw(4096), None);
    }

    #[test]
    fn test_display_uses_conventional_names() {
        assert_eq!(SignalKind::Terminate.to_string(), "SIGTERM");
        assert_eq!(SignalKind::BrokenPipe.to_string(), "SIGPIPE");
        assert_eq!(SignalKind::Hangup.to_string(), "SIGHUP");
    }
}
