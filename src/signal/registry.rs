//! Handler registration through `sigaction`.
//!
//! Registration always goes through the signal-action mechanism, never the
//! older `signal()` API: `sigaction` has reliable semantics and lets the
//! blocked-signal mask and flags be stated explicitly (both empty here).

use nix::sys::signal::{self, SaFlags, SigAction, SigHandler, SigSet};

use crate::error::MonitorError;
use crate::signal::{cell, SignalKind};

/// Installs the capture trampoline for `kind`.
///
/// On success, subsequent deliveries of `kind` to this process invoke the
/// trampoline instead of the default action. Failures carry the OS `Errno`
/// and leave previously installed handlers in place.
pub(crate) fn register(kind: SignalKind) -> Result<(), MonitorError> {
    let action = SigAction::new(
        SigHandler::Handler(cell::trampoline),
        SaFlags::empty(),
        SigSet::empty(),
    );

    // SAFETY: the installed handler performs a single atomic store and is
    // async-signal-safe; no signal-unsafe state is reachable from it.
    unsafe { signal::sigaction(kind.as_signal(), &action) }
        .map(|_previous| ())
        .map_err(|errno| MonitorError::Registration {
            signal: kind,
            source: errno,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::cell::lock_cell_for_test;
    use crate::signal::SignalCell;

    #[test]
    fn test_registered_signal_lands_in_cell() {
        let _guard = lock_cell_for_test();
        let cell = SignalCell::new();
        cell.consume();

        register(SignalKind::Hangup).expect("sigaction(SIGHUP)");
        signal::raise(SignalKind::Hangup.as_signal()).expect("raise(SIGHUP)");

        // raise() delivers synchronously to the calling thread.
        assert_eq!(cell.consume(), SignalKind::Hangup.as_raw());
    }

    #[test]
    fn test_ignored_unregistered_signal_never_writes_cell() {
        let _guard = lock_cell_for_test();
        let cell = SignalCell::new();
        cell.consume();

        // Hold SIGUSR1 at SIG_IGN (its default action would terminate the
        // process); an unregistered signal must not touch the cell.
        let ignore = SigAction::new(SigHandler::SigIgn, SaFlags::empty(), SigSet::empty());
        unsafe { signal::sigaction(signal::Signal::SIGUSR1, &ignore) }.expect("sigaction");

        signal::raise(signal::Signal::SIGUSR1).expect("raise(SIGUSR1)");
        assert_eq!(cell.peek(), 0);
    }
}
