//! # The async-signal-safe capture cell.
//!
//! A single process-wide `AtomicI32` transports a signal number from the
//! asynchronous delivery context into ordinary code. The [`trampoline`] is the
//! only writer and performs exactly one atomic store; everything that *reacts*
//! to a signal (logging, classification, quitting the run loop) happens later,
//! on the monitoring thread. Keeping that split is the load-bearing safety
//! property of the crate: the delivery context may have interrupted arbitrary
//! code, including allocator or stdio internals, so the handler must not
//! allocate, lock, or call anything non-reentrant.
//!
//! ## Semantics
//! - `0` means "no signal pending".
//! - The cell is **not** a queue: a second signal delivered before the first is
//!   consumed overwrites it (last-write-wins; the earlier one is lost).
//! - Writers: the trampoline only. Readers/resetters: ordinary code only.
//!
//! ## Handles
//! [`SignalCell`] is a zero-sized handle over the one process-wide cell; every
//! handle aliases the same state, because signal disposition is per-process by
//! nature. The handle exists so the monitor can *own* its view of the cell and
//! tests/hosts can reach it without a global import.

use std::sync::atomic::{AtomicI32, Ordering};

use nix::libc::c_int;

/// Last received signal number; `0` = none pending.
static LAST_SIGNAL: AtomicI32 = AtomicI32::new(0);

/// The handler installed for every registered signal.
///
/// Runs in asynchronous-signal context: one atomic store, nothing else.
pub(crate) extern "C" fn trampoline(signo: c_int) {
    LAST_SIGNAL.store(signo, Ordering::SeqCst);
}

/// Handle to the process-wide signal cell.
///
/// Cheap to copy; all handles observe the same cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignalCell;

impl SignalCell {
    /// Creates a handle to the process-wide cell.
    pub fn new() -> Self {
        SignalCell
    }

    /// Returns the current cell value without side effects.
    ///
    /// `0` means no signal is pending.
    pub fn peek(self) -> i32 {
        LAST_SIGNAL.load(Ordering::SeqCst)
    }

    /// Atomically reads and resets the cell, returning the previous value.
    ///
    /// Idempotent under repeated calls: with no intervening delivery, the
    /// second call returns `0`.
    pub fn consume(self) -> i32 {
        LAST_SIGNAL.swap(0, Ordering::SeqCst)
    }

    /// Whether any signal is pending.
    pub fn pending(self) -> bool {
        self.peek() != 0
    }

    /// Whether the pending signal is exactly `kind`.
    pub fn is_pending(self, kind: crate::signal::SignalKind) -> bool {
        self.peek() == kind.as_raw()
    }
}

#[cfg(test)]
pub(crate) fn lock_cell_for_test() -> std::sync::MutexGuard<'static, ()> {
    // The cell (and the process signal table) is shared by every test in the
    // binary; tests that touch either must hold this lock.
    use std::sync::{Mutex, OnceLock};
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::SignalKind;

    #[test]
    fn test_peek_has_no_side_effects() {
        let _guard = lock_cell_for_test();
        let cell = SignalCell::new();
        cell.consume();

        trampoline(SignalKind::Terminate.as_raw());
        assert_eq!(cell.peek(), SignalKind::Terminate.as_raw());
        assert_eq!(cell.peek(), SignalKind::Terminate.as_raw());

        cell.consume();
    }

    #[test]
    fn test_consume_is_idempotent() {
        let _guard = lock_cell_for_test();
        let cell = SignalCell::new();
        cell.consume();

        trampoline(SignalKind::Hangup.as_raw());
        assert_eq!(cell.consume(), SignalKind::Hangup.as_raw());
        assert_eq!(cell.consume(), 0);
        assert!(!cell.pending());
    }

    #[test]
    fn test_last_write_wins() {
        let _guard = lock_cell_for_test();
        let cell = SignalCell::new();
        cell.consume();

        // Two deliveries before any consume: only the second survives.
        trampoline(SignalKind::Interrupt.as_raw());
        trampoline(SignalKind::Terminate.as_raw());
        assert_eq!(cell.peek(), SignalKind::Terminate.as_raw());
        assert!(!cell.is_pending(SignalKind::Interrupt));
        assert!(cell.is_pending(SignalKind::Terminate));

        cell.consume();
    }
}
