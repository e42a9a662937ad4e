//! # SignalMonitor: owns the capture primitive and the monitoring thread.
//!
//! The [`SignalMonitor`] is the single coordinator a daemon constructs at
//! startup (explicitly, in `main` - there is no hidden singleton) and drives
//! through a fixed lifecycle:
//!
//! ```text
//! MonitorBuilder::new(cfg).with_observers(...).build()
//!        │  (registers SIGTERM/SIGINT/SIGABRT/SIGQUIT/SIGTSTP/SIGPIPE/SIGHUP)
//!        ▼
//!      Idle ── start(loop_handle) ──► Running ──┬─ terminal signal ─► quit requested ─► Idle
//!        ▲                                      └─ stop()           ──────────────────► Idle
//!        │
//!      Drop ── runs stop() internally (no teardown while the thread lives)
//! ```
//!
//! ## Threads
//! Exactly two threads of interest: the host thread that owns the event loop,
//! and the monitoring thread spawned by [`SignalMonitor::start`]. The capture
//! trampoline additionally runs in async-signal context on whichever thread
//! was interrupted; it only ever stores into the cell. The cell is the sole
//! shared mutable state and is a single indivisible word, so no lock guards
//! it.
//!
//! ## Host contract
//! `start(loop_handle)` before the loop runs; `stop()` after the loop
//! returns; drop at final teardown. `stop()` is safe from the event-loop
//! thread: the monitoring thread and the event-loop thread are distinct, so
//! the join cannot wait on itself.
//!
//! ## Example
//! ```no_run
//! use std::sync::Arc;
//! use sigvisor::{EventLoop, MonitorBuilder, MonitorConfig};
//!
//! struct MyLoop;
//!
//! impl EventLoop for MyLoop {
//!     fn request_quit(&self) {
//!         // make your run loop return
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let monitor = MonitorBuilder::new(MonitorConfig::default()).build();
//!     let run_loop = Arc::new(MyLoop);
//!
//!     monitor.start(run_loop.clone())?;
//!     // ... run_loop blocks here until a terminal signal ...
//!     monitor.stop();
//!     Ok(())
//! }
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};

use crate::core::{MonitorBuilder, MonitorConfig};
use crate::error::MonitorError;
use crate::observers::ObserverSet;
use crate::runloop::EventLoop;
use crate::signal::{SignalCell, SignalKind};

use super::poller::Poller;

/// Coordinates signal capture, the polling thread, and event-loop shutdown.
///
/// Construct via [`MonitorBuilder`]; the process owns the monitor and the
/// monitor holds only a non-owning handle to the event loop it stops.
pub struct SignalMonitor {
    pub(crate) cfg: MonitorConfig,
    pub(crate) cell: SignalCell,
    pub(crate) observers: Arc<ObserverSet>,
    /// Signals whose registration succeeded at construction.
    pub(crate) covered: Vec<SignalKind>,
    /// Registration errors kept for coverage inspection.
    pub(crate) failed: Vec<MonitorError>,
    pub(crate) running: Arc<AtomicBool>,
    /// Join handle of the monitoring thread; also serializes start/stop.
    pub(crate) worker: Mutex<Option<JoinHandle<()>>>,
}

impl SignalMonitor {
    /// Shorthand for [`MonitorBuilder::new`].
    pub fn builder(cfg: MonitorConfig) -> MonitorBuilder {
        MonitorBuilder::new(cfg)
    }

    /// Spawns the monitoring thread polling on behalf of `run_loop`.
    ///
    /// The handle is non-owning: the monitor only ever calls
    /// [`EventLoop::request_quit`] on it, and only from the monitoring thread.
    ///
    /// # Errors
    /// - [`MonitorError::AlreadyRunning`] if a monitoring thread is active;
    ///   `start`/`stop` pairs must not be interleaved.
    /// - [`MonitorError::ThreadSpawn`] if the OS refuses to create the thread;
    ///   the monitor stays in the idle state.
    pub fn start(&self, run_loop: Arc<dyn EventLoop>) -> Result<(), MonitorError> {
        let mut worker = self.lock_worker();

        if self.running.load(Ordering::SeqCst) {
            return Err(MonitorError::AlreadyRunning);
        }
        // A previous loop that exited on a terminal signal leaves its handle
        // behind; it is already finished, so this join is immediate.
        if let Some(stale) = worker.take() {
            let _ = stale.join();
        }

        self.running.store(true, Ordering::SeqCst);
        let poller = Poller {
            cell: self.cell,
            cfg: self.cfg.clone(),
            observers: Arc::clone(&self.observers),
            running: Arc::clone(&self.running),
            run_loop,
        };

        match thread::Builder::new()
            .name("sigvisor-poll".into())
            .spawn(move || poller.run())
        {
            Ok(handle) => {
                *worker = Some(handle);
                Ok(())
            }
            Err(source) => {
                self.running.store(false, Ordering::SeqCst);
                Err(MonitorError::ThreadSpawn { source })
            }
        }
    }

    /// Stops the monitoring thread and blocks until it has exited.
    ///
    /// Cooperative: flips the running flag, wakes the sleeping thread, and
    /// joins it. Idempotent; calling with no thread running is a no-op. A
    /// panicked worker is reported on stderr and otherwise swallowed - there
    /// is nothing recoverable about it at this layer.
    pub fn stop(&self) {
        let mut worker = self.lock_worker();

        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = worker.take() {
            handle.thread().unpark();
            if handle.join().is_err() {
                eprintln!("[sigvisor] monitoring thread panicked");
            }
        }
    }

    /// Whether the monitoring thread is currently running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Handle to the process-wide signal cell.
    pub fn cell(&self) -> SignalCell {
        self.cell
    }

    /// Whether any signal is pending in the cell.
    ///
    /// After a terminal classification the cell is deliberately left set, so
    /// this keeps answering `true` until the host consumes it or exits.
    pub fn pending(&self) -> bool {
        self.cell.pending()
    }

    /// Whether the pending signal is exactly `kind`.
    pub fn is_pending(&self, kind: SignalKind) -> bool {
        self.cell.is_pending(kind)
    }

    /// Clears the cell, returning the raw value that was pending (`0` if none).
    pub fn consume(&self) -> i32 {
        self.cell.consume()
    }

    /// Signals whose handlers were successfully registered at construction.
    pub fn covered(&self) -> &[SignalKind] {
        &self.covered
    }

    /// Registration errors from construction.
    ///
    /// Non-empty means the monitor runs partially covered: the listed signals
    /// kept their default OS action.
    pub fn failed_registrations(&self) -> &[MonitorError] {
        &self.failed
    }

    /// The active configuration.
    pub fn config(&self) -> &MonitorConfig {
        &self.cfg
    }

    fn lock_worker(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        // Poison can only arise from a panic inside start/stop themselves;
        // the state (a join handle) stays valid either way.
        self.worker.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for SignalMonitor {
    /// Teardown implies `stop()`: the monitor cannot be destroyed while its
    /// thread is still running.
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::DispositionPolicy;
    use crate::signal::cell::lock_cell_for_test;
    use nix::sys::signal::raise;
    use std::sync::atomic::AtomicUsize;
    use std::time::{Duration, Instant};

    /// Minimal event loop: counts quit requests.
    struct FlagLoop {
        quits: AtomicUsize,
    }

    impl FlagLoop {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                quits: AtomicUsize::new(0),
            })
        }

        fn quit_requested(&self) -> bool {
            self.quits.load(Ordering::SeqCst) > 0
        }
    }

    impl EventLoop for FlagLoop {
        fn request_quit(&self) {
            self.quits.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn fast_config() -> MonitorConfig {
        MonitorConfig {
            poll_interval: Duration::from_millis(5),
            ..MonitorConfig::default()
        }
    }

    fn wait_until(deadline: Duration, cond: impl Fn() -> bool) -> bool {
        let start = Instant::now();
        while start.elapsed() < deadline {
            if cond() {
                return true;
            }
            thread::sleep(Duration::from_millis(2));
        }
        cond()
    }

    #[test]
    fn test_start_then_stop_without_signal() {
        let _guard = lock_cell_for_test();
        let monitor = MonitorBuilder::new(fast_config()).build();
        monitor.consume();

        let run_loop = FlagLoop::new();
        monitor.start(run_loop.clone()).expect("start");
        assert!(monitor.is_running());

        thread::sleep(Duration::from_millis(25));
        monitor.stop();

        assert!(!monitor.is_running());
        assert!(!run_loop.quit_requested());
        assert!(!monitor.pending());
    }

    #[test]
    fn test_terminal_signal_requests_quit_within_interval() {
        let _guard = lock_cell_for_test();
        let monitor = MonitorBuilder::new(fast_config()).build();
        monitor.consume();
        assert!(monitor.failed_registrations().is_empty());

        let run_loop = FlagLoop::new();
        monitor.start(run_loop.clone()).expect("start");

        raise(SignalKind::Terminate.as_signal()).expect("raise(SIGTERM)");
        assert!(wait_until(Duration::from_secs(2), || run_loop.quit_requested()));

        // Terminal classification leaves the cell in place.
        assert!(monitor.pending());
        assert!(monitor.is_pending(SignalKind::Terminate));

        monitor.stop();
        assert!(!monitor.is_running());
        monitor.consume();
    }

    #[test]
    fn test_signal_before_start_is_observed_on_first_tick() {
        let _guard = lock_cell_for_test();
        let monitor = MonitorBuilder::new(fast_config()).build();
        monitor.consume();

        // Registration happened at build time, so this delivery lands in the
        // cell before any thread polls it.
        raise(SignalKind::Interrupt.as_signal()).expect("raise(SIGINT)");
        assert!(monitor.is_pending(SignalKind::Interrupt));

        let run_loop = FlagLoop::new();
        monitor.start(run_loop.clone()).expect("start");
        assert!(wait_until(Duration::from_secs(2), || run_loop.quit_requested()));

        monitor.stop();
        monitor.consume();
    }

    #[test]
    fn test_start_twice_is_rejected() {
        let _guard = lock_cell_for_test();
        let monitor = MonitorBuilder::new(fast_config()).build();
        monitor.consume();

        let run_loop = FlagLoop::new();
        monitor.start(run_loop.clone()).expect("start");

        let err = monitor.start(run_loop.clone()).expect_err("second start");
        assert!(matches!(err, MonitorError::AlreadyRunning));

        monitor.stop();
        assert!(!run_loop.quit_requested());
    }

    #[test]
    fn test_resume_disposition_keeps_polling() {
        let _guard = lock_cell_for_test();
        let cfg = MonitorConfig {
            poll_interval: Duration::from_millis(5),
            dispositions: DispositionPolicy::new().resume_on([SignalKind::BrokenPipe]),
        };
        let monitor = MonitorBuilder::new(cfg).build();
        monitor.consume();

        let run_loop = FlagLoop::new();
        monitor.start(run_loop.clone()).expect("start");

        raise(SignalKind::BrokenPipe.as_signal()).expect("raise(SIGPIPE)");
        // Resume path consumes the cell and keeps the loop alive.
        assert!(wait_until(Duration::from_secs(2), || !monitor.pending()));
        assert!(monitor.is_running());
        assert!(!run_loop.quit_requested());

        raise(SignalKind::Terminate.as_signal()).expect("raise(SIGTERM)");
        assert!(wait_until(Duration::from_secs(2), || run_loop.quit_requested()));

        monitor.stop();
        monitor.consume();
    }

    #[test]
    fn test_restart_after_terminal_exit() {
        let _guard = lock_cell_for_test();
        let monitor = MonitorBuilder::new(fast_config()).build();
        monitor.consume();

        let first = FlagLoop::new();
        monitor.start(first.clone()).expect("start");
        raise(SignalKind::Hangup.as_signal()).expect("raise(SIGHUP)");
        assert!(wait_until(Duration::from_secs(2), || first.quit_requested()));
        assert!(wait_until(Duration::from_secs(2), || !monitor.is_running()));
        monitor.consume();

        // The loop exited on its own; the monitor is idle and restartable.
        let second = FlagLoop::new();
        monitor.start(second.clone()).expect("restart");
        assert!(monitor.is_running());
        monitor.stop();
        assert!(!second.quit_requested());
    }
}
