//! # Poller: the monitoring-thread loop body.
//!
//! Runs on the dedicated thread spawned by
//! [`SignalMonitor::start`](super::SignalMonitor::start). Each iteration:
//!
//! 1. check the running flag (cooperative `stop()`);
//! 2. peek the cell; if a signal is pending, emit `SignalCaught` with the raw
//!    number and classify it via the configured [`DispositionPolicy`]:
//!    - `Quit` → emit `QuitRequested`, call `EventLoop::request_quit`, exit;
//!    - `Resume` → consume the cell, emit `MonitoringResumed`, keep going;
//! 3. park for one poll interval. `stop()` unparks, so cancellation latency is
//!    not tied to the interval; observation latency is, by design.
//!
//! The first cell check happens **before** the first park: a signal delivered
//! between registration and `start()` is observed on the first tick.
//!
//! On a terminal signal the cell is deliberately left in place - the process
//! is about to leave its run loop, and `pending()` staying observable until
//! teardown mirrors the reference daemon.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crate::core::MonitorConfig;
use crate::events::{Event, EventKind};
use crate::observers::ObserverSet;
use crate::policies::Disposition;
use crate::runloop::EventLoop;
use crate::signal::{SignalCell, SignalKind};

/// State handed to the monitoring thread.
pub(crate) struct Poller {
    pub(crate) cell: SignalCell,
    pub(crate) cfg: MonitorConfig,
    pub(crate) observers: Arc<ObserverSet>,
    pub(crate) running: Arc<AtomicBool>,
    pub(crate) run_loop: Arc<dyn EventLoop>,
}

impl Poller {
    /// The monitoring loop. Consumes the poller; runs until a terminal signal
    /// or `stop()`.
    pub(crate) fn run(self) {
        self.observers.emit(&Event::new(EventKind::MonitorStarted));

        while self.running.load(Ordering::SeqCst) {
            let signo = self.cell.peek();
            if signo != 0 {
                self.observers
                    .emit(&Event::new(EventKind::SignalCaught).with_signo(signo));

                match self.cfg.dispositions.classify(SignalKind::from_raw(signo)) {
                    Disposition::Quit => {
                        self.observers
                            .emit(&Event::new(EventKind::QuitRequested).with_signo(signo));
                        self.run_loop.request_quit();
                        break;
                    }
                    Disposition::Resume => {
                        // A delivery racing this reset is lost; the cell is
                        // last-write-wins, not a queue.
                        let _ = self.cell.consume();
                        self.observers
                            .emit(&Event::new(EventKind::MonitoringResumed).with_signo(signo));
                    }
                }
            }

            thread::park_timeout(self.cfg.poll_interval_clamped());
        }

        self.running.store(false, Ordering::SeqCst);
        self.observers.emit(&Event::new(EventKind::MonitorStopped));
    }
}
