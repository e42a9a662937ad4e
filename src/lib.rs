//! # sigvisor
//!
//! **Sigvisor** is an async-signal-safe capture and graceful-shutdown
//! coordinator for long-running Unix daemons.
//!
//! It intercepts OS termination/interrupt signals, records the most recent one
//! in state that is safe to touch from an asynchronous signal context, and
//! drives orderly termination of a cooperating event loop from a dedicated
//! monitoring thread - so the daemon terminates cleanly instead of being
//! killed mid-write.
//!
//! ## Architecture
//! ### Overview
//! ```text
//! OS signal ──► trampoline() ──► [ signal cell (AtomicI32) ]
//!   (async-signal context: one atomic store, nothing else)
//!                                        │ peek / consume
//!                                        ▼
//!     monitoring thread ("sigvisor-poll", spawned by start, joined by stop)
//!       every poll_interval:
//!         observe ──► emit SignalCaught{signo} ──► classify (DispositionPolicy)
//!             ├─ Quit   ──► emit QuitRequested ──► EventLoop::request_quit() ──► exit loop
//!             └─ Resume ──► consume cell ──► emit MonitoringResumed ──► keep polling
//!
//!     events ──► ObserverSet (synchronous, panic-isolated fan-out)
//!                   ├─► LogWriter (feature "logging")
//!                   └─► user observers (metrics, audit, ...)
//! ```
//!
//! The split is the point: the trampoline runs in asynchronous-signal context
//! and performs exactly one atomic store, while everything that *reacts* -
//! logging, classification, quitting the loop - happens on the monitoring
//! thread in ordinary context.
//!
//! ### Lifecycle
//! ```text
//! MonitorBuilder::new(cfg).with_observers(...).build()
//!   ├─► sigaction sweep over the fixed set:
//!   │     SIGTERM SIGINT SIGABRT SIGQUIT SIGTSTP SIGPIPE SIGHUP
//!   │     (failures → RegistrationFailed events, partial coverage, no abort)
//!   │
//!   ├─► start(loop_handle)  ─► spawn "sigvisor-poll" thread
//!   │     loop {
//!   │       running? ── no ──► exit (stop() requested)
//!   │       cell.peek() ──► 0 ──► park one interval, continue
//!   │         │ signo
//!   │         ├─► emit SignalCaught{signo}
//!   │         ├─► Disposition::Quit   ─► emit QuitRequested, request_quit(), exit
//!   │         └─► Disposition::Resume ─► cell.consume(), emit MonitoringResumed
//!   │     }
//!   │
//!   ├─► stop()  ─► flag + unpark + join (bounded, prompt)
//!   └─► Drop    ─► stop() internally
//! ```
//!
//! ## Features
//! | Area              | Description                                                        | Key types / traits                     |
//! |-------------------|--------------------------------------------------------------------|----------------------------------------|
//! | **Capture**       | Async-signal-safe cell, trampoline, `sigaction` registration.      | [`SignalCell`], [`SignalKind`]         |
//! | **Monitoring**    | Dedicated polling thread, cooperative stop, restartable lifecycle. | [`SignalMonitor`], [`MonitorBuilder`]  |
//! | **Classification**| Terminal vs resume-and-continue per signal.                        | [`Disposition`], [`DispositionPolicy`] |
//! | **Observability** | Event fan-out with panic isolation; stdout sink for demos.         | [`Observe`], [`ObserverSet`], [`Event`]|
//! | **Host seam**     | Opaque "request quit" handle to the externally owned loop.         | [`EventLoop`]                          |
//! | **Errors**        | Typed status results, degraded-coverage policy.                    | [`MonitorError`]                       |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//! - `tokio`: implements [`EventLoop`] for `tokio_util::sync::CancellationToken`.
//!
//! ## Example
//! ```no_run
//! use std::sync::{Arc, Condvar, Mutex};
//! use sigvisor::{EventLoop, MonitorBuilder, MonitorConfig};
//!
//! /// A minimal blocking run loop: waits until asked to quit.
//! struct CondvarLoop {
//!     quit: Mutex<bool>,
//!     cv: Condvar,
//! }
//!
//! impl CondvarLoop {
//!     fn run(&self) {
//!         let mut quit = self.quit.lock().unwrap();
//!         while !*quit {
//!             quit = self.cv.wait(quit).unwrap();
//!         }
//!     }
//! }
//!
//! impl EventLoop for CondvarLoop {
//!     fn request_quit(&self) {
//!         *self.quit.lock().unwrap() = true;
//!         self.cv.notify_all();
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let monitor = MonitorBuilder::new(MonitorConfig::default()).build();
//!     let run_loop = Arc::new(CondvarLoop {
//!         quit: Mutex::new(false),
//!         cv: Condvar::new(),
//!     });
//!
//!     monitor.start(run_loop.clone())?; // before the loop runs
//!     run_loop.run();                   // blocks until SIGTERM/SIGINT/...
//!     monitor.stop();                   // after the loop returns
//!     Ok(())
//! }
//! ```
//!
//! Unix-only: the capture primitive is built on `sigaction`.

mod core;
mod error;
mod events;
mod observers;
mod policies;
mod runloop;
mod signal;

// ---- Public re-exports ----

pub use crate::core::{MonitorBuilder, MonitorConfig, SignalMonitor};
pub use crate::error::MonitorError;
pub use crate::events::{Event, EventKind};
pub use crate::observers::{Observe, ObserverSet};
pub use crate::policies::{Disposition, DispositionPolicy};
pub use crate::runloop::EventLoop;
pub use crate::signal::{SignalCell, SignalKind};

// Optional: expose a simple built-in logger observer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use crate::observers::LogWriter;
