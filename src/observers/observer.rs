//! # Observe: user-facing event handlers
//!
//! The [`Observe`] trait is the main **extension point** for end users.
//! All monitor [`Event`]s flow through the [`ObserverSet`](super::ObserverSet)
//! and into observers.
//!
//! Implementing your own observer allows you to plug in:
//! - metrics export (Prometheus, OpenTelemetry, …);
//! - custom monitoring or alerting pipelines;
//! - structured logging;
//! - other usage.
//!
//! # High-level architecture:
//! ```text
//! Event flow:
//!   MonitorBuilder / poller thread ── emit(&Event) ──► ObserverSet
//!                                                         └─► Observe::on_event(&Event)
//!
//! User-defined observers:
//!   - implement [`Observe`] trait
//!   - receive every [`Event`] the monitor emits
//!   - run custom logic synchronously on the emitting thread
//!
//! Provided implementations:
//!   - [`LogWriter`] (enabled via `logging` feature) → prints events to stdout
//!
//!   poller ... ──► ObserverSet ──► Observe::on_event(&Event)
//!                                        │
//!              ┌─────────────────────────┼───────────────────────┐
//!              ▼                         ▼                       ▼
//!          LogWriter               MetricsObserver         CustomObserver
//!          (stdout)              (Prometheus, OTEL)        (user logic)
//! ```
//!
//! #### Note:
//! Handlers run on the monitoring thread (ordinary context, never signal
//! context). Keep them fast: a slow handler delays the next poll tick.
//!
//! # Example: custom observer
//! ```no_run
//! use sigvisor::{Event, EventKind, Observe};
//!
//! // Define your own observer
//! struct MetricsObserver;
//!
//! impl Observe for MetricsObserver {
//!     fn on_event(&self, event: &Event) {
//!         match event.kind {
//!             EventKind::SignalCaught => {
//!                 println!("[metrics] signal caught: signo={:?}", event.signo);
//!             }
//!             EventKind::QuitRequested => {
//!                 println!("[metrics] quit requested: signal={:?}", event.signal);
//!             }
//!             _ => { /* ignore others */ }
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "metrics"
//!     }
//! }
//! ```

use crate::events::Event;

/// # Trait for receiving monitor events.
///
/// Observers are called synchronously whenever the monitor emits a new
/// [`Event`]. Typical use cases include:
/// - forwarding to metrics systems;
/// - triggering side effects;
/// - structured logging.
///
/// Panics inside a handler are caught by the [`ObserverSet`](super::ObserverSet)
/// and do not take down the monitoring thread.
pub trait Observe: Send + Sync + 'static {
    /// Called for every emitted [`Event`].
    fn on_event(&self, event: &Event);

    /// Returns the observer name used in panic diagnostics.
    ///
    /// Prefer short, descriptive names (e.g., "metrics", "audit"). The default
    /// uses `type_name::<Self>()`, which can be verbose - override it when
    /// possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
