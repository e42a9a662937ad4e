//! Builder for constructing a [`SignalMonitor`].
//!
//! Construction is where the fixed signal set gets registered, so the builder
//! wires observers **first**: registration failures are emitted as
//! `RegistrationFailed` events and are visible to whatever diagnostics sink
//! the host installed.

use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use crate::core::{MonitorConfig, SignalMonitor};
use crate::events::{Event, EventKind};
use crate::observers::{Observe, ObserverSet};
use crate::signal::{registry, SignalCell, SignalKind};

/// Builder for constructing a SignalMonitor with optional observers.
pub struct MonitorBuilder {
    cfg: MonitorConfig,
    observers: Vec<Arc<dyn Observe>>,
}

impl MonitorBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: MonitorConfig) -> Self {
        Self {
            cfg,
            observers: Vec::new(),
        }
    }

    /// Sets event observers for diagnostics.
    ///
    /// Observers receive monitor events (registration failures, observed
    /// signals, classification outcomes) synchronously on the emitting thread.
    pub fn with_observers(mut self, observers: Vec<Arc<dyn Observe>>) -> Self {
        self.observers = observers;
        self
    }

    /// Builds the monitor and registers the whole fixed signal set.
    ///
    /// Registration failures do **not** abort construction: each failure is
    /// emitted as a `RegistrationFailed` event and recorded on the monitor
    /// ([`SignalMonitor::failed_registrations`]); the affected signal keeps
    /// its default OS action and the monitor runs partially covered.
    pub fn build(self) -> SignalMonitor {
        let observers = Arc::new(ObserverSet::new(self.observers));

        let mut covered = Vec::with_capacity(SignalKind::ALL.len());
        let mut failed = Vec::new();

        for kind in SignalKind::ALL {
            match registry::register(kind) {
                Ok(()) => covered.push(kind),
                Err(err) => {
                    observers.emit(
                        &Event::new(EventKind::RegistrationFailed)
                            .with_signal(kind)
                            .with_reason(err.as_message()),
                    );
                    failed.push(err);
                }
            }
        }

        SignalMonitor {
            cfg: self.cfg,
            cell: SignalCell::new(),
            observers,
            covered,
            failed,
            running: Arc::new(AtomicBool::new(false)),
            worker: Mutex::new(None),
        }
    }
}
