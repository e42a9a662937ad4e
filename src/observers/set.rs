//! # ObserverSet: synchronous fan-out over multiple observers
//!
//! [`ObserverSet`] distributes each [`Event`](crate::events::Event) to every
//! observer, in registration order, on the emitting thread.
//!
//! ## What it guarantees
//! - Per-emit delivery to all observers, in the order they were registered.
//! - Panics inside observers are caught and reported on stderr (isolation):
//!   one misbehaving observer never takes down the monitoring thread or
//!   starves the others.
//!
//! ## What it does **not** guarantee
//! - Decoupling from the emitter: handlers run inline, so a slow observer
//!   delays the next poll tick. Offload heavy work to your own channel.
//!
//! ## Diagram
//! ```text
//!    emit(&Event)
//!        │                (inline, catch_unwind per observer)
//!        ├──► observer O1.on_event()
//!        ├──► observer O2.on_event()
//!        └──► observer ON.on_event()
//! ```

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use crate::events::Event;

use super::Observe;

/// Composite fan-out with per-observer panic isolation.
pub struct ObserverSet {
    observers: Vec<Arc<dyn Observe>>,
}

impl ObserverSet {
    /// Creates a set from the given observers.
    #[must_use]
    pub fn new(observers: Vec<Arc<dyn Observe>>) -> Self {
        Self { observers }
    }

    /// Fan-out one event to all observers.
    ///
    /// A panicking observer is reported with its name on stderr and skipped;
    /// remaining observers still receive the event.
    pub fn emit(&self, event: &Event) {
        for obs in &self.observers {
            if catch_unwind(AssertUnwindSafe(|| obs.on_event(event))).is_err() {
                eprintln!("[sigvisor] observer '{}' panicked", obs.name());
            }
        }
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counter(AtomicUsize);

    impl Observe for Counter {
        fn on_event(&self, _event: &Event) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }

        fn name(&self) -> &'static str {
            "counter"
        }
    }

    struct Exploder;

    impl Observe for Exploder {
        fn on_event(&self, _event: &Event) {
            panic!("boom");
        }

        fn name(&self) -> &'static str {
            "exploder"
        }
    }

    #[test]
    fn test_emit_reaches_every_observer() {
        let a = Arc::new(Counter(AtomicUsize::new(0)));
        let b = Arc::new(Counter(AtomicUsize::new(0)));
        let set = ObserverSet::new(vec![a.clone() as Arc<dyn Observe>, b.clone()]);

        set.emit(&Event::new(EventKind::MonitorStarted));
        set.emit(&Event::new(EventKind::MonitorStopped));

        assert_eq!(a.0.load(Ordering::SeqCst), 2);
        assert_eq!(b.0.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_panicking_observer_is_isolated() {
        let counter = Arc::new(Counter(AtomicUsize::new(0)));
        let set = ObserverSet::new(vec![Arc::new(Exploder) as Arc<dyn Observe>, counter.clone()]);

        // Must not propagate the panic, and the later observer still runs.
        set.emit(&Event::new(EventKind::MonitorStarted));
        assert_eq!(counter.0.load(Ordering::SeqCst), 1);
    }
}
