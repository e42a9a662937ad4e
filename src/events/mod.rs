//! Monitor events: the diagnostics data model.
//!
//! This module groups the event **data model** emitted by the monitor:
//! registration sweep, lifecycle transitions, observed signals, and
//! classification outcomes.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//!
//! ## Quick reference
//! - **Publishers**: `MonitorBuilder::build()` (registration failures) and the
//!   monitoring thread (`core::poller`).
//! - **Consumers**: [`ObserverSet`](crate::ObserverSet), which fans events out
//!   to user observers synchronously on the emitting thread.
//!
//! See `core/mod.rs` for the system-level wiring diagram.

mod event;

pub use event::{Event, EventKind};
