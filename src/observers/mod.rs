//! Event observers for the monitor.
//!
//! ## Contents
//! - [`Observe`] the extension-point trait (sync, called on the emitting thread)
//! - [`ObserverSet`] fan-out with per-observer panic isolation
//! - [`LogWriter`] built-in stdout sink (feature `logging`)

#[cfg(feature = "logging")]
mod log;
mod observer;
mod set;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use observer::Observe;
pub use set::ObserverSet;
