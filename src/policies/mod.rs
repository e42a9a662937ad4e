//! Signal classification policies.
//!
//! This module groups the knobs that control **what a captured signal does**
//! to the monitoring loop.
//!
//! ## Contents
//! - [`Disposition`] reaction to one observed signal (quit / resume)
//! - [`DispositionPolicy`] which signals are terminal vs resume-and-continue
//!
//! ## Quick wiring
//! ```text
//! MonitorConfig { poll_interval, dispositions: DispositionPolicy }
//!      └─► core::poller::Poller uses:
//!           - dispositions.classify(kind) after each observed signal
//!           - Quit   → EventLoop::request_quit(), loop exits
//!           - Resume → SignalCell::consume(), loop continues
//! ```
//!
//! ## Defaults
//! - `DispositionPolicy::default()` → every captured signal quits (reference
//!   daemon behavior); opt into resume handling per signal via `resume_on`.

mod disposition;

pub use disposition::{Disposition, DispositionPolicy};
