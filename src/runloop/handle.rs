//! # EventLoop: the externally owned run loop the monitor can stop.
//!
//! The monitor never owns, runs, or destroys the application's event loop; it
//! holds an opaque handle supporting exactly one operation - **request quit** -
//! which must cause the loop's blocking run call to return in its owning
//! thread. Everything else about the loop (what it does, how it runs, when it
//! is dropped) belongs to the host daemon.
//!
//! ## Contract
//! - `request_quit` is called from the monitoring thread, never from signal
//!   context, so ordinary synchronization is fine inside it.
//! - It must not block for long: the monitoring loop exits right after the
//!   call, and `stop()` joins that thread.
//! - It may be called at most once per `start()`; implementations should
//!   tolerate repeats anyway (idempotent quit is the norm: flags, tokens and
//!   channels all have it for free).
//!
//! ## Example
//! ```rust
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use sigvisor::EventLoop;
//!
//! /// Minimal loop handle: a stop flag the run loop checks each iteration.
//! struct FlagLoop(AtomicBool);
//!
//! impl EventLoop for FlagLoop {
//!     fn request_quit(&self) {
//!         self.0.store(true, Ordering::SeqCst);
//!     }
//! }
//! ```

/// Handle to an externally owned event loop.
///
/// Implement this for whatever drives your daemon: a condvar-guarded flag, a
/// channel sender, a `CancellationToken` (see the `tokio` feature), or a
/// foreign run loop's quit function.
pub trait EventLoop: Send + Sync + 'static {
    /// Asks the loop to return from its run call.
    ///
    /// Called from the monitoring thread when a terminal signal is observed.
    fn request_quit(&self);
}

impl<T: EventLoop + ?Sized> EventLoop for std::sync::Arc<T> {
    fn request_quit(&self) {
        (**self).request_quit();
    }
}
