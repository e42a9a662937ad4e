//! The event-loop collaborator seam.
//!
//! ## Contents
//! - [`EventLoop`] the opaque "request quit" handle the monitor drives
//! - `tokio` feature: impl for `tokio_util::sync::CancellationToken`

mod handle;
#[cfg(feature = "tokio")]
mod tokio;

pub use handle::EventLoop;
