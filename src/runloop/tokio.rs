//! `EventLoop` for tokio daemons (feature `tokio`).
//!
//! A [`CancellationToken`] is the natural quit handle for an async host: tasks
//! select on `token.cancelled()` while the monitor cancels it from its own
//! thread. `CancellationToken::cancel` is sync, idempotent, and thread-safe,
//! which is exactly the contract [`EventLoop`] asks for.

use tokio_util::sync::CancellationToken;

use super::EventLoop;

impl EventLoop for CancellationToken {
    fn request_quit(&self) {
        self.cancel();
    }
}
