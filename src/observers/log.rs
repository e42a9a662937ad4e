//! # Simple logging observer for debugging and demos.
//!
//! [`LogWriter`] prints events to stdout in a human-readable format.
//! This is primarily useful for development, debugging, and examples.
//!
//! ## Output format
//! ```text
//! [registration-failed] signal=SIGTERM reason="EPERM: Operation not permitted"
//! [monitor-started]
//! [signal-caught] signo=15 signal=SIGTERM
//! [quit-requested] signal=SIGTERM
//! [resumed] signal=SIGPIPE
//! [monitor-stopped]
//! ```

use crate::events::{Event, EventKind};
use crate::observers::Observe;

/// Simple stdout logging observer.
///
/// Enabled via the `logging` feature. Prints human-readable event descriptions
/// to stdout for debugging and demonstration purposes.
///
/// Not intended for production use - implement a custom [`Observe`] for
/// structured logging or metrics collection.
#[derive(Default)]
pub struct LogWriter;

impl Observe for LogWriter {
    fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::RegistrationFailed => {
                if let Some(signal) = e.signal {
                    println!(
                        "[registration-failed] signal={signal} reason={:?}",
                        e.reason.as_deref().unwrap_or("unknown")
                    );
                }
            }
            EventKind::MonitorStarted => {
                println!("[monitor-started]");
            }
            EventKind::SignalCaught => {
                let signo = e.signo.unwrap_or(0);
                match e.signal {
                    Some(signal) => println!("[signal-caught] signo={signo} signal={signal}"),
                    None => println!("[signal-caught] signo={signo}"),
                }
            }
            EventKind::QuitRequested => match e.signal {
                Some(signal) => println!("[quit-requested] signal={signal}"),
                None => println!("[quit-requested] signo={}", e.signo.unwrap_or(0)),
            },
            EventKind::MonitoringResumed => {
                if let Some(signal) = e.signal {
                    println!("[resumed] signal={signal}");
                }
            }
            EventKind::MonitorStopped => {
                println!("[monitor-stopped]");
            }
        }
    }

    fn name(&self) -> &'static str {
        "log-writer"
    }
}
