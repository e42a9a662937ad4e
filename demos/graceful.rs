//! Minimal daemon shape: a blocking run loop shut down by SIGTERM/SIGINT.
//!
//! Run with `cargo run --example graceful`, then press Ctrl-C (or send
//! SIGTERM) and watch the monitor walk the loop down.

use std::sync::{Arc, Condvar, Mutex};

use sigvisor::{EventLoop, LogWriter, MonitorBuilder, MonitorConfig};

/// A condvar-guarded flag standing in for the application's event loop.
struct CondvarLoop {
    quit: Mutex<bool>,
    cv: Condvar,
}

impl CondvarLoop {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            quit: Mutex::new(false),
            cv: Condvar::new(),
        })
    }

    /// Blocks the calling thread until quit is requested.
    fn run(&self) {
        let mut quit = self.quit.lock().expect("loop lock");
        while !*quit {
            quit = self.cv.wait(quit).expect("loop wait");
        }
    }
}

impl EventLoop for CondvarLoop {
    fn request_quit(&self) {
        *self.quit.lock().expect("loop lock") = true;
        self.cv.notify_all();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let monitor = MonitorBuilder::new(MonitorConfig::default())
        .with_observers(vec![Arc::new(LogWriter)])
        .build();

    for err in monitor.failed_registrations() {
        eprintln!("degraded coverage: {}", err.as_message());
    }

    let run_loop = CondvarLoop::new();
    monitor.start(run_loop.clone())?;

    println!("running; pid={} - send SIGTERM or press Ctrl-C", std::process::id());
    run_loop.run();
    println!("run loop returned; shutting down");

    monitor.stop();
    Ok(())
}
