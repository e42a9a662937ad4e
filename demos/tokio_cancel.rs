//! Tokio daemon shape: a CancellationToken as the event-loop handle.
//!
//! Requires `--features tokio`. The monitor's thread cancels the token on a
//! terminal signal; async tasks observe it via `cancelled()`.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use sigvisor::{LogWriter, MonitorBuilder, MonitorConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let monitor = MonitorBuilder::new(MonitorConfig::default())
        .with_observers(vec![Arc::new(LogWriter)])
        .build();

    let token = CancellationToken::new();
    monitor.start(Arc::new(token.clone()))?;

    println!("running; pid={} - send SIGTERM or press Ctrl-C", std::process::id());

    let worker = {
        let token = token.child_token();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = tokio::time::sleep(Duration::from_secs(1)) => println!("tick"),
                }
            }
        })
    };

    token.cancelled().await;
    worker.await?;
    println!("tasks drained; shutting down");

    monitor.stop();
    Ok(())
}
