//! Header clock, `[HH:MM:SS]`, refreshed every second.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local, TimeZone};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::host::Host;

pub const TICK: Duration = Duration::from_secs(1);

/// 24-hour wall clock text.
pub fn format<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("[{}]", now.format("%H:%M:%S"))
}

/// Update the host clock now and on every tick until cancelled.
pub async fn run<H: Host>(host: Arc<Mutex<H>>, cancel: CancellationToken) {
    let mut interval = tokio::time::interval(TICK);
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = interval.tick() => {
                let text = format(&Local::now());
                host.lock().await.set_clock(&text);
            }
        }
    }
}
