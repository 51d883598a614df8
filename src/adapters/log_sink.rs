//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade (UART / USB-CDC through the ESP-IDF logger in
//! production, whatever logger the host installs otherwise).

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::DownlinkReceived { port, len } => {
                info!("DOWNLINK | received {} byte(s) on port {}", len, port);
            }
            AppEvent::CommandApplied(cmd) => {
                info!("DOWNLINK | applied {:?}", cmd);
            }
            AppEvent::DownlinkRejected(e) => {
                warn!("DOWNLINK | rejected: {}", e);
            }
            AppEvent::OutputChanged(enabled) => {
                info!("STATE | output={}", if *enabled { "HIGH" } else { "LOW" });
            }
            AppEvent::IntervalChanged { from_secs, to_secs } => {
                info!("STATE | tx_interval {}s -> {}s", from_secs, to_secs);
            }
            AppEvent::RebootScheduled { up_count } => {
                warn!("REBOOT | scheduled (up_count={})", up_count);
            }
            AppEvent::Started { tx_interval_secs } => {
                info!("START | tx_interval={}s", tx_interval_secs);
            }
        }
    }
}
