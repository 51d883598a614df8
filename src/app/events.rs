//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other
//! side decide what to do with them: log to serial, count them, forward
//! them to a debug console, etc.

use crate::error::DownlinkError;

use super::commands::Command;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A downlink arrived (emitted before classification).
    DownlinkReceived { port: u8, len: usize },

    /// A command was decoded and applied.
    CommandApplied(Command),

    /// A downlink produced no effect.
    DownlinkRejected(DownlinkError),

    /// The output level changed.
    OutputChanged(bool),

    /// The transmit interval changed.
    IntervalChanged { from_secs: u32, to_secs: u32 },

    /// A reboot passed the guard and will be performed by the host.
    RebootScheduled { up_count: u32 },

    /// The application service has started (carries the initial interval).
    Started { tx_interval_secs: u32 },
}
