//! Inbound commands to the application service.
//!
//! These are the actions the network server can request over the downlink
//! channel. The [`codec`](crate::protocol::codec) produces them and the
//! [`AppService`](super::service::AppService) applies them.

/// Commands decoded from a downlink frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Drive the local output low.
    SetOutputLow,

    /// Drive the local output high.
    SetOutputHigh,

    /// Send the fixed relay payload back as an uplink.
    TriggerRelayUplink,

    /// Change the periodic transmit interval (seconds).
    SetInterval(u16),

    /// Restart the device, subject to the reboot guard.
    Reboot,

    /// Anything the decoder did not recognise.
    Unknown,
}
