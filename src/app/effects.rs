//! Outbound effects requested by a downlink.
//!
//! The dispatcher never performs side effects itself. It returns one
//! [`Effect`] per frame and the host applies it through the port traits,
//! so nothing irreversible runs under test.

use crate::config::UplinkConfig;

/// Largest uplink payload this firmware queues.
pub const MAX_UPLINK_PAYLOAD: usize = 51;

/// Fixed reply agreed with the network server for the relay command.
pub const RELAY_UPLINK_PAYLOAD: &[u8] = b"Relay uplink - Ok";

const _: () = assert!(RELAY_UPLINK_PAYLOAD.len() <= MAX_UPLINK_PAYLOAD);

/// A request to the radio stack to transmit at the next opportunity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UplinkRequest {
    pub port: u8,
    pub payload: heapless::Vec<u8, MAX_UPLINK_PAYLOAD>,
    pub confirmed: bool,
}

impl UplinkRequest {
    /// The reply to [`Command::TriggerRelayUplink`](super::commands::Command::TriggerRelayUplink).
    pub fn relay(config: &UplinkConfig) -> Self {
        // Cannot fail, the length is checked at compile time above.
        let payload = heapless::Vec::from_slice(RELAY_UPLINK_PAYLOAD).unwrap_or_default();
        Self {
            port: config.port,
            payload,
            confirmed: config.confirmed,
        }
    }
}

/// The single side effect a downlink asks of the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    SendUplink(UplinkRequest),
    ScheduleReboot,
}
