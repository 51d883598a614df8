//! Mutable device state and the session counters read alongside it.

use crate::config::SystemConfig;

/// Configuration the dispatcher mutates and the transmit scheduler and
/// output driver read. Lives until the next reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceState {
    /// Seconds between periodic uplinks.
    pub transmit_interval_secs: u32,
    /// Requested level of the local output (LED / relay).
    pub output_enabled: bool,
}

impl DeviceState {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            transmit_interval_secs: config.downlink.default_tx_interval_secs,
            output_enabled: false,
        }
    }
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::new(&SystemConfig::default())
    }
}

/// Frame counters of the current radio session, owned by the radio stack.
///
/// `up_count` restarts at a small fixed value after a reset (2 for the
/// stack this firmware was built against).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionCounters {
    pub up_count: u32,
    pub down_count: u32,
}

impl SessionCounters {
    pub fn new(up_count: u32, down_count: u32) -> Self {
        Self {
            up_count,
            down_count,
        }
    }
}
