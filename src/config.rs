//! System configuration parameters
//!
//! All tunable parameters for the EnergyMeter end-device.
//! Values can be overridden via NVS (non-volatile storage) or a JSON
//! document supplied at provisioning time.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// LoRaWAN network provider and channel plan the session stack is set up for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkProfile {
    /// ChirpStack, AU915 sub-band 2 (channels 8–15 + 65).
    ChirpstackAu915,
    /// ChirpStack, AU915 sub-band 1 (channels 0–7 + 64).
    ChirpstackAu915La,
    /// Everynet, AU915 sub-band 1 (channels 0–7).
    EverynetAu915La,
    /// The Things Network, AU915 sub-band 2 (channels 8–15 + 65).
    TheThingsNetworkAu915,
}

/// How the radio stack obtains its session keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationMode {
    /// Over-the-air activation (join procedure).
    Otaa,
    /// Activation by personalization (hardcoded session).
    Abp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub profile: NetworkProfile,
    pub activation: ActivationMode,
}

/// Uplink parameters used for command-triggered uplinks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UplinkConfig {
    /// Application port (FPort) for uplinks.
    pub port: u8,
    /// Request a network acknowledgement.
    pub confirmed: bool,
}

/// Downlink handling policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownlinkConfig {
    /// Transmit interval at power-on (seconds).
    pub default_tx_interval_secs: u32,
    /// Lower bound applied to interval change requests (seconds).
    pub min_tx_interval_secs: u32,
    /// When set, framed commands are only accepted on this FPort.
    pub framed_port: Option<u8>,
}

/// Reboot command handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RebootConfig {
    /// Value the session stack re-seeds `up_count` to after a restart.
    /// A reboot is only honoured once `up_count` exceeds it.
    pub post_restart_up_count: u32,
    /// Coarse settle delay before reset (milliseconds).
    pub settle_delay_ms: u32,
    /// Fine settle delay before reset (microseconds).
    pub settle_fine_delay_us: u32,
}

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    pub network: NetworkConfig,
    pub uplink: UplinkConfig,
    pub downlink: DownlinkConfig,
    pub reboot: RebootConfig,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            network: NetworkConfig {
                profile: NetworkProfile::ChirpstackAu915,
                activation: ActivationMode::Otaa,
            },
            uplink: UplinkConfig {
                port: 101,
                confirmed: false,
            },
            downlink: DownlinkConfig {
                default_tx_interval_secs: 15,
                min_tx_interval_secs: 1,
                framed_port: None,
            },
            reboot: RebootConfig {
                post_restart_up_count: 2,
                settle_delay_ms: 10_000,
                settle_fine_delay_us: 16_383,
            },
        }
    }
}

impl SystemConfig {
    /// Parse a provisioning document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|_| Error::Config("invalid JSON config"))
    }

    /// Serialise for export over a provisioning channel.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|_| Error::Config("config not serialisable"))
    }

    /// Total delay between accepting a reboot and resetting.
    pub fn reboot_settle(&self) -> core::time::Duration {
        core::time::Duration::from_millis(u64::from(self.reboot.settle_delay_ms))
            + core::time::Duration::from_micros(u64::from(self.reboot.settle_fine_delay_us))
    }
}
