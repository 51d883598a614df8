//! NVS (Non-Volatile Storage) adapter.
//!
//! Implements [`ConfigPort`] for the EnergyMeter system. The config is a
//! single `postcard` blob under `energymeter::syscfg`.
//!
//! - Config validation: all fields are range-checked before persistence.
//! - On ESP-IDF the blob lives in the default NVS partition; the host
//!   simulation backend keeps it in memory (dev/test only).

use std::cell::RefCell;

use log::info;

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::SystemConfig;

#[cfg(not(target_os = "espidf"))]
use std::collections::HashMap;

#[cfg(target_os = "espidf")]
use esp_idf_svc::nvs::{EspDefaultNvs, EspDefaultNvsPartition};

#[cfg(target_os = "espidf")]
use log::warn;

const CONFIG_NAMESPACE: &str = "energymeter";
const CONFIG_KEY: &str = "syscfg";

#[cfg(target_os = "espidf")]
const MAX_BLOB_SIZE: usize = 256;

pub struct NvsAdapter {
    #[cfg(not(target_os = "espidf"))]
    store: RefCell<HashMap<String, Vec<u8>>>,
    #[cfg(target_os = "espidf")]
    nvs: RefCell<EspDefaultNvs>,
}

impl NvsAdapter {
    /// Open the config namespace.
    #[cfg(target_os = "espidf")]
    pub fn new() -> anyhow::Result<Self> {
        let partition = EspDefaultNvsPartition::take()?;
        let nvs = EspDefaultNvs::new(partition, CONFIG_NAMESPACE, true)?;
        info!("NvsAdapter: ESP-IDF NVS namespace '{}' open", CONFIG_NAMESPACE);
        Ok(Self {
            nvs: RefCell::new(nvs),
        })
    }

    /// Create the in-memory simulation backend.
    #[cfg(not(target_os = "espidf"))]
    pub fn new() -> anyhow::Result<Self> {
        info!("NvsAdapter: simulation backend");
        Ok(Self {
            store: RefCell::new(HashMap::new()),
        })
    }

    #[cfg(not(target_os = "espidf"))]
    fn composite_key(namespace: &str, key: &str) -> String {
        format!("{}::{}", namespace, key)
    }

    /// Overwrite the stored blob without validation (simulates corruption).
    #[cfg(not(target_os = "espidf"))]
    pub fn write_raw(&self, bytes: &[u8]) {
        self.store
            .borrow_mut()
            .insert(Self::composite_key(CONFIG_NAMESPACE, CONFIG_KEY), bytes.to_vec());
    }
}

fn validate_config(cfg: &SystemConfig) -> Result<(), ConfigError> {
    if !(1..=223).contains(&cfg.uplink.port) {
        return Err(ConfigError::ValidationFailed("uplink.port must be 1–223"));
    }
    if cfg.downlink.min_tx_interval_secs == 0 {
        return Err(ConfigError::ValidationFailed(
            "downlink.min_tx_interval_secs must be >= 1",
        ));
    }
    if cfg.downlink.default_tx_interval_secs < cfg.downlink.min_tx_interval_secs {
        return Err(ConfigError::ValidationFailed(
            "downlink.default_tx_interval_secs must be >= min_tx_interval_secs",
        ));
    }
    if cfg.downlink.framed_port == Some(0) {
        return Err(ConfigError::ValidationFailed(
            "downlink.framed_port 0 is reserved for MAC commands",
        ));
    }
    if cfg.reboot.settle_delay_ms > 60_000 {
        return Err(ConfigError::ValidationFailed(
            "reboot.settle_delay_ms must be <= 60000",
        ));
    }
    Ok(())
}

impl ConfigPort for NvsAdapter {
    fn load(&self) -> Result<SystemConfig, ConfigError> {
        #[cfg(not(target_os = "espidf"))]
        {
            let key = Self::composite_key(CONFIG_NAMESPACE, CONFIG_KEY);
            if let Some(bytes) = self.store.borrow().get(&key) {
                let cfg: SystemConfig =
                    postcard::from_bytes(bytes).map_err(|_| ConfigError::Corrupted)?;
                info!("NvsAdapter: loaded config from store");
                Ok(cfg)
            } else {
                info!("NvsAdapter: no stored config, using defaults");
                Ok(SystemConfig::default())
            }
        }

        #[cfg(target_os = "espidf")]
        {
            let mut buf = [0u8; MAX_BLOB_SIZE];
            match self.nvs.borrow().get_raw(CONFIG_KEY, &mut buf) {
                Ok(Some(bytes)) => {
                    let cfg: SystemConfig =
                        postcard::from_bytes(bytes).map_err(|_| ConfigError::Corrupted)?;
                    info!("NvsAdapter: loaded config from NVS ({} bytes)", bytes.len());
                    Ok(cfg)
                }
                Ok(None) => {
                    info!("NvsAdapter: no stored config, using defaults");
                    Ok(SystemConfig::default())
                }
                Err(e) => {
                    warn!("NvsAdapter: NVS read error {}", e);
                    Err(ConfigError::IoError)
                }
            }
        }
    }

    fn save(&self, config: &SystemConfig) -> Result<(), ConfigError> {
        validate_config(config)?;
        let bytes = postcard::to_allocvec(config).map_err(|_| ConfigError::IoError)?;

        #[cfg(not(target_os = "espidf"))]
        {
            self.store
                .borrow_mut()
                .insert(Self::composite_key(CONFIG_NAMESPACE, CONFIG_KEY), bytes);
            info!("NvsAdapter: config saved (simulation)");
            Ok(())
        }

        #[cfg(target_os = "espidf")]
        {
            self.nvs
                .borrow_mut()
                .set_raw(CONFIG_KEY, &bytes)
                .map_err(|e| {
                    warn!("NvsAdapter: NVS write error {}", e);
                    ConfigError::IoError
                })?;
            info!("NvsAdapter: config saved ({} bytes)", bytes.len());
            Ok(())
        }
    }
}
