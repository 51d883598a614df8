//! EnergyMeter firmware library.
//!
//! Pure-logic core of a LoRaWAN energy-meter end-device: the downlink
//! command decoder, the reboot guard and the command dispatcher, plus the
//! adapters that connect them to an external radio stack and the board.
//! All ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]`
//! within each module. Building for an ESP-IDF target requires the `espidf`
//! feature, which pulls in the `esp-idf-*` bindings; host builds leave it off.

#![deny(unused_must_use)]

#[cfg(all(target_os = "espidf", not(feature = "espidf")))]
compile_error!("ESP-IDF targets need the `espidf` feature: build with `--features espidf`");

pub mod adapters;
pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod protocol;
pub mod safety;
pub mod scheduler;
