//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the business rules for the downlink channel:
//! command dispatch, device state and the effects handed back to the host.
//! All interaction with hardware happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable without real peripherals.

pub mod commands;
pub mod effects;
pub mod events;
pub mod ports;
pub mod service;
pub mod state;
