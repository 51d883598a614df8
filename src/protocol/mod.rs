//! Downlink command protocol.
//!
//! Two command shapes share the LoRaWAN downlink channel:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  1-byte command                                              │
//! │  ┌───────┐                                                   │
//! │  │ value │   0 = output low, 1 = output high, 101 = relay    │
//! │  └───────┘                                                   │
//! │                                                              │
//! │  5-byte framed command                                       │
//! │  ┌──────┬─────┬──────────────┬──────┐                        │
//! │  │ 0x55 │ cmd │ data (BE u16)│ 0xFF │                        │
//! │  └──────┴─────┴──────────────┴──────┘                        │
//! │          0x01 = set interval, 0x02 = reboot                  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The radio stack hands each received payload over as a [`Frame`];
//! [`codec`] turns it into a [`Command`](crate::app::commands::Command).

pub mod codec;
pub mod frame;

pub use frame::Frame;
