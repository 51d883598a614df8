//! Unified error types for the EnergyMeter firmware.
//!
//! A single `Error` enum that every subsystem converts into, so the host's
//! downlink loop handles failures uniformly. All variants are `Copy` so they
//! can be carried in events and statistics without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A downlink was rejected by the decoder or the dispatcher.
    Downlink(DownlinkError),
    /// A received payload exceeds the maximum LoRaWAN application payload.
    FrameTooLong { len: usize },
    /// Configuration is invalid or could not be parsed.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Downlink(e) => write!(f, "downlink: {e}"),
            Self::FrameTooLong { len } => write!(f, "frame too long: {len} bytes"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Downlink errors
// ---------------------------------------------------------------------------

/// Reasons a downlink produced no effect.
///
/// None of these are fatal. The service logs them, counts them and carries
/// on; the network server is expected to resend anything that mattered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownlinkError {
    /// Length matches neither the 1-byte nor the 5-byte shape, or a 5-byte
    /// frame with a bad header/tail sentinel.
    MalformedFrame { len: usize },
    /// Valid 5-byte envelope carrying an unknown sub-command.
    UnknownSubcommand(u8),
    /// 1-byte frame whose value is not a known command.
    UnrecognizedValue(u8),
    /// Reboot requested before the session proved it had restarted.
    RebootSuppressed { up_count: u32 },
    /// Framed command received outside the configured command port.
    WrongPort { port: u8 },
}

impl fmt::Display for DownlinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedFrame { len } => write!(f, "malformed frame ({len} bytes)"),
            Self::UnknownSubcommand(cmd) => write!(f, "unknown sub-command 0x{cmd:02X}"),
            Self::UnrecognizedValue(v) => write!(f, "unrecognized value {v}"),
            Self::RebootSuppressed { up_count } => {
                write!(f, "reboot suppressed (up_count={up_count})")
            }
            Self::WrongPort { port } => write!(f, "framed command on wrong port {port}"),
        }
    }
}

impl From<DownlinkError> for Error {
    fn from(e: DownlinkError) -> Self {
        Self::Downlink(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
