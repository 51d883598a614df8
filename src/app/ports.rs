//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Radio stack ──▶ AppService (domain) ──▶ Port trait ──▶ Adapter
//! ```
//!
//! Driven adapters (uplink queue, output pin, reset, event sinks, storage)
//! implement these traits. The [`AppService`](super::service::AppService)
//! consumes them via generics, so the domain core never touches hardware
//! or the radio directly.

use core::time::Duration;

use crate::config::SystemConfig;

use super::effects::UplinkRequest;

// ───────────────────────────────────────────────────────────────
// Uplink port (driven adapter: domain → radio stack)
// ───────────────────────────────────────────────────────────────

/// Hands an uplink to the radio stack for transmission at the next
/// possible time.
pub trait UplinkPort {
    fn send(&mut self, request: &UplinkRequest) -> Result<(), UplinkError>;
}

// ───────────────────────────────────────────────────────────────
// Output port (driven adapter: domain → GPIO)
// ───────────────────────────────────────────────────────────────

/// Drives the local output (status LED or relay).
pub trait OutputPort {
    fn set_output(&mut self, enabled: bool);
}

// ───────────────────────────────────────────────────────────────
// Reset port (driven adapter: domain → chip reset)
// ───────────────────────────────────────────────────────────────

/// Performs the irreversible device reset.
///
/// On hardware this does not return. Simulation backends record the
/// request and return so tests can observe it.
pub trait ResetPort {
    /// Wait `settle`, then reset.
    fn reset(&mut self, settle: Duration);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: domain ↔ persistent config)
// ───────────────────────────────────────────────────────────────

/// Loads and persists system configuration.
///
/// Implementations MUST validate config values before persisting and
/// reject invalid ranges with [`ConfigError::ValidationFailed`].
pub trait ConfigPort {
    /// Load configuration from persistent storage.
    /// Returns [`SystemConfig::default()`] if no stored config exists.
    fn load(&self) -> Result<SystemConfig, ConfigError>;

    /// Validate and persist configuration.
    fn save(&self, config: &SystemConfig) -> Result<(), ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Scheduler delegate (decouples scheduler from the radio stack)
// ───────────────────────────────────────────────────────────────

/// Callback the [`TxScheduler`](crate::scheduler::TxScheduler) invokes
/// when the periodic uplink is due.
pub trait SchedulerDelegate {
    fn on_uplink_due(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Stored config failed deserialization.
    Corrupted,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// Generic I/O error from the storage backend.
    IoError,
}

/// Errors from [`UplinkPort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UplinkError {
    /// The stack already has an uplink pending.
    QueueFull,
    /// No network session yet (join not completed).
    NotJoined,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl core::fmt::Display for UplinkError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::QueueFull => write!(f, "uplink queue full"),
            Self::NotJoined => write!(f, "network not joined"),
        }
    }
}
