//! Downlink diagnostics.
//!
//! Counters for every downlink outcome, kept by the
//! [`AppService`](crate::app::service::AppService) and read back by the
//! host for its debug console, plus a hex formatter for payload dumps.

use core::fmt;

use crate::error::DownlinkError;

/// Running totals since power-on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownlinkStats {
    pub frames_received: u32,
    pub commands_applied: u32,
    pub malformed: u32,
    pub unrecognized_value: u32,
    pub unknown_subcommand: u32,
    pub wrong_port: u32,
    pub reboot_suppressed: u32,
    pub reboots_scheduled: u32,
}

impl DownlinkStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a rejection under its kind.
    pub fn record_rejection(&mut self, error: DownlinkError) {
        let slot = match error {
            DownlinkError::MalformedFrame { .. } => &mut self.malformed,
            DownlinkError::UnrecognizedValue(_) => &mut self.unrecognized_value,
            DownlinkError::UnknownSubcommand(_) => &mut self.unknown_subcommand,
            DownlinkError::WrongPort { .. } => &mut self.wrong_port,
            DownlinkError::RebootSuppressed { .. } => &mut self.reboot_suppressed,
        };
        *slot = slot.saturating_add(1);
    }

    /// Total downlinks that produced no effect.
    pub fn rejected(&self) -> u32 {
        self.malformed
            .saturating_add(self.unrecognized_value)
            .saturating_add(self.unknown_subcommand)
            .saturating_add(self.wrong_port)
            .saturating_add(self.reboot_suppressed)
    }
}

/// Displays a payload as space-separated upper-case hex bytes.
pub struct HexDump<'a>(pub &'a [u8]);

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{b:02X}")?;
        }
        Ok(())
    }
}
