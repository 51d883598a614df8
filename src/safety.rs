//! Reboot guard.
//!
//! A reboot request travels as a confirmed downlink, and the network server
//! may deliver it again after the device has already restarted. Right
//! after a reset the session stack re-seeds its uplink counter to a small
//! fixed value, so a reboot is only honoured once `up_count` has moved
//! past that value, i.e. at least one genuine uplink cycle has completed
//! since the restart.
//!
//! ## Limits
//!
//! This is a heuristic, not a replay guard: a legitimate second reboot
//! sent before the device has produced a new uplink is suppressed in
//! exactly the same way as a stale redelivery.

use log::{info, warn};

use crate::app::state::SessionCounters;
use crate::config::RebootConfig;

/// Decides whether a `Reboot` command may be honoured.
#[derive(Debug, Clone, Copy)]
pub struct RebootGuard {
    /// `up_count` the session stack reports immediately after a restart.
    post_restart_up_count: u32,
}

impl RebootGuard {
    pub fn new(config: &RebootConfig) -> Self {
        Self {
            post_restart_up_count: config.post_restart_up_count,
        }
    }

    /// True iff the session has moved past its post-restart baseline.
    pub fn may_reboot(&self, counters: &SessionCounters) -> bool {
        let allowed = counters.up_count > self.post_restart_up_count;
        if allowed {
            info!(
                "Reboot guard: open (up_count={} > {})",
                counters.up_count, self.post_restart_up_count
            );
        } else {
            warn!(
                "Reboot guard: closed (up_count={} <= {}), likely a redelivered downlink",
                counters.up_count, self.post_restart_up_count
            );
        }
        allowed
    }

    pub fn baseline(&self) -> u32 {
        self.post_restart_up_count
    }
}
