//! Periodic uplink scheduler.
//!
//! Decides when the next metering uplink is due. The interval is read from
//! [`DeviceState`] each time the scheduler re-arms, so a `SetInterval`
//! downlink takes effect from the next cycle on. When the uplink is due the
//! scheduler notifies a [`SchedulerDelegate`]; the host implements the
//! delegate to build the measurement payload and hand it to the radio.
//!
//! ```text
//!  uptime ──▶ TxScheduler::poll ──▶ SchedulerDelegate::on_uplink_due
//!                  ▲
//!  DeviceState ────┘ (transmit_interval_secs)
//! ```

use log::info;

use crate::app::ports::SchedulerDelegate;
use crate::app::state::DeviceState;

/// The uplink scheduler engine.
pub struct TxScheduler {
    /// Uptime (seconds) at which the next uplink is due; `None` = now.
    next_due_secs: Option<u64>,
    /// Global enable flag (cleared while the session is not joined).
    enabled: bool,
}

impl Default for TxScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl TxScheduler {
    /// The first uplink is due on the first poll.
    pub fn new() -> Self {
        Self {
            next_due_secs: None,
            enabled: true,
        }
    }

    /// Enable or disable periodic uplinks.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Poll with the current uptime. Fires at most once per call.
    ///
    /// Returns `true` if the delegate was notified.
    pub fn poll(
        &mut self,
        now_secs: u64,
        state: &DeviceState,
        delegate: &mut dyn SchedulerDelegate,
    ) -> bool {
        if !self.enabled {
            return false;
        }
        if self.next_due_secs.is_some_and(|due| now_secs < due) {
            return false;
        }

        let interval = u64::from(state.transmit_interval_secs);
        self.next_due_secs = Some(now_secs.saturating_add(interval));
        info!("Scheduler: uplink due (next in {}s)", interval);
        delegate.on_uplink_due();
        true
    }

    /// Uptime at which the next uplink is due, `None` if due immediately.
    pub fn next_due_secs(&self) -> Option<u64> {
        self.next_due_secs
    }
}
