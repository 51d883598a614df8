//! Application service: the hexagonal core.
//!
//! [`AppService`] owns the device state, the reboot guard and the downlink
//! statistics. The radio stack hands it one [`Frame`] per received
//! downlink; it decodes the frame, applies the command to its state and
//! returns the single [`Effect`] the host must carry out.
//!
//! ```text
//!  Frame ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!            │        AppService         │
//!            │ codec · dispatch · guard  │ ──▶ Effect
//!            └──────────────────────────┘
//!                                   │ apply_effect
//!                                   ▼
//!                UplinkPort · OutputPort · ResetPort
//! ```

use log::{debug, info, warn};

use crate::config::SystemConfig;
use crate::diagnostics::{DownlinkStats, HexDump};
use crate::error::DownlinkError;
use crate::protocol::Frame;
use crate::protocol::codec;
use crate::safety::RebootGuard;

use super::commands::Command;
use super::effects::{Effect, UplinkRequest};
use super::events::AppEvent;
use super::ports::{EventSink, OutputPort, ResetPort, UplinkPort};
use super::state::{DeviceState, SessionCounters};

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all downlink handling.
pub struct AppService {
    config: SystemConfig,
    state: DeviceState,
    guard: RebootGuard,
    stats: DownlinkStats,
}

impl AppService {
    /// Construct the service from configuration.
    ///
    /// The output is not driven until [`start`](Self::start) is called.
    pub fn new(config: SystemConfig) -> Self {
        let state = DeviceState::new(&config);
        let guard = RebootGuard::new(&config.reboot);
        Self {
            config,
            state,
            guard,
            stats: DownlinkStats::new(),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Drive the output to its initial level and announce the start.
    pub fn start(&mut self, hw: &mut impl OutputPort, sink: &mut impl EventSink) {
        hw.set_output(self.state.output_enabled);
        sink.emit(&AppEvent::Started {
            tx_interval_secs: self.state.transmit_interval_secs,
        });
        info!(
            "AppService started (tx_interval={}s, profile={:?}, activation={:?}, reboot_baseline={})",
            self.state.transmit_interval_secs,
            self.config.network.profile,
            self.config.network.activation,
            self.guard.baseline()
        );
    }

    // ── Downlink handling ─────────────────────────────────────

    /// Full pipeline for one received downlink: decode, dispatch, then push
    /// the resulting output level and effect through the ports.
    ///
    /// The `hw` parameter satisfies all three driven ports at once, which
    /// avoids juggling several mutable borrows of the same board adapter.
    pub fn process_downlink(
        &mut self,
        frame: &Frame,
        counters: &SessionCounters,
        hw: &mut (impl UplinkPort + OutputPort + ResetPort),
        sink: &mut impl EventSink,
    ) -> Effect {
        let output_before = self.state.output_enabled;
        let effect = self.handle_downlink(frame, counters, sink);
        if self.state.output_enabled != output_before {
            hw.set_output(self.state.output_enabled);
        }
        self.apply_effect(&effect, hw);
        effect
    }

    /// Decode and dispatch one downlink without touching any hardware.
    pub fn handle_downlink(
        &mut self,
        frame: &Frame,
        counters: &SessionCounters,
        sink: &mut impl EventSink,
    ) -> Effect {
        self.stats.frames_received = self.stats.frames_received.saturating_add(1);
        sink.emit(&AppEvent::DownlinkReceived {
            port: frame.port(),
            len: frame.len(),
        });
        debug!(
            "Downlink payload: {{ {} }} (up={}, down={})",
            HexDump(frame.bytes()),
            counters.up_count,
            counters.down_count
        );

        if let Some(port) = self.config.downlink.framed_port {
            if codec::is_framed(frame) && frame.port() != port {
                return self.reject(
                    DownlinkError::WrongPort { port: frame.port() },
                    sink,
                );
            }
        }

        match codec::classify(frame) {
            Ok(cmd) => self.dispatch(cmd, counters, sink),
            Err(e) => self.reject(e, sink),
        }
    }

    /// Apply a decoded command to the device state.
    ///
    /// Returns the effect the host has to perform; the service itself never
    /// calls into hardware here.
    pub fn dispatch(
        &mut self,
        cmd: Command,
        counters: &SessionCounters,
        sink: &mut impl EventSink,
    ) -> Effect {
        let effect = match cmd {
            Command::SetOutputLow => {
                self.set_output(false, sink);
                Effect::None
            }
            Command::SetOutputHigh => {
                self.set_output(true, sink);
                Effect::None
            }
            Command::TriggerRelayUplink => {
                Effect::SendUplink(UplinkRequest::relay(&self.config.uplink))
            }
            Command::SetInterval(secs) => {
                self.set_interval(secs, sink);
                Effect::None
            }
            Command::Reboot => {
                if !self.guard.may_reboot(counters) {
                    return self.reject(
                        DownlinkError::RebootSuppressed {
                            up_count: counters.up_count,
                        },
                        sink,
                    );
                }
                self.stats.reboots_scheduled = self.stats.reboots_scheduled.saturating_add(1);
                sink.emit(&AppEvent::RebootScheduled {
                    up_count: counters.up_count,
                });
                Effect::ScheduleReboot
            }
            Command::Unknown => {
                debug!("Unknown command ignored");
                return Effect::None;
            }
        };

        self.stats.commands_applied = self.stats.commands_applied.saturating_add(1);
        sink.emit(&AppEvent::CommandApplied(cmd));
        effect
    }

    /// Carry out an effect through the driven ports.
    ///
    /// On hardware a `ScheduleReboot` does not return.
    pub fn apply_effect(&self, effect: &Effect, hw: &mut (impl UplinkPort + ResetPort)) {
        match effect {
            Effect::None => {}
            Effect::SendUplink(req) => {
                if let Err(e) = hw.send(req) {
                    warn!("Uplink on port {} not queued: {}", req.port, e);
                }
            }
            Effect::ScheduleReboot => {
                let settle = self.config.reboot_settle();
                warn!("Resetting the module in {} ms", settle.as_millis());
                hw.reset(settle);
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Live device state (read by the transmit scheduler).
    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    /// Downlink counters since startup.
    pub fn stats(&self) -> &DownlinkStats {
        &self.stats
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    // ── Internal ──────────────────────────────────────────────

    fn set_output(&mut self, enabled: bool, sink: &mut impl EventSink) {
        if self.state.output_enabled != enabled {
            self.state.output_enabled = enabled;
            sink.emit(&AppEvent::OutputChanged(enabled));
        }
    }

    fn set_interval(&mut self, requested: u16, sink: &mut impl EventSink) {
        let min = self.config.downlink.min_tx_interval_secs;
        let mut secs = u32::from(requested);
        if secs < min {
            warn!("Interval {}s below minimum, clamped to {}s", secs, min);
            secs = min;
        }

        let from_secs = self.state.transmit_interval_secs;
        self.state.transmit_interval_secs = secs;
        if from_secs != secs {
            sink.emit(&AppEvent::IntervalChanged {
                from_secs,
                to_secs: secs,
            });
        }
    }

    fn reject(&mut self, e: DownlinkError, sink: &mut impl EventSink) -> Effect {
        self.stats.record_rejection(e);
        sink.emit(&AppEvent::DownlinkRejected(e));
        Effect::None
    }
}
