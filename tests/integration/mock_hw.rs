//! Mock hardware adapter for integration tests.
//!
//! Records every port call so tests can assert on the full command
//! history without touching real GPIO, the radio or the reset line.

use core::time::Duration;

use energymeter::app::effects::UplinkRequest;
use energymeter::app::events::AppEvent;
use energymeter::app::ports::{EventSink, OutputPort, ResetPort, UplinkError, UplinkPort};

// ── Port call record ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum PortCall {
    SetOutput(bool),
    Uplink(UplinkRequest),
    Reset(Duration),
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub calls: Vec<PortCall>,
    /// When set, every uplink is refused with this error.
    pub uplink_error: Option<UplinkError>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            uplink_error: None,
        }
    }

    pub fn uplinks(&self) -> Vec<&UplinkRequest> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                PortCall::Uplink(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    pub fn reset_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, PortCall::Reset(_)))
            .count()
    }

    pub fn output_level(&self) -> Option<bool> {
        self.calls.iter().rev().find_map(|c| match c {
            PortCall::SetOutput(level) => Some(*level),
            _ => None,
        })
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPort for MockHardware {
    fn set_output(&mut self, enabled: bool) {
        self.calls.push(PortCall::SetOutput(enabled));
    }
}

impl UplinkPort for MockHardware {
    fn send(&mut self, request: &UplinkRequest) -> Result<(), UplinkError> {
        if let Some(e) = self.uplink_error {
            return Err(e);
        }
        self.calls.push(PortCall::Uplink(request.clone()));
        Ok(())
    }
}

impl ResetPort for MockHardware {
    fn reset(&mut self, settle: Duration) {
        self.calls.push(PortCall::Reset(settle));
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn rejections(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::DownlinkRejected(_)))
            .count()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
