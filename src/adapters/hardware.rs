//! Hardware adapter: bridges the board and the radio stack to domain port traits.
//!
//! Owns the output pin (status LED or relay driver) and the uplink port,
//! and performs the chip reset. This is the only module in the system that
//! resets the device. On non-espidf targets the reset is recorded instead
//! of performed.

use core::time::Duration;

use embedded_hal::digital::OutputPin;
use log::warn;

use crate::app::effects::UplinkRequest;
use crate::app::ports::{OutputPort, ResetPort, UplinkError, UplinkPort};

/// Concrete adapter that combines the board I/O behind port traits.
pub struct HardwareAdapter<P: OutputPin, U: UplinkPort> {
    output: P,
    uplinks: U,
    #[cfg(not(target_os = "espidf"))]
    resets: Vec<Duration>,
}

impl<P: OutputPin, U: UplinkPort> HardwareAdapter<P, U> {
    pub fn new(output: P, uplinks: U) -> Self {
        Self {
            output,
            uplinks,
            #[cfg(not(target_os = "espidf"))]
            resets: Vec::new(),
        }
    }

    /// The uplink port, for the radio stack to drain.
    pub fn uplinks_mut(&mut self) -> &mut U {
        &mut self.uplinks
    }

    pub fn output_mut(&mut self) -> &mut P {
        &mut self.output
    }

    /// Settle delays of every reset requested so far (simulation only).
    #[cfg(not(target_os = "espidf"))]
    pub fn resets(&self) -> &[Duration] {
        &self.resets
    }
}

// ── OutputPort implementation ─────────────────────────────────

impl<P: OutputPin, U: UplinkPort> OutputPort for HardwareAdapter<P, U> {
    fn set_output(&mut self, enabled: bool) {
        let result = if enabled {
            self.output.set_high()
        } else {
            self.output.set_low()
        };
        if let Err(e) = result {
            warn!("Output pin write failed: {:?}", e);
        }
    }
}

// ── UplinkPort implementation ─────────────────────────────────

impl<P: OutputPin, U: UplinkPort> UplinkPort for HardwareAdapter<P, U> {
    fn send(&mut self, request: &UplinkRequest) -> Result<(), UplinkError> {
        self.uplinks.send(request)
    }
}

// ── ResetPort implementation ──────────────────────────────────

impl<P: OutputPin, U: UplinkPort> ResetPort for HardwareAdapter<P, U> {
    #[cfg(target_os = "espidf")]
    fn reset(&mut self, settle: Duration) {
        use esp_idf_hal::delay::{Ets, FreeRtos};

        // The fine part stays below Ets' single-call limit.
        FreeRtos::delay_ms(settle.as_millis() as u32);
        Ets::delay_us(settle.subsec_micros() % 1000);
        // SAFETY: esp_restart has no preconditions and never returns.
        unsafe { esp_idf_sys::esp_restart() };
    }

    #[cfg(not(target_os = "espidf"))]
    fn reset(&mut self, settle: Duration) {
        log::info!("Reset(sim): requested after {:?}", settle);
        self.resets.push(settle);
    }
}
