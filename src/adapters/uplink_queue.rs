//! Pending-uplink queue between the core and the radio stack.
//!
//! The core only ever asks for "transmit at the next possible time". The
//! radio stack's event loop drains this queue whenever it is free to start
//! a new transmission.

use heapless::Deque;
use log::info;

use crate::app::effects::UplinkRequest;
use crate::app::ports::{UplinkError, UplinkPort};

/// Fixed-capacity FIFO of uplinks waiting for the radio.
pub struct UplinkQueue<const N: usize = 4> {
    pending: Deque<UplinkRequest, N>,
    joined: bool,
}

impl<const N: usize> Default for UplinkQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> UplinkQueue<N> {
    pub fn new() -> Self {
        Self {
            pending: Deque::new(),
            joined: false,
        }
    }

    /// Called by the radio stack when the session is (re)established or lost.
    pub fn set_joined(&mut self, joined: bool) {
        self.joined = joined;
    }

    /// Next uplink for the radio stack to transmit.
    pub fn pop(&mut self) -> Option<UplinkRequest> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<const N: usize> UplinkPort for UplinkQueue<N> {
    fn send(&mut self, request: &UplinkRequest) -> Result<(), UplinkError> {
        if !self.joined {
            return Err(UplinkError::NotJoined);
        }
        self.pending
            .push_back(request.clone())
            .map_err(|_| UplinkError::QueueFull)?;
        info!(
            "Uplink queued: {} byte(s) on port {} (confirmed={})",
            request.payload.len(),
            request.port,
            request.confirmed
        );
        Ok(())
    }
}
