//! Received downlink frame.

use crate::error::{Error, Result};

/// Largest LoRaWAN application payload any data rate can carry.
pub const MAX_DOWNLINK_PAYLOAD: usize = 242;

/// One downlink payload as delivered by the radio stack.
///
/// Read-only once built; the service consumes it and it is dropped after
/// dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    port: u8,
    bytes: heapless::Vec<u8, MAX_DOWNLINK_PAYLOAD>,
}

impl Frame {
    /// Copy a received payload out of the radio stack's buffer.
    pub fn new(port: u8, payload: &[u8]) -> Result<Self> {
        let bytes = heapless::Vec::from_slice(payload)
            .map_err(|()| Error::FrameTooLong { len: payload.len() })?;
        Ok(Self { port, bytes })
    }

    /// Application port (FPort) the frame arrived on.
    pub fn port(&self) -> u8 {
        self.port
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Byte at `offset`, or `None` past the end.
    pub fn byte_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(offset).copied()
    }
}
