//! Downlink command codec.
//!
//! Classification is purely on frame shape: length first, then the
//! sentinel bytes of the framed envelope. A frame that is neither shape is
//! rejected; a 1-byte `0x55` is not a truncated framed command.

use crate::app::commands::Command;
use crate::error::DownlinkError;

use super::frame::Frame;

/// Length of a framed command.
pub const FRAMED_LEN: usize = 5;

/// First byte of every framed command.
pub const FRAME_HEADER: u8 = 0x55;

/// Last byte of every framed command.
pub const FRAME_TAIL: u8 = 0xFF;

/// Framed sub-command: set transmit interval.
pub const CMD_SET_INTERVAL: u8 = 0x01;

/// Framed sub-command: reboot.
pub const CMD_REBOOT: u8 = 0x02;

/// 1-byte command values.
pub const VALUE_OUTPUT_LOW: u8 = 0;
pub const VALUE_OUTPUT_HIGH: u8 = 1;
pub const VALUE_RELAY_UPLINK: u8 = 101;

/// Wire form of a command (at most one framed envelope).
pub type Encoded = heapless::Vec<u8, FRAMED_LEN>;

/// Classify a frame, reporting why it was rejected.
pub fn classify(frame: &Frame) -> Result<Command, DownlinkError> {
    match *frame.bytes() {
        [value] => match value {
            VALUE_OUTPUT_LOW => Ok(Command::SetOutputLow),
            VALUE_OUTPUT_HIGH => Ok(Command::SetOutputHigh),
            VALUE_RELAY_UPLINK => Ok(Command::TriggerRelayUplink),
            other => Err(DownlinkError::UnrecognizedValue(other)),
        },
        [FRAME_HEADER, cmd, hi, lo, FRAME_TAIL] => match cmd {
            CMD_SET_INTERVAL => Ok(Command::SetInterval(u16::from_be_bytes([hi, lo]))),
            CMD_REBOOT => Ok(Command::Reboot),
            other => Err(DownlinkError::UnknownSubcommand(other)),
        },
        _ => Err(DownlinkError::MalformedFrame { len: frame.len() }),
    }
}

/// Decode a frame into a command. Never fails: rejects become `Unknown`.
pub fn decode(frame: &Frame) -> Command {
    classify(frame).unwrap_or(Command::Unknown)
}

/// True if the frame has the framed-command shape (length and sentinels).
pub fn is_framed(frame: &Frame) -> bool {
    matches!(*frame.bytes(), [FRAME_HEADER, _, _, _, FRAME_TAIL])
}

/// Produce the wire bytes for a command. `Unknown` has no encoding.
pub fn encode(command: &Command) -> Option<Encoded> {
    let bytes: &[u8] = match *command {
        Command::SetOutputLow => &[VALUE_OUTPUT_LOW],
        Command::SetOutputHigh => &[VALUE_OUTPUT_HIGH],
        Command::TriggerRelayUplink => &[VALUE_RELAY_UPLINK],
        Command::SetInterval(secs) => {
            let [hi, lo] = secs.to_be_bytes();
            return Encoded::from_slice(&[FRAME_HEADER, CMD_SET_INTERVAL, hi, lo, FRAME_TAIL])
                .ok();
        }
        Command::Reboot => &[FRAME_HEADER, CMD_REBOOT, 0x00, 0x00, FRAME_TAIL],
        Command::Unknown => return None,
    };
    Encoded::from_slice(bytes).ok()
}
