//! Fuzz target: downlink decoding
//!
//! Drives arbitrary payloads through `Frame::new`, `classify` and `decode`
//! and asserts that decoding never panics, agrees with classification,
//! and that every recognised command re-encodes to the exact input bytes
//! (reboot excepted, its data bytes are ignored).
//!
//! cargo fuzz run fuzz_downlink_decoder

#![no_main]

use energymeter::app::commands::Command;
use energymeter::protocol::codec::{classify, decode, encode};
use energymeter::protocol::Frame;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&port, payload)) = data.split_first() else {
        return;
    };
    let Ok(frame) = Frame::new(port, payload) else {
        return;
    };

    let command = decode(&frame);
    assert_eq!(command, classify(&frame).unwrap_or(Command::Unknown));

    match command {
        Command::Unknown => assert!(classify(&frame).is_err()),
        Command::Reboot => assert_eq!(frame.len(), 5),
        known => {
            let encoded = encode(&known).expect("known commands encode");
            assert_eq!(encoded.as_slice(), frame.bytes());
        }
    }
});
