//! Integration tests for the Frame → AppService → ports pipeline.
//!
//! These run on the host and verify that a raw downlink payload ends up as
//! the right state change and port call, without any real hardware.

use super::mock_hw::{MockHardware, PortCall, RecordingSink};

use energymeter::app::commands::Command;
use energymeter::app::effects::{Effect, RELAY_UPLINK_PAYLOAD};
use energymeter::app::events::AppEvent;
use energymeter::app::ports::UplinkError;
use energymeter::app::service::AppService;
use energymeter::app::state::SessionCounters;
use energymeter::config::SystemConfig;
use energymeter::error::DownlinkError;
use energymeter::protocol::Frame;

fn make_app() -> (AppService, MockHardware, RecordingSink) {
    let mut app = AppService::new(SystemConfig::default());
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    app.start(&mut hw, &mut sink);
    (app, hw, sink)
}

fn frame(port: u8, bytes: &[u8]) -> Frame {
    Frame::new(port, bytes).unwrap()
}

const RUNNING: SessionCounters = SessionCounters {
    up_count: 5,
    down_count: 1,
};

#[test]
fn start_drives_output_low_and_announces_interval() {
    let (_app, hw, sink) = make_app();
    assert_eq!(hw.calls, vec![PortCall::SetOutput(false)]);
    assert_eq!(
        sink.events,
        vec![AppEvent::Started {
            tx_interval_secs: 15
        }]
    );
}

#[test]
fn set_interval_frame_updates_transmit_interval() {
    let (mut app, mut hw, mut sink) = make_app();

    let effect = app.process_downlink(
        &frame(255, &[0x55, 0x01, 0x00, 0x1E, 0xFF]),
        &RUNNING,
        &mut hw,
        &mut sink,
    );

    assert_eq!(effect, Effect::None);
    assert_eq!(app.state().transmit_interval_secs, 30);
    assert!(sink.events.contains(&AppEvent::CommandApplied(Command::SetInterval(30))));
    // Only the start-up output write; no uplink, no reset.
    assert_eq!(hw.calls.len(), 1);
}

#[test]
fn reboot_frame_after_session_progress_resets_device() {
    let (mut app, mut hw, mut sink) = make_app();

    let effect = app.process_downlink(
        &frame(255, &[0x55, 0x02, 0x00, 0x00, 0xFF]),
        &RUNNING,
        &mut hw,
        &mut sink,
    );

    assert_eq!(effect, Effect::ScheduleReboot);
    assert_eq!(hw.reset_count(), 1);
    assert_eq!(
        hw.calls.last(),
        Some(&PortCall::Reset(app.config().reboot_settle()))
    );
    assert!(sink.events.contains(&AppEvent::RebootScheduled { up_count: 5 }));
}

#[test]
fn relay_byte_sends_fixed_payload() {
    let (mut app, mut hw, mut sink) = make_app();

    let effect = app.process_downlink(&frame(1, &[101]), &RUNNING, &mut hw, &mut sink);

    let Effect::SendUplink(req) = effect else {
        panic!("expected SendUplink");
    };
    assert_eq!(req.payload.as_slice(), RELAY_UPLINK_PAYLOAD);
    assert_eq!(req.port, 101);
    assert!(!req.confirmed);
    assert_eq!(hw.uplinks(), vec![&req]);
}

#[test]
fn output_frames_drive_pin_only_on_change() {
    let (mut app, mut hw, mut sink) = make_app();

    app.process_downlink(&frame(1, &[1]), &RUNNING, &mut hw, &mut sink);
    assert_eq!(hw.output_level(), Some(true));
    assert!(app.state().output_enabled);

    let writes_before = hw.calls.len();
    app.process_downlink(&frame(1, &[1]), &RUNNING, &mut hw, &mut sink);
    assert_eq!(hw.calls.len(), writes_before, "no write when level unchanged");

    app.process_downlink(&frame(1, &[0]), &RUNNING, &mut hw, &mut sink);
    assert_eq!(hw.output_level(), Some(false));
}

#[test]
fn rejected_frames_leave_state_and_ports_untouched() {
    let (mut app, mut hw, mut sink) = make_app();
    let before = *app.state();

    let bad: [&[u8]; 5] = [
        &[7],
        &[0x55],
        &[0x55, 0x09, 0x00, 0x01, 0xFF],
        &[0x55, 0x01, 0x00, 0x1E, 0xFE],
        &[0x01, 0x02, 0x03],
    ];
    for bytes in bad {
        let effect = app.process_downlink(&frame(1, bytes), &RUNNING, &mut hw, &mut sink);
        assert_eq!(effect, Effect::None, "frame {:02X?}", bytes);
    }

    assert_eq!(*app.state(), before);
    assert_eq!(hw.calls.len(), 1);
    assert_eq!(sink.rejections(), 5);

    let stats = app.stats();
    assert_eq!(stats.frames_received, 5);
    assert_eq!(stats.unrecognized_value, 2);
    assert_eq!(stats.unknown_subcommand, 1);
    assert_eq!(stats.malformed, 2);
    assert_eq!(stats.commands_applied, 0);
}

#[test]
fn every_frame_yields_one_outcome_event() {
    let (mut app, mut hw, mut sink) = make_app();
    let frames: [&[u8]; 4] = [&[1], &[9], &[101], &[0x55, 0x01, 0x00, 0x3C, 0xFF]];

    for bytes in frames {
        sink.events.clear();
        app.process_downlink(&frame(1, bytes), &RUNNING, &mut hw, &mut sink);
        let outcomes = sink
            .events
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    AppEvent::CommandApplied(_) | AppEvent::DownlinkRejected(_)
                )
            })
            .count();
        assert_eq!(outcomes, 1, "frame {:02X?}", bytes);
        assert!(matches!(sink.events[0], AppEvent::DownlinkReceived { .. }));
    }
}

#[test]
fn refused_uplink_is_not_fatal() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.uplink_error = Some(UplinkError::QueueFull);

    let effect = app.process_downlink(&frame(1, &[101]), &RUNNING, &mut hw, &mut sink);

    assert!(matches!(effect, Effect::SendUplink(_)));
    assert!(hw.uplinks().is_empty());
    // Service keeps working afterwards.
    app.process_downlink(&frame(1, &[1]), &RUNNING, &mut hw, &mut sink);
    assert!(app.state().output_enabled);
}

#[test]
fn framed_port_filter_counts_wrong_port() {
    let mut cfg = SystemConfig::default();
    cfg.downlink.framed_port = Some(255);
    let mut app = AppService::new(cfg);
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();

    let effect = app.process_downlink(
        &frame(1, &[0x55, 0x02, 0x00, 0x00, 0xFF]),
        &RUNNING,
        &mut hw,
        &mut sink,
    );

    assert_eq!(effect, Effect::None);
    assert_eq!(hw.reset_count(), 0);
    assert_eq!(app.stats().wrong_port, 1);
    assert!(sink
        .events
        .contains(&AppEvent::DownlinkRejected(DownlinkError::WrongPort { port: 1 })));
}
