//! Reboot-loop scenarios.
//!
//! The network server keeps redelivering a confirmed reboot downlink until
//! it sees an acknowledgement. These tests replay that sequence across a
//! simulated restart and check the device resets exactly once.

use super::mock_hw::{MockHardware, RecordingSink};

use energymeter::app::effects::Effect;
use energymeter::app::service::AppService;
use energymeter::app::state::SessionCounters;
use energymeter::config::SystemConfig;
use energymeter::error::DownlinkError;
use energymeter::app::events::AppEvent;
use energymeter::protocol::Frame;

fn reboot_frame() -> Frame {
    Frame::new(255, &[0x55, 0x02, 0x00, 0x00, 0xFF]).unwrap()
}

#[test]
fn redelivered_reboot_after_restart_is_suppressed() {
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();

    // Before the restart: long-running session.
    let mut app = AppService::new(SystemConfig::default());
    let effect = app.process_downlink(
        &reboot_frame(),
        &SessionCounters::new(40, 3),
        &mut hw,
        &mut sink,
    );
    assert_eq!(effect, Effect::ScheduleReboot);
    assert_eq!(hw.reset_count(), 1);

    // After the restart: fresh service, counters re-seeded to 2, and the
    // network redelivers the same downlink.
    let mut app = AppService::new(SystemConfig::default());
    let effect = app.process_downlink(
        &reboot_frame(),
        &SessionCounters::new(2, 1),
        &mut hw,
        &mut sink,
    );
    assert_eq!(effect, Effect::None);
    assert_eq!(hw.reset_count(), 1, "no second reset");
    assert!(sink.events.contains(&AppEvent::DownlinkRejected(
        DownlinkError::RebootSuppressed { up_count: 2 }
    )));
    assert_eq!(app.stats().reboot_suppressed, 1);
}

#[test]
fn reboot_allowed_again_after_one_uplink_cycle() {
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    let mut app = AppService::new(SystemConfig::default());

    for up_count in 0..=2 {
        let effect = app.process_downlink(
            &reboot_frame(),
            &SessionCounters::new(up_count, 0),
            &mut hw,
            &mut sink,
        );
        assert_eq!(effect, Effect::None, "up_count={}", up_count);
    }
    assert_eq!(hw.reset_count(), 0);

    let effect = app.process_downlink(
        &reboot_frame(),
        &SessionCounters::new(3, 0),
        &mut hw,
        &mut sink,
    );
    assert_eq!(effect, Effect::ScheduleReboot);
    assert_eq!(hw.reset_count(), 1);
}

#[test]
fn custom_baseline_moves_the_threshold() {
    let mut cfg = SystemConfig::default();
    cfg.reboot.post_restart_up_count = 10;
    let mut app = AppService::new(cfg);
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();

    let effect = app.process_downlink(
        &reboot_frame(),
        &SessionCounters::new(5, 0),
        &mut hw,
        &mut sink,
    );
    assert_eq!(effect, Effect::None);

    let effect = app.process_downlink(
        &reboot_frame(),
        &SessionCounters::new(11, 0),
        &mut hw,
        &mut sink,
    );
    assert_eq!(effect, Effect::ScheduleReboot);
}
