//! End-to-end scenarios over the pure core, driven the way the tick loop
//! drives it: one evaluation per simulated 100 ms, with a fake player that
//! mirrors the commands it is given.
//!
//! Run with: cargo test --no-default-features --features host

#![cfg(feature = "host")]

use alarmclock::shared_constants::{ALARM_SCHEDULE, DISPLAY_WINDOW};
use alarmclock::{
    Alarm, AlarmStatus, Clock, ClockStatic, PlayerAction, TimeOfDay, TimeOverride, UnixSeconds,
    display_policy, screen,
};
use embassy_time::Duration;

/// Stand-in for the playback driver: remembers whether a clip is sounding
/// and how many times it was started.
#[derive(Default)]
struct FakePlayer {
    active: bool,
    starts: usize,
    stops: usize,
}

impl FakePlayer {
    fn apply(&mut self, action: PlayerAction) {
        match action {
            PlayerAction::Start => {
                self.active = true;
                self.starts += 1;
            }
            PlayerAction::Stop => {
                self.active = false;
                self.stops += 1;
            }
            PlayerAction::None => {}
        }
    }
}

/// Step through one simulated minute at 10 ticks per second.
fn run_trigger_minute(
    alarm: &mut Alarm,
    player: &mut FakePlayer,
    hour: u8,
    minute: u8,
    enabled: bool,
) {
    for tick in 0..600_u32 {
        let now = TimeOfDay::new(hour, minute, (tick / 10) as u8);
        let action = alarm.on_tick(now, enabled, player.active);
        player.apply(action);
    }
}

#[test]
fn trigger_minute_starts_playback_exactly_once() {
    let mut alarm = Alarm::new(ALARM_SCHEDULE);
    let mut player = FakePlayer::default();

    // 07:14: nothing happens for a whole minute of ticks.
    run_trigger_minute(&mut alarm, &mut player, 7, 14, true);
    assert_eq!(player.starts, 0);
    assert_eq!(alarm.status(), AlarmStatus::Waiting);

    // 07:15: playback starts on the first tick and is never re-issued while
    // the player stays active.
    run_trigger_minute(&mut alarm, &mut player, 7, 15, true);
    assert_eq!(player.starts, 1);
    assert_eq!(alarm.status(), AlarmStatus::Playing);

    // 07:16: the occurrence ends; the player is stopped and the alarm
    // re-arms.
    run_trigger_minute(&mut alarm, &mut player, 7, 16, true);
    assert_eq!(player.stops, 1);
    assert_eq!(alarm.status(), AlarmStatus::Waiting);
}

#[test]
fn finished_clip_restarts_while_trigger_minute_lasts() {
    let mut alarm = Alarm::new(ALARM_SCHEDULE);
    let mut player = FakePlayer::default();

    player.apply(alarm.on_tick(TimeOfDay::new(7, 15, 0), true, player.active));
    assert_eq!(player.starts, 1);

    // The clip runs out mid-minute; the next evaluation notices and
    // restarts it.
    player.active = false;
    player.apply(alarm.on_tick(TimeOfDay::new(7, 15, 3), true, player.active));
    assert_eq!(player.starts, 2);
    assert_eq!(alarm.status(), AlarmStatus::Playing);
}

#[test]
fn button_silences_for_the_rest_of_the_occurrence() {
    let mut alarm = Alarm::new(ALARM_SCHEDULE);
    let mut player = FakePlayer::default();

    player.apply(alarm.on_tick(TimeOfDay::new(7, 15, 0), true, player.active));
    assert!(alarm.on_button());
    assert_eq!(alarm.status(), AlarmStatus::Stopped);

    // The rest of the minute: one stop command, no restarts.
    for tick in 10..600_u32 {
        let now = TimeOfDay::new(7, 15, (tick / 10) as u8);
        player.apply(alarm.on_tick(now, true, player.active));
    }
    assert_eq!(player.starts, 1);
    assert_eq!(player.stops, 1);
    assert_eq!(alarm.status(), AlarmStatus::Stopped);
}

#[test]
fn disabling_over_http_stops_playback_next_tick() {
    let mut alarm = Alarm::new(ALARM_SCHEDULE);
    let mut player = FakePlayer::default();

    player.apply(alarm.on_tick(TimeOfDay::new(7, 15, 0), true, player.active));
    assert_eq!(alarm.status(), AlarmStatus::Playing);

    // POST /api/alarm_enabled alarm_onoff=OFF happened between ticks.
    let action = alarm.on_tick(TimeOfDay::new(7, 15, 5), false, player.active);
    assert_eq!(action, PlayerAction::Stop);
    player.apply(action);
    assert_eq!(alarm.status(), AlarmStatus::Waiting);
    assert!(!player.active);
}

#[test]
fn one_trigger_per_day() {
    let mut alarm = Alarm::new(ALARM_SCHEDULE);
    let mut player = FakePlayer::default();
    let mut entered_playing = 0;

    // Two simulated days, one evaluation per second.
    for second_of_day in 0..(2 * 86_400_u32) {
        let was_playing = alarm.status() == AlarmStatus::Playing;
        let now = TimeOfDay::from_seconds_of_day(second_of_day);
        player.apply(alarm.on_tick(now, true, player.active));
        if !was_playing && alarm.status() == AlarmStatus::Playing {
            entered_playing += 1;
        }
    }
    assert_eq!(entered_playing, 2);
}

#[test]
fn nighttime_frame_goes_dark_when_the_hold_expires() {
    let night = TimeOfDay::new(22, 30, 1);
    let window = DISPLAY_WINDOW;

    // Within the five-second hold after a press, the face shows.
    let held = display_policy::face_visible(
        night,
        AlarmStatus::Waiting,
        Duration::from_secs(5),
        &window,
    );
    assert!(held);
    let frame = screen::compose(night, AlarmStatus::Waiting, true, held);
    assert!((0..screen::WIDTH).any(|x| frame.get(x, 0) > 0));

    // A tenth of a millisecond past the hold, it does not.
    let expired = display_policy::face_visible(
        night,
        AlarmStatus::Waiting,
        Duration::from_micros(5_000_100),
        &window,
    );
    assert!(!expired);
    let frame = screen::compose(night, AlarmStatus::Waiting, true, expired);
    assert!((0..screen::WIDTH).all(|x| (0..screen::HEIGHT).all(|y| frame.get(x, y) == 0)));
}

#[test]
fn hour_override_reads_back_and_advances_in_real_time() {
    // "Real" clock anchored at 10:00:00; the startup override rewrites the
    // hour to 7 and the derived time then advances on its own.
    let real_start = TimeOfDay::new(10, 0, 0);
    let overrides = TimeOverride {
        hour: Some(7),
        minute: None,
        second: None,
    };
    let synthetic = overrides.coalesce(real_start);
    assert_eq!(synthetic, TimeOfDay::new(7, 0, 0));

    // Five real seconds later the effective clock reads 07:00:05: the offset
    // is fixed at startup, not re-resolved.
    let offset = real_start.forward_seconds_until(&synthetic);
    let effective = TimeOfDay::from_seconds_of_day(
        real_start.seconds_of_day() + 5 + offset,
    );
    assert_eq!(effective, TimeOfDay::new(7, 0, 5));
}

#[test]
fn clock_keeps_counting_after_an_anchor() {
    static CLOCK_STATIC: ClockStatic = Clock::new_static();
    let clock = Clock::new(&CLOCK_STATIC, 0, TimeOverride::NONE);

    // Anchor at 10:00:00 and let real time carry it forward.
    clock.set_from_unix(UnixSeconds(10 * 3600));
    let before = clock.now_local();
    std::thread::sleep(std::time::Duration::from_millis(1200));
    let after = clock.now_local();

    let advanced = before.forward_seconds_until(&after);
    assert!(
        (1..=2).contains(&advanced),
        "expected the clock to advance ~1s, got {advanced}s"
    );
}
