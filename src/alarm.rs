//! The alarm state machine.
//!
//! One `Alarm` value lives in the tick loop. Each ~100 ms tick feeds it the
//! current effective time, the enabled flag, and whether the playback device
//! is currently sounding; it answers with the (idempotent) player command for
//! this tick. Button presses arrive between ticks via [`Alarm::on_button`].

use crate::time_of_day::TimeOfDay;

/// Where the alarm is in its daily cycle.
///
/// `Waiting` -> `Playing` -> `Stopped` -> `Waiting`, cyclic. `Waiting` is
/// forced the instant the trigger minute ends (or the alarm is disabled),
/// which is what re-arms the alarm for the next day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, defmt::Format)]
pub enum AlarmStatus {
    #[default]
    Waiting,
    Playing,
    Stopped,
}

/// The configured trigger time. The alarm fires when the effective time's
/// hour and minute both match, once per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub struct AlarmSchedule {
    pub hour: u8,
    pub minute: u8,
}

/// What the tick loop should tell the playback device this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum PlayerAction {
    None,
    Start,
    Stop,
}

/// The alarm state machine: schedule plus current status.
#[derive(Debug, Clone, Copy)]
pub struct Alarm {
    schedule: AlarmSchedule,
    status: AlarmStatus,
}

impl Alarm {
    #[must_use]
    pub const fn new(schedule: AlarmSchedule) -> Self {
        Self {
            schedule,
            status: AlarmStatus::Waiting,
        }
    }

    #[must_use]
    pub const fn status(&self) -> AlarmStatus {
        self.status
    }

    #[must_use]
    pub const fn schedule(&self) -> AlarmSchedule {
        self.schedule
    }

    /// Advance the state machine by one tick.
    ///
    /// * Outside the trigger minute, or with the alarm disabled, the status is
    ///   forced back to `Waiting`, which cancels an in-flight occurrence the
    ///   moment the minute ends and re-arms for the next day.
    /// * Entering the trigger minute while `Waiting` starts playback.
    /// * While `Playing`, an idle player is restarted, so a finite clip loops
    ///   for the whole minute. The restart is keyed off `player_active`
    ///   alone, never off the flash phase, so a playback failure can't hide
    ///   behind a blinking display.
    /// * While `Waiting` or `Stopped`, an active player is stopped.
    pub fn on_tick(
        &mut self,
        now: TimeOfDay,
        enabled: bool,
        player_active: bool,
    ) -> PlayerAction {
        let in_trigger_minute =
            now.hour() == self.schedule.hour && now.minute() == self.schedule.minute;

        if !enabled || !in_trigger_minute {
            self.status = AlarmStatus::Waiting;
        } else if self.status == AlarmStatus::Waiting {
            self.status = AlarmStatus::Playing;
            return PlayerAction::Start;
        }

        match self.status {
            AlarmStatus::Playing if !player_active => PlayerAction::Start,
            AlarmStatus::Waiting | AlarmStatus::Stopped if player_active => PlayerAction::Stop,
            _ => PlayerAction::None,
        }
    }

    /// Handle a button press: silences a sounding alarm for the remainder of
    /// this occurrence. Returns whether anything was silenced. Callers update
    /// their last-button-press timestamp regardless of the return value.
    pub fn on_button(&mut self) -> bool {
        if self.status == AlarmStatus::Playing {
            self.status = AlarmStatus::Stopped;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEDULE: AlarmSchedule = AlarmSchedule {
        hour: 7,
        minute: 15,
    };

    fn alarm() -> Alarm {
        Alarm::new(SCHEDULE)
    }

    #[test]
    fn waiting_outside_trigger_minute() {
        let mut alarm = alarm();
        for (hour, minute) in [(0, 0), (7, 14), (7, 16), (8, 15), (23, 59)] {
            let action = alarm.on_tick(TimeOfDay::new(hour, minute, 0), true, false);
            assert_eq!(alarm.status(), AlarmStatus::Waiting);
            assert_eq!(action, PlayerAction::None);
        }
    }

    #[test]
    fn trigger_minute_starts_playback_once() {
        let mut alarm = alarm();
        let trigger = TimeOfDay::new(7, 15, 0);

        assert_eq!(alarm.on_tick(trigger, true, false), PlayerAction::Start);
        assert_eq!(alarm.status(), AlarmStatus::Playing);

        // Re-evaluated every 100 ms while the player reports active:
        // no second start command.
        for tenths in 1..600 {
            let now = TimeOfDay::new(7, 15, (tenths / 10) as u8);
            assert_eq!(alarm.on_tick(now, true, true), PlayerAction::None);
            assert_eq!(alarm.status(), AlarmStatus::Playing);
        }
    }

    #[test]
    fn idle_player_is_restarted_while_playing() {
        let mut alarm = alarm();
        assert_eq!(
            alarm.on_tick(TimeOfDay::new(7, 15, 0), true, false),
            PlayerAction::Start
        );
        // The clip ran out; the next tick restarts it.
        assert_eq!(
            alarm.on_tick(TimeOfDay::new(7, 15, 30), true, false),
            PlayerAction::Start
        );
        assert_eq!(alarm.status(), AlarmStatus::Playing);
    }

    #[test]
    fn button_stops_playing_alarm() {
        let mut alarm = alarm();
        alarm.on_tick(TimeOfDay::new(7, 15, 0), true, false);
        assert!(alarm.on_button());
        assert_eq!(alarm.status(), AlarmStatus::Stopped);

        // Still inside the trigger minute: the player is told to stop and the
        // alarm must not fire again.
        assert_eq!(
            alarm.on_tick(TimeOfDay::new(7, 15, 10), true, true),
            PlayerAction::Stop
        );
        assert_eq!(
            alarm.on_tick(TimeOfDay::new(7, 15, 20), true, false),
            PlayerAction::None
        );
        assert_eq!(alarm.status(), AlarmStatus::Stopped);
    }

    #[test]
    fn button_is_noop_when_not_playing() {
        let mut alarm = alarm();
        assert!(!alarm.on_button());
        assert_eq!(alarm.status(), AlarmStatus::Waiting);

        alarm.on_tick(TimeOfDay::new(7, 15, 0), true, false);
        alarm.on_button();
        assert!(!alarm.on_button());
        assert_eq!(alarm.status(), AlarmStatus::Stopped);
    }

    #[test]
    fn disable_while_playing_forces_waiting_and_stop() {
        let mut alarm = alarm();
        alarm.on_tick(TimeOfDay::new(7, 15, 0), true, false);
        assert_eq!(alarm.status(), AlarmStatus::Playing);

        // The enabled flag was flipped off (e.g. over HTTP) mid-occurrence.
        assert_eq!(
            alarm.on_tick(TimeOfDay::new(7, 15, 30), false, true),
            PlayerAction::Stop
        );
        assert_eq!(alarm.status(), AlarmStatus::Waiting);
    }

    #[test]
    fn minute_end_rearms_for_next_day() {
        let mut alarm = alarm();
        alarm.on_tick(TimeOfDay::new(7, 15, 0), true, false);
        alarm.on_button();

        // Minute over: status returns to Waiting...
        alarm.on_tick(TimeOfDay::new(7, 16, 0), true, false);
        assert_eq!(alarm.status(), AlarmStatus::Waiting);

        // ...and the next day's trigger minute fires again.
        assert_eq!(
            alarm.on_tick(TimeOfDay::new(7, 15, 0), true, false),
            PlayerAction::Start
        );
    }
}
