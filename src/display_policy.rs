//! Decides whether the clock face should currently be shown.
//!
//! Pure functions of the effective time, the alarm status, and the time since
//! the last button press. The actual pixel work lives in [`crate::screen`].

use embassy_time::Duration;

use crate::alarm::AlarmStatus;
use crate::shared_constants::DISPLAY_HOLD;
use crate::time_of_day::TimeOfDay;

/// The daily hours during which the face is always shown.
/// The window must not wrap midnight: `on_hour < off_hour`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub struct DisplayWindow {
    pub on_hour: u8,
    pub off_hour: u8,
}

impl DisplayWindow {
    /// Whether `hour` falls inside `[on_hour, off_hour)`.
    #[must_use]
    pub const fn contains(&self, hour: u8) -> bool {
        self.on_hour <= hour && hour < self.off_hour
    }
}

/// Whether the clock face is visible this tick.
///
/// Visible when any of these holds:
/// * the current hour is inside the on-window,
/// * the alarm is sounding,
/// * a button was pressed within the last [`DISPLAY_HOLD`] (inclusive).
#[must_use]
pub fn face_visible(
    now: TimeOfDay,
    status: AlarmStatus,
    since_press: Duration,
    window: &DisplayWindow,
) -> bool {
    window.contains(now.hour()) || status == AlarmStatus::Playing || since_press <= DISPLAY_HOLD
}

/// Whether the flash bar is lit this tick: a 1 Hz duty cycle keyed off the
/// second's parity, only while the alarm is sounding. Purely cosmetic; the
/// playback restart in [`crate::alarm`] does not consult this.
#[expect(
    clippy::integer_division_remainder_used,
    reason = "The parity check is the 1 Hz duty cycle"
)]
#[must_use]
pub const fn flash_lit(status: AlarmStatus, now: TimeOfDay) -> bool {
    matches!(status, AlarmStatus::Playing) && now.second() % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: DisplayWindow = DisplayWindow {
        on_hour: 7,
        off_hour: 21,
    };

    #[test]
    fn window_boundaries() {
        assert!(!WINDOW.contains(6));
        assert!(WINDOW.contains(7));
        assert!(WINDOW.contains(20));
        assert!(!WINDOW.contains(21));
    }

    #[test]
    fn visible_inside_window_even_without_presses() {
        let noon = TimeOfDay::new(12, 0, 0);
        let long_ago = Duration::from_secs(60 * 60);
        assert!(face_visible(noon, AlarmStatus::Waiting, long_ago, &WINDOW));
    }

    #[test]
    fn hidden_at_night_without_presses() {
        let late = TimeOfDay::new(22, 0, 0);
        let long_ago = Duration::from_secs(60 * 60);
        assert!(!face_visible(late, AlarmStatus::Waiting, long_ago, &WINDOW));
        assert!(!face_visible(late, AlarmStatus::Stopped, long_ago, &WINDOW));
    }

    #[test]
    fn playing_overrides_the_window() {
        let late = TimeOfDay::new(23, 0, 0);
        let long_ago = Duration::from_secs(60 * 60);
        assert!(face_visible(late, AlarmStatus::Playing, long_ago, &WINDOW));
    }

    #[test]
    fn button_hold_boundary_is_inclusive() {
        let late = TimeOfDay::new(22, 0, 0);
        let exactly = Duration::from_micros(5_000_000);
        let just_over = Duration::from_micros(5_000_100);
        assert!(face_visible(late, AlarmStatus::Waiting, exactly, &WINDOW));
        assert!(!face_visible(late, AlarmStatus::Waiting, just_over, &WINDOW));
    }

    #[test]
    fn flash_follows_second_parity_while_playing() {
        assert!(flash_lit(AlarmStatus::Playing, TimeOfDay::new(7, 15, 0)));
        assert!(!flash_lit(AlarmStatus::Playing, TimeOfDay::new(7, 15, 1)));
        assert!(flash_lit(AlarmStatus::Playing, TimeOfDay::new(7, 15, 2)));
        assert!(!flash_lit(AlarmStatus::Waiting, TimeOfDay::new(7, 15, 0)));
        assert!(!flash_lit(AlarmStatus::Stopped, TimeOfDay::new(7, 15, 0)));
    }
}
