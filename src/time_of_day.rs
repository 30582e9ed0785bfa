//! Time-of-day arithmetic shared by the clock, the alarm, and the display.
//!
//! Everything here is plain integer math so it can be unit-tested on the host.

/// Number of seconds in one day.
pub const SECONDS_IN_ONE_DAY: u32 = 24 * 60 * 60;

/// A wall-clock time of day, seconds resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// Create a time of day. Fields must already be in range.
    #[must_use]
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        debug_assert!(hour < 24 && minute < 60 && second < 60);
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Convert seconds-since-midnight into hour/minute/second.
    /// Values of a day or more wrap around.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::integer_division_remainder_used,
        clippy::arithmetic_side_effects,
        reason = "Modulo keeps every intermediate below its type bound"
    )]
    #[must_use]
    pub const fn from_seconds_of_day(seconds: u32) -> Self {
        let seconds = seconds % SECONDS_IN_ONE_DAY;
        Self {
            hour: (seconds / 3600) as u8,
            minute: ((seconds % 3600) / 60) as u8,
            second: (seconds % 60) as u8,
        }
    }

    /// Seconds since midnight.
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "Bounded fields cannot overflow u32"
    )]
    #[must_use]
    pub const fn seconds_of_day(&self) -> u32 {
        self.hour as u32 * 3600 + self.minute as u32 * 60 + self.second as u32
    }

    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    #[must_use]
    pub const fn second(&self) -> u8 {
        self.second
    }

    /// The hour on a 12-hour clock face: 0 -> 12, 13 -> 1, 12 -> 12.
    #[expect(
        clippy::integer_division_remainder_used,
        clippy::arithmetic_side_effects,
        reason = "hour < 24, so hour + 11 cannot overflow u8"
    )]
    #[must_use]
    pub const fn display_hour_12(&self) -> u8 {
        (self.hour + 11) % 12 + 1
    }

    /// Seconds from `self` forward (wrapping past midnight) until `other`.
    #[expect(
        clippy::integer_division_remainder_used,
        clippy::arithmetic_side_effects,
        reason = "Both operands are below SECONDS_IN_ONE_DAY"
    )]
    #[must_use]
    pub const fn forward_seconds_until(&self, other: &Self) -> u32 {
        (other.seconds_of_day() + SECONDS_IN_ONE_DAY - self.seconds_of_day()) % SECONDS_IN_ONE_DAY
    }
}

/// Optional hour/minute/second overrides applied once at startup, for
/// deterministic testing of time-of-day behavior. Unset fields keep the
/// real clock's value.
#[derive(Debug, Clone, Copy, Default, defmt::Format)]
pub struct TimeOverride {
    pub hour: Option<u8>,
    pub minute: Option<u8>,
    pub second: Option<u8>,
}

impl TimeOverride {
    /// No overrides; the clock runs on real time.
    pub const NONE: Self = Self {
        hour: None,
        minute: None,
        second: None,
    };

    /// Read overrides injected at compile time (`CLOCK_HOUR`, `CLOCK_MINUTE`,
    /// `CLOCK_SECOND`), the firmware counterpart of command-line flags.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self {
            hour: option_env!("CLOCK_HOUR").and_then(|value| value.parse().ok()),
            minute: option_env!("CLOCK_MINUTE").and_then(|value| value.parse().ok()),
            second: option_env!("CLOCK_SECOND").and_then(|value| value.parse().ok()),
        }
    }

    /// Merge with the current time, field by field, overrides winning.
    #[must_use]
    pub fn coalesce(&self, now: TimeOfDay) -> TimeOfDay {
        TimeOfDay::new(
            self.hour.unwrap_or(now.hour),
            self.minute.unwrap_or(now.minute),
            self.second.unwrap_or(now.second),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_hour_conversion() {
        assert_eq!(TimeOfDay::new(0, 0, 0).display_hour_12(), 12);
        assert_eq!(TimeOfDay::new(1, 0, 0).display_hour_12(), 1);
        assert_eq!(TimeOfDay::new(12, 0, 0).display_hour_12(), 12);
        assert_eq!(TimeOfDay::new(13, 0, 0).display_hour_12(), 1);
        assert_eq!(TimeOfDay::new(23, 0, 0).display_hour_12(), 11);
    }

    #[test]
    fn seconds_of_day_round_trip() {
        let noon_ish = TimeOfDay::new(12, 34, 56);
        assert_eq!(
            TimeOfDay::from_seconds_of_day(noon_ish.seconds_of_day()),
            noon_ish
        );
        assert_eq!(
            TimeOfDay::from_seconds_of_day(SECONDS_IN_ONE_DAY),
            TimeOfDay::new(0, 0, 0)
        );
    }

    #[test]
    fn coalesce_prefers_override_fields() {
        let now = TimeOfDay::new(10, 0, 0);
        let hour_only = TimeOverride {
            hour: Some(7),
            minute: None,
            second: None,
        };
        assert_eq!(hour_only.coalesce(now), TimeOfDay::new(7, 0, 0));
        assert_eq!(TimeOverride::NONE.coalesce(now), now);
    }

    #[test]
    fn forward_seconds_wraps_past_midnight() {
        let late = TimeOfDay::new(23, 59, 0);
        let early = TimeOfDay::new(0, 1, 0);
        assert_eq!(late.forward_seconds_until(&early), 120);
        assert_eq!(early.forward_seconds_until(&late), SECONDS_IN_ONE_DAY - 120);
        assert_eq!(late.forward_seconds_until(&late), 0);
    }
}
