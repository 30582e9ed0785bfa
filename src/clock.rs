//! The effective wall clock: monotonic time plus a startup-fixed offset.
//!
//! Unlike most device abstractions in this crate, the clock needs no task of
//! its own; it is a pair of values readable from any task. The offset is
//! seeded from the build timestamp, shifted exactly once by the startup
//! [`TimeOverride`] (for deterministic testing), and re-anchored whenever
//! time synchronization reports. After startup the test offset never
//! re-resolves: the effective time is always `real now + offset`.

use embassy_time::Instant;
use portable_atomic::{AtomicU64, Ordering};

use crate::shared_constants::{ONE_DAY, ONE_SECOND};
use crate::time_of_day::{SECONDS_IN_ONE_DAY, TimeOfDay, TimeOverride};
use crate::unix_seconds::UnixSeconds;

const TICKS_IN_ONE_DAY: u64 = ONE_DAY.as_ticks();

/// Resources backing a [`Clock`]; assign to a `static`.
pub struct ClockStatic {
    offset_ticks: AtomicU64,
}

/// Handle to the shared clock. Copy it freely into other tasks (the HTTP
/// status server reads the time through its own copy).
#[derive(Clone, Copy)]
pub struct Clock {
    offset_ticks: &'static AtomicU64,
    utc_offset_minutes: i32,
}

impl Clock {
    /// Create clock resources.
    #[must_use]
    pub const fn new_static() -> ClockStatic {
        ClockStatic {
            offset_ticks: AtomicU64::new(0),
        }
    }

    /// Create the clock: seed the time of day from the `BUILD_TIME` compile
    /// environment (Unix millis), then merge in the startup overrides,
    /// field by field, overrides winning.
    #[expect(
        clippy::cast_possible_wrap,
        clippy::integer_division_remainder_used,
        reason = "Millis-to-seconds conversion of a build timestamp"
    )]
    #[must_use]
    pub fn new(
        clock_static: &'static ClockStatic,
        utc_offset_minutes: i32,
        overrides: TimeOverride,
    ) -> Self {
        let clock = Self {
            offset_ticks: &clock_static.offset_ticks,
            utc_offset_minutes,
        };

        let build_unix_millis = option_env!("BUILD_TIME")
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(0);
        let seed = UnixSeconds((build_unix_millis / 1000) as i64);
        clock.set_seconds_of_day(seed.local_seconds_of_day(utc_offset_minutes));

        // The one-time override merge; the resulting offset is frozen for
        // the rest of the process.
        let synthetic = overrides.coalesce(clock.now_local());
        clock.set_seconds_of_day(synthetic.seconds_of_day());

        clock
    }

    /// The current effective time of day.
    #[must_use]
    pub fn now_local(&self) -> TimeOfDay {
        TimeOfDay::from_seconds_of_day(self.seconds_of_day())
    }

    /// Re-anchor the clock to a synchronized timestamp, applying the
    /// configured UTC offset. Safe to call from any task.
    pub fn set_from_unix(&self, unix_seconds: UnixSeconds) {
        self.set_seconds_of_day(unix_seconds.local_seconds_of_day(self.utc_offset_minutes));
    }

    #[expect(
        clippy::cast_possible_truncation,
        clippy::integer_division_remainder_used,
        clippy::arithmetic_side_effects,
        reason = "All tick values are reduced modulo one day first"
    )]
    fn seconds_of_day(&self) -> u32 {
        let ticks = (Instant::now().as_ticks() % TICKS_IN_ONE_DAY
            + self.offset_ticks.load(Ordering::Relaxed))
            % TICKS_IN_ONE_DAY;
        (ticks / ONE_SECOND.as_ticks()) as u32
    }

    #[expect(
        clippy::integer_division_remainder_used,
        clippy::arithmetic_side_effects,
        reason = "All tick values are reduced modulo one day first"
    )]
    fn set_seconds_of_day(&self, seconds: u32) {
        let target_ticks = u64::from(seconds % SECONDS_IN_ONE_DAY) * ONE_SECOND.as_ticks();
        let now_ticks = Instant::now().as_ticks() % TICKS_IN_ONE_DAY;
        let offset_ticks = (target_ticks + TICKS_IN_ONE_DAY - now_ticks) % TICKS_IN_ONE_DAY;
        self.offset_ticks.store(offset_ticks, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The assertions below read the clock back immediately after setting it,
    // so at worst the second field has advanced by one.
    fn assert_close(actual: TimeOfDay, expected: TimeOfDay) {
        let drift = expected.forward_seconds_until(&actual);
        assert!(drift <= 1, "expected ~{expected:?}, read {actual:?}");
    }

    #[test]
    fn set_from_unix_round_trips() {
        static CLOCK_STATIC: ClockStatic = Clock::new_static();
        let clock = Clock::new(&CLOCK_STATIC, 0, TimeOverride::NONE);

        // 1970-01-02 12:30:30 UTC.
        clock.set_from_unix(UnixSeconds(86_400 + 12 * 3600 + 30 * 60 + 30));
        assert_close(clock.now_local(), TimeOfDay::new(12, 30, 30));
    }

    #[test]
    fn utc_offset_shifts_local_time() {
        static CLOCK_STATIC: ClockStatic = Clock::new_static();
        let clock = Clock::new(&CLOCK_STATIC, -8 * 60, TimeOverride::NONE);

        // Midnight UTC reads as 16:00 the previous day at UTC-8.
        clock.set_from_unix(UnixSeconds(86_400));
        assert_close(clock.now_local(), TimeOfDay::new(16, 0, 0));
    }

    #[test]
    fn override_shifts_only_named_fields() {
        static BASE_STATIC: ClockStatic = Clock::new_static();
        let base = Clock::new(&BASE_STATIC, 0, TimeOverride::NONE);

        static OVERRIDDEN_STATIC: ClockStatic = Clock::new_static();
        let overridden = Clock::new(
            &OVERRIDDEN_STATIC,
            0,
            TimeOverride {
                hour: Some(7),
                minute: None,
                second: None,
            },
        );

        // Both clocks seeded from the same BUILD_TIME: the hour moved, the
        // position within the hour did not.
        let base_now = base.now_local();
        let over_now = overridden.now_local();
        assert_eq!(over_now.hour(), 7);
        let base_in_hour = base_now.seconds_of_day() % 3600;
        let over_in_hour = over_now.seconds_of_day() % 3600;
        assert!((over_in_hour + 3600 - base_in_hour) % 3600 <= 1);
    }
}
