//! Unix timestamp type shared by clock seeding and time synchronization.

use defmt::Format;

use crate::time_of_day::SECONDS_IN_ONE_DAY;

/// Units-safe wrapper for Unix timestamps (seconds since 1970-01-01 00:00:00 UTC).
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Format)]
pub struct UnixSeconds(pub i64);

impl UnixSeconds {
    /// Get the underlying i64 value.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }

    /// Convert NTP seconds (since 1900-01-01) to Unix seconds (since 1970-01-01).
    /// Returns `None` for pre-1970 values.
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "The u32 is promoted to i64 before subtracting"
    )]
    #[must_use]
    pub const fn from_ntp_seconds(ntp: u32) -> Option<Self> {
        // 1900 -> 1970 epoch offset in seconds.
        const NTP_TO_UNIX_SECONDS: i64 = 2_208_988_800;
        let seconds = (ntp as i64) - NTP_TO_UNIX_SECONDS;
        if seconds >= 0 { Some(Self(seconds)) } else { None }
    }

    /// Local seconds since midnight after applying a UTC offset in minutes.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::arithmetic_side_effects,
        reason = "rem_euclid bounds the value to 0..SECONDS_IN_ONE_DAY"
    )]
    #[must_use]
    pub const fn local_seconds_of_day(self, utc_offset_minutes: i32) -> u32 {
        let local = self.0 + (utc_offset_minutes as i64) * 60;
        local.rem_euclid(SECONDS_IN_ONE_DAY as i64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ntp_conversion_rejects_pre_epoch() {
        assert_eq!(UnixSeconds::from_ntp_seconds(0), None);
        // 2208988800 is exactly the Unix epoch in NTP seconds.
        assert_eq!(
            UnixSeconds::from_ntp_seconds(2_208_988_800),
            Some(UnixSeconds(0))
        );
    }

    #[test]
    fn local_seconds_applies_offset_and_wraps() {
        // 1970-01-01 00:30:00 UTC.
        let half_past = UnixSeconds(30 * 60);
        assert_eq!(half_past.local_seconds_of_day(0), 30 * 60);
        // UTC-1 pushes it back across midnight.
        assert_eq!(
            half_past.local_seconds_of_day(-60),
            SECONDS_IN_ONE_DAY - 30 * 60
        );
        // UTC+2.
        assert_eq!(half_past.local_seconds_of_day(120), 150 * 60);
    }
}
