//! Clock-wide configuration constants. The historical per-revision tweaks of
//! this project all live here now.

use embassy_time::Duration;

use crate::alarm::AlarmSchedule;
use crate::display_policy::DisplayWindow;

/// Duration representing one second.
pub const ONE_SECOND: Duration = Duration::from_secs(1);
/// Duration representing one minute (60 seconds).
pub const ONE_MINUTE: Duration = Duration::from_secs(60);
/// Duration representing one day (24 hours).
pub const ONE_DAY: Duration = Duration::from_secs(60 * 60 * 24);

/// LED brightness for everything we draw (about 0.2 of full scale).
pub const BRIGHTNESS: u8 = 51;

/// The default daily window during which the face is always shown.
pub const DISPLAY_WINDOW: DisplayWindow = DisplayWindow {
    on_hour: 7,
    off_hour: 21,
};

/// The default alarm trigger time.
pub const ALARM_SCHEDULE: AlarmSchedule = AlarmSchedule {
    hour: 7,
    minute: 15,
};

/// How long the face stays visible after a button press (inclusive bound).
pub const DISPLAY_HOLD: Duration = Duration::from_secs(5);

/// Main loop period, roughly 10 evaluations per second.
pub const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Edges within this interval after a press are ignored.
pub const BUTTON_DEBOUNCE: Duration = Duration::from_millis(300);

/// Row occupied by the full-width flash bar while the alarm sounds.
pub const FLASH_ROW: usize = 6;

/// The alarm-enabled indicator pixel, tucked next to the flash bar.
pub const ENABLED_PIXEL: (usize, usize) = (16, 6);
