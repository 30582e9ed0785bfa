//! An LED dot-matrix alarm clock for the Raspberry Pi Pico W.
//!
//! The alarm logic (state machine, display-visibility policy, and the
//! clock-offset mechanism used for deterministic testing) is pure code that
//! also builds on the host (`cargo test --no-default-features --features
//! host`). Hardware concerns are small device abstractions: the 17x7 LED
//! matrix, the piezo buzzer, the button queue, and optionally WiFi with NTP
//! sync and an HTTP status endpoint. The runnable clocks live in `demos/`.
#![cfg_attr(not(test), no_std)]

pub mod alarm;
pub mod clock;
pub mod display_policy;
mod error;
pub mod font3x5;
pub mod screen;
pub mod settings;
pub mod shared_constants;
pub mod time_of_day;
pub mod time_sync;
pub mod unix_seconds;

#[cfg(feature = "pico")]
pub mod button;
#[cfg(feature = "pico")]
pub mod matrix;
#[cfg(feature = "pico")]
pub mod player;
#[cfg(feature = "pico")]
pub mod tick;

#[cfg(feature = "wifi")]
pub mod status_server;
#[cfg(feature = "wifi")]
pub mod wifi;

// Re-export commonly used items
pub use alarm::{Alarm, AlarmSchedule, AlarmStatus, PlayerAction};
pub use clock::{Clock, ClockStatic};
pub use display_policy::DisplayWindow;
pub use error::{Error, Result};
pub use screen::Frame;
pub use settings::AlarmSettings;
pub use time_of_day::{TimeOfDay, TimeOverride};
pub use unix_seconds::UnixSeconds;
