//! The single polling loop that ties the clock, alarm, button, player, and
//! display together, ticking roughly ten times per second.
//!
//! Each tick: drain queued button presses, advance the alarm state machine,
//! forward its (idempotent) player command, decide visibility, and push one
//! composed frame to the panel. Time-sync events interleave with the tick
//! timer and re-anchor the clock as they arrive. The historical variants of
//! this clock only ever differed in the values fed to this function.

use core::convert::Infallible;

use defmt::info;
use embassy_futures::select::{Either, select};
use embassy_time::{Instant, Timer};

use crate::Result;
use crate::alarm::{Alarm, AlarmSchedule, PlayerAction};
use crate::button::Button;
use crate::clock::Clock;
use crate::display_policy::{DisplayWindow, face_visible};
use crate::matrix::Matrix;
use crate::player::Player;
use crate::screen::compose;
use crate::settings::AlarmSettings;
use crate::shared_constants::TICK_PERIOD;
use crate::time_sync::{TimeSync, TimeSyncEvent};

/// Run the clock forever. Only hardware faults return.
#[expect(
    clippy::integer_division_remainder_used,
    reason = "The 10-second log cadence uses the quotient as a bucket key"
)]
pub async fn run<T: embassy_rp::i2c::Instance>(
    clock: Clock,
    settings: &'static AlarmSettings,
    schedule: AlarmSchedule,
    window: DisplayWindow,
    button: &Button,
    player: &Player,
    matrix: &mut Matrix<'_, T>,
    time_sync: &TimeSync,
) -> Result<Infallible> {
    let mut alarm = Alarm::new(schedule);
    // Defaults to process start, so the display shows on boot.
    let mut last_button_press = Instant::now();
    let mut last_logged_bucket = u32::MAX;

    loop {
        while let Some(pressed_at) = button.try_next() {
            last_button_press = pressed_at;
            if alarm.on_button() {
                info!("Button press stopping alarm");
            }
        }

        let now = clock.now_local();

        match alarm.on_tick(now, settings.is_enabled(), player.is_playing()) {
            PlayerAction::Start => {
                info!("Begin alarm playback");
                player.play().await;
            }
            PlayerAction::Stop => {
                info!("Stopping alarm playback");
                player.stop().await;
            }
            PlayerAction::None => {}
        }

        let visible = face_visible(now, alarm.status(), last_button_press.elapsed(), &window);
        let frame = compose(now, alarm.status(), settings.is_enabled(), visible);
        matrix.show(&frame)?;

        let log_bucket = now.seconds_of_day() / 10;
        if log_bucket != last_logged_bucket {
            last_logged_bucket = log_bucket;
            info!(
                "Clock time is {:02}:{:02}:{:02}",
                now.hour(),
                now.minute(),
                now.second()
            );
        }

        match select(Timer::after(TICK_PERIOD), time_sync.wait()).await {
            Either::First(()) => {}
            Either::Second(TimeSyncEvent::Success { unix_seconds }) => {
                info!("Time sync success: {}", unix_seconds.as_i64());
                clock.set_from_unix(unix_seconds);
            }
            Either::Second(TimeSyncEvent::Failed(message)) => {
                info!("Time sync failed: {}. Will keep trying", message);
            }
        }
    }
}
