//! The standalone alarm clock: 17x7 matrix, piezo buzzer, one button.
//!
//! The clock seeds itself from the build timestamp, so it reads correctly
//! right after flashing. Set `CLOCK_HOUR`/`CLOCK_MINUTE`/`CLOCK_SECOND` in
//! the build environment to pin the startup time for testing, e.g.
//! `CLOCK_HOUR=7 CLOCK_MINUTE=14 cargo run --bin alarm_clock`.
//!
//! Wiring: button on GPIO13 (pressed to 3V3), buzzer on GPIO16, matrix on
//! I2C0 (SDA GPIO4, SCL GPIO5).

#![no_std]
#![no_main]
#![allow(clippy::future_not_send, reason = "single-threaded")]

use core::convert::Infallible;

use alarmclock::button::{Button, ButtonStatic};
use alarmclock::matrix::Matrix;
use alarmclock::player::{Player, PlayerStatic};
use alarmclock::shared_constants::{ALARM_SCHEDULE, DISPLAY_WINDOW};
use alarmclock::time_sync::{TimeSync, TimeSyncStatic};
use alarmclock::{AlarmSettings, Clock, ClockStatic, Result, TimeOverride, tick};
use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use panic_probe as _;

#[embassy_executor::main]
pub async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    core::panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Infallible> {
    info!("Starting alarm clock");
    let p = embassy_rp::init(Default::default());

    static SETTINGS: AlarmSettings = AlarmSettings::new(true);

    static CLOCK_STATIC: ClockStatic = Clock::new_static();
    let utc_offset_minutes = env!("UTC_OFFSET_MINUTES").parse().unwrap_or(0);
    let clock = Clock::new(
        &CLOCK_STATIC,
        utc_offset_minutes,
        TimeOverride::from_build_env(),
    );

    static BUTTON_STATIC: ButtonStatic = Button::new_static();
    let button = Button::new(&BUTTON_STATIC, Input::new(p.PIN_13, Pull::Down), spawner)?;

    static PLAYER_STATIC: PlayerStatic = Player::new_static();
    let player = Player::new(
        &PLAYER_STATIC,
        Pwm::new_output_a(p.PWM_SLICE0, p.PIN_16, PwmConfig::default()),
        spawner,
    )?;

    let mut matrix = Matrix::new(p.I2C0, p.PIN_5, p.PIN_4).await?;

    // No networking in this build: the stub never produces sync events.
    static TIME_SYNC_STATIC: TimeSyncStatic = TimeSync::new_static();
    let time_sync = TimeSync::new(&TIME_SYNC_STATIC);

    tick::run(
        clock,
        &SETTINGS,
        ALARM_SCHEDULE,
        DISPLAY_WINDOW,
        &button,
        &player,
        &mut matrix,
        &time_sync,
    )
    .await
}
