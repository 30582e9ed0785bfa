//! The connected alarm clock: everything the standalone build does, plus
//! NTP time synchronization and the HTTP status endpoint.
//!
//! Network credentials come from `WIFI_SSID`/`WIFI_PASS` in the build
//! environment (see `build.rs`). The status endpoint answers on port 80:
//! `GET /api/time`, `GET /api/alarm_time`, `GET /api/alarm_enabled`, and
//! `POST /api/alarm_enabled` with form field `alarm_onoff=ON|OFF`.

#![no_std]
#![no_main]
#![allow(clippy::future_not_send, reason = "single-threaded")]

use core::convert::Infallible;

use alarmclock::button::{Button, ButtonStatic};
use alarmclock::matrix::Matrix;
use alarmclock::player::{Player, PlayerStatic};
use alarmclock::shared_constants::{ALARM_SCHEDULE, DISPLAY_WINDOW};
use alarmclock::time_sync::{TimeSync, TimeSyncStatic};
use alarmclock::{AlarmSettings, Clock, ClockStatic, Result, TimeOverride, status_server, tick, wifi};
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
    info!("Starting alarm clock (WiFi build)");
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

    // Bring up WiFi before entering the loop; the display-side clock keeps
    // its build-time seed until the first sync lands.
    let stack = wifi::connect(
        p.PIN_23,  // CYW43 power
        p.PIN_25,  // CYW43 chip select
        p.PIO0,    // CYW43 PIO interface
        p.PIN_24,  // CYW43 data (DIO)
        p.PIN_29,  // CYW43 clock
        p.DMA_CH0, // CYW43 DMA channels
        p.DMA_CH1,
        spawner,
    )
    .await?;

    static TIME_SYNC_STATIC: TimeSyncStatic = TimeSync::new_static();
    let time_sync = TimeSync::new(&TIME_SYNC_STATIC, stack, spawner)?;

    status_server::start(stack, clock, &SETTINGS, ALARM_SCHEDULE, spawner)?;

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
