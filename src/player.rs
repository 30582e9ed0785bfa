//! Alarm sound playback on a piezo buzzer.
//!
//! The device task owns a hardware PWM slice and plays a finite clip of
//! square-wave notes on request; a cross-task flag reports whether a clip is
//! currently sounding. The clip deliberately runs out on its own; the alarm
//! state machine notices the idle player and restarts it, which is what
//! loops the sound for the whole trigger minute.

use defmt::info;
use embassy_executor::Spawner;
use embassy_futures::select::{Either, select};
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::Timer;
use portable_atomic::{AtomicBool, Ordering};

use crate::Result;

/// (frequency in Hz, duration in ms); frequency 0 is a rest.
type Note = (u16, u16);

/// Three short beeps, a breath, then three higher beeps. About 2.5 seconds.
const ALARM_CLIP: &[Note] = &[
    (880, 150),
    (0, 80),
    (880, 150),
    (0, 80),
    (880, 150),
    (0, 350),
    (1175, 150),
    (0, 80),
    (1175, 150),
    (0, 80),
    (1175, 150),
    (0, 350),
];

/// Commands accepted by the playback task. Both are idempotent: `Play` while
/// sounding and `Stop` while idle are no-ops.
#[derive(Debug, Clone, Copy, defmt::Format)]
pub enum PlayerCommand {
    Play,
    Stop,
}

type PlayerCommands = Channel<CriticalSectionRawMutex, PlayerCommand, 4>;

/// Resources backing a [`Player`]; assign to a `static`.
pub struct PlayerStatic {
    commands: PlayerCommands,
    active: AtomicBool,
}

/// Handle to the playback device.
pub struct Player {
    commands: &'static PlayerCommands,
    active: &'static AtomicBool,
}

impl Player {
    /// Create player resources.
    #[must_use]
    pub const fn new_static() -> PlayerStatic {
        PlayerStatic {
            commands: Channel::new(),
            active: AtomicBool::new(false),
        }
    }

    /// Create the device and spawn its task. The caller provides the PWM
    /// output wired to the buzzer, e.g.
    /// `Pwm::new_output_a(p.PWM_SLICE0, p.PIN_16, Config::default())`.
    ///
    /// # Errors
    ///
    /// Returns an error if the task cannot be spawned.
    pub fn new(
        player_static: &'static PlayerStatic,
        pwm: Pwm<'static>,
        spawner: Spawner,
    ) -> Result<Self> {
        let token = device_loop(pwm, player_static)?;
        spawner.spawn(token);
        Ok(Self {
            commands: &player_static.commands,
            active: &player_static.active,
        })
    }

    /// Start the clip from the top.
    pub async fn play(&self) {
        self.commands.send(PlayerCommand::Play).await;
    }

    /// Silence any clip in flight.
    pub async fn stop(&self) {
        self.commands.send(PlayerCommand::Stop).await;
    }

    /// Whether a clip is currently sounding.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }
}

#[embassy_executor::task]
async fn device_loop(mut pwm: Pwm<'static>, player_static: &'static PlayerStatic) -> ! {
    // 1 µs PWM ticks, clock-independent: divider = clk_sys / 1 MHz.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::integer_division_remainder_used,
        reason = "clamp keeps the divider in u8 range"
    )]
    let divider = (u64::from(clk_sys_freq()) / 1_000_000).clamp(1, 255) as u8;
    let mut config = PwmConfig::default();
    config.divider = divider.into();
    config.phase_correct = false;
    config.enable = true;

    loop {
        if !matches!(
            player_static.commands.receive().await,
            PlayerCommand::Play
        ) {
            continue;
        }

        player_static.active.store(true, Ordering::Relaxed);
        info!("Player clip started");
        let stopped = play_clip(&mut pwm, &mut config, &player_static.commands).await;
        set_tone(&mut pwm, &mut config, 0);
        player_static.active.store(false, Ordering::Relaxed);
        if stopped {
            info!("Player clip stopped");
        } else {
            info!("Player clip finished");
        }
    }
}

/// Play the clip through once. Returns true if a `Stop` cut it short.
async fn play_clip(
    pwm: &mut Pwm<'static>,
    config: &mut PwmConfig,
    commands: &'static PlayerCommands,
) -> bool {
    for &(frequency, duration_ms) in ALARM_CLIP {
        set_tone(pwm, config, frequency);
        match select(Timer::after_millis(u64::from(duration_ms)), commands.receive()).await {
            Either::First(()) => {}
            Either::Second(PlayerCommand::Stop) => return true,
            // Already sounding; keep going.
            Either::Second(PlayerCommand::Play) => {}
        }
    }
    false
}

/// Reprogram the slice for a note; frequency 0 silences the output.
/// Only the stored config is mutated, so the divider survives.
#[expect(
    clippy::cast_possible_truncation,
    clippy::integer_division_remainder_used,
    reason = "1_000_000 / frequency fits u16 for audible frequencies"
)]
fn set_tone(pwm: &mut Pwm<'static>, config: &mut PwmConfig, frequency: u16) {
    if frequency == 0 {
        config.compare_a = 0;
    } else {
        let top = (1_000_000 / u32::from(frequency)).saturating_sub(1).min(u32::from(u16::MAX)) as u16;
        config.top = top;
        config.compare_a = top / 2;
    }
    pwm.set_config(config);
}
