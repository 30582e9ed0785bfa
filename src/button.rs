//! The one physical button, as a device task feeding a press queue.
//!
//! The GPIO edge fires on the button task's execution context while the tick
//! loop runs on its own, so presses are marshalled through a bounded
//! single-consumer channel: the task timestamps each rising edge and the
//! tick loop drains the queue in arrival order. Debounce is handled here,
//! at the driver level: edges within [`BUTTON_DEBOUNCE`] of a press are
//! never observed.

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_rp::gpio::Input;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Instant, Timer};

use crate::Result;
use crate::shared_constants::BUTTON_DEBOUNCE;

/// Queue of press timestamps, oldest first.
type ButtonPresses = Channel<CriticalSectionRawMutex, Instant, 8>;

/// Resources backing a [`Button`]; assign to a `static`.
pub struct ButtonStatic {
    presses: ButtonPresses,
}

/// Handle to the button press queue.
pub struct Button {
    presses: &'static ButtonPresses,
}

impl Button {
    /// Create button resources.
    #[must_use]
    pub const fn new_static() -> ButtonStatic {
        ButtonStatic {
            presses: Channel::new(),
        }
    }

    /// Create the device and spawn its task. The caller wires the pin
    /// (pull-down, pressed-to-3V3) and hands over the `Input`.
    ///
    /// # Errors
    ///
    /// Returns an error if the task cannot be spawned.
    pub fn new(
        button_static: &'static ButtonStatic,
        input: Input<'static>,
        spawner: Spawner,
    ) -> Result<Self> {
        let token = device_loop(input, &button_static.presses)?;
        spawner.spawn(token);
        Ok(Self {
            presses: &button_static.presses,
        })
    }

    /// Pop the oldest pending press, if any. Never blocks; the tick loop
    /// calls this until empty at the top of every tick.
    #[must_use]
    pub fn try_next(&self) -> Option<Instant> {
        self.presses.try_receive().ok()
    }
}

#[embassy_executor::task]
async fn device_loop(mut input: Input<'static>, presses: &'static ButtonPresses) -> ! {
    loop {
        input.wait_for_rising_edge().await;
        let pressed_at = Instant::now();
        info!("Button pressed");
        if presses.try_send(pressed_at).is_err() {
            warn!("Button queue full, press dropped");
        }
        Timer::after(BUTTON_DEBOUNCE).await;
    }
}
