//! Driver for the 17x7 LED matrix (an IS31FL3731 LED driver chip on I2C).
//!
//! The chip keeps two full frame banks; [`Matrix::show`] writes the 144 PWM
//! registers of the hidden bank and then flips the display pointer, so a
//! partially written frame is never visible. The tick loop calls `show`
//! directly, so display updates happen synchronously with the decision that
//! produced them.

use embassy_rp::Peri;
use embassy_rp::i2c::{self, Config as I2cConfig, Instance as I2cInstance};
use embassy_time::Timer;

use crate::Result;
use crate::screen::{Frame, HEIGHT, WIDTH};

/// Fixed I2C address of the LED driver chip.
const MATRIX_ADDRESS: u8 = 0x74;

/// Bank-select register (present in every bank).
const BANK_SELECT: u8 = 0xFD;
/// The function-register bank.
const CONFIG_BANK: u8 = 0x0B;

// Registers within the function bank.
const MODE_REGISTER: u8 = 0x00;
const FRAME_REGISTER: u8 = 0x01;
const AUDIOSYNC_REGISTER: u8 = 0x06;
const SHUTDOWN_REGISTER: u8 = 0x0A;

/// Static-picture display mode.
const PICTURE_MODE: u8 = 0x00;

// Register blocks within each frame bank.
const ENABLE_OFFSET: u8 = 0x00;
const BLINK_OFFSET: u8 = 0x12;
const PWM_OFFSET: u8 = 0x24;

/// LED on/off control registers per frame bank.
const CONTROL_REGISTER_COUNT: usize = 18;
/// PWM registers per frame bank.
const PWM_REGISTER_COUNT: usize = 144;

/// The 17x7 matrix device.
pub struct Matrix<'d, T: I2cInstance> {
    i2c: i2c::I2c<'d, T, i2c::Blocking>,
    displayed_frame: u8,
}

impl<'d, T: I2cInstance> Matrix<'d, T> {
    /// Bring up the panel: leave shutdown, select picture mode, enable every
    /// LED, and darken both frame banks.
    ///
    /// # Errors
    ///
    /// Any I2C failure here is a hardware-initialization failure and should
    /// abort startup.
    pub async fn new(
        i2c_peripheral: Peri<'d, T>,
        scl: Peri<'d, impl i2c::SclPin<T>>,
        sda: Peri<'d, impl i2c::SdaPin<T>>,
    ) -> Result<Self> {
        let i2c = i2c::I2c::new_blocking(i2c_peripheral, scl, sda, I2cConfig::default());
        let mut matrix = Self {
            i2c,
            displayed_frame: 0,
        };
        matrix.init().await?;
        Ok(matrix)
    }

    async fn init(&mut self) -> Result<()> {
        self.select_bank(CONFIG_BANK)?;
        self.write_register(SHUTDOWN_REGISTER, 0x00)?;
        Timer::after_millis(10).await;
        self.write_register(SHUTDOWN_REGISTER, 0x01)?;
        Timer::after_millis(10).await;

        self.write_register(MODE_REGISTER, PICTURE_MODE)?;
        self.write_register(AUDIOSYNC_REGISTER, 0x00)?;

        for frame in 0..2 {
            self.select_bank(frame)?;

            let mut enable = [0xFF; CONTROL_REGISTER_COUNT + 1];
            enable[0] = ENABLE_OFFSET;
            self.i2c.blocking_write(MATRIX_ADDRESS, &enable)?;

            let mut blink = [0x00; CONTROL_REGISTER_COUNT + 1];
            blink[0] = BLINK_OFFSET;
            self.i2c.blocking_write(MATRIX_ADDRESS, &blink)?;

            let mut pwm = [0x00; PWM_REGISTER_COUNT + 1];
            pwm[0] = PWM_OFFSET;
            self.i2c.blocking_write(MATRIX_ADDRESS, &pwm)?;
        }

        self.select_bank(CONFIG_BANK)?;
        self.write_register(FRAME_REGISTER, 0)?;
        Ok(())
    }

    /// Push a frame to the panel: fill the hidden bank, then flip to it.
    ///
    /// # Errors
    ///
    /// I2C transfer failures propagate; the tick loop treats them as fatal.
    pub fn show(&mut self, frame: &Frame) -> Result<()> {
        let back_frame = self.displayed_frame ^ 1;
        self.select_bank(back_frame)?;

        let mut pwm = [0x00; PWM_REGISTER_COUNT + 1];
        pwm[0] = PWM_OFFSET;
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                if let Some(slot) = pwm.get_mut(1 + pixel_addr(x, y)) {
                    *slot = frame.get(x, y);
                }
            }
        }
        self.i2c.blocking_write(MATRIX_ADDRESS, &pwm)?;

        self.select_bank(CONFIG_BANK)?;
        self.write_register(FRAME_REGISTER, back_frame)?;
        self.displayed_frame = back_frame;
        Ok(())
    }

    fn select_bank(&mut self, bank: u8) -> Result<()> {
        self.i2c.blocking_write(MATRIX_ADDRESS, &[BANK_SELECT, bank])?;
        Ok(())
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<()> {
        self.i2c.blocking_write(MATRIX_ADDRESS, &[register, value])?;
        Ok(())
    }
}

/// Map a panel coordinate to its PWM register offset. The panel is wired as
/// two electrical halves of the chip's 16-column register file.
#[expect(
    clippy::arithmetic_side_effects,
    reason = "x < 17 and y < 7 keep every term in range"
)]
const fn pixel_addr(x: usize, y: usize) -> usize {
    if x <= 8 {
        (8 - x) * 16 + (6 - y)
    } else {
        (x - 8) * 16 + 8 + y
    }
}
