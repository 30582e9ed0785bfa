//! The 17x7 brightness frame and the per-tick frame composition.
//!
//! A [`Frame`] is plain data: the matrix device flushes it over I2C, and the
//! host tests inspect it directly.

use crate::alarm::AlarmStatus;
use crate::display_policy::flash_lit;
use crate::font3x5::{self, GLYPH_HEIGHT};
use crate::shared_constants::{BRIGHTNESS, ENABLED_PIXEL, FLASH_ROW};
use crate::time_of_day::TimeOfDay;

/// Panel width in pixels.
pub const WIDTH: usize = 17;
/// Panel height in pixels.
pub const HEIGHT: usize = 7;

/// One full panel of 8-bit brightness values, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pixels: [[u8; WIDTH]; HEIGHT],
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame {
    /// An all-dark frame.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pixels: [[0; WIDTH]; HEIGHT],
        }
    }

    /// Darken every pixel.
    pub fn clear(&mut self) {
        self.pixels = [[0; WIDTH]; HEIGHT];
    }

    /// Set a single pixel. Out-of-panel coordinates are clipped silently.
    pub fn set_pixel(&mut self, x: usize, y: usize, brightness: u8) {
        if let Some(row) = self.pixels.get_mut(y) {
            if let Some(pixel) = row.get_mut(x) {
                *pixel = brightness;
            }
        }
    }

    /// Brightness at (`x`, `y`); out-of-panel reads are dark.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.pixels
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(0)
    }

    /// Fill a rectangle. Clipped to the panel.
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "Offsets are clipped by the get_mut bounds checks"
    )]
    pub fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize, brightness: u8) {
        for row_offset in 0..height {
            for column_offset in 0..width {
                self.set_pixel(x + column_offset, y + row_offset, brightness);
            }
        }
    }

    /// Render `text` with the built-in 3x5 font, glyph boxes advancing left
    /// to right with a 1-column gap.
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "Cursor and offsets are clipped by set_pixel"
    )]
    pub fn write_text(&mut self, text: &[char], x: usize, y: usize, brightness: u8) {
        let mut cursor = x;
        for &ch in text {
            let glyph = font3x5::glyph(ch);
            for row in 0..GLYPH_HEIGHT {
                for column in 0..glyph.width() {
                    if glyph.is_set(column, row) {
                        self.set_pixel(cursor + column, y + row, brightness);
                    }
                }
            }
            cursor += glyph.width() + 1;
        }
    }
}

#[inline]
#[expect(
    clippy::integer_division_remainder_used,
    clippy::arithmetic_side_effects,
    reason = "value < 60, so the digit math is safe"
)]
const fn tens_digit(value: u8) -> char {
    ((value / 10) + b'0') as char
}

#[inline]
#[expect(
    clippy::integer_division_remainder_used,
    clippy::arithmetic_side_effects,
    reason = "value < 60, so the digit math is safe"
)]
const fn ones_digit(value: u8) -> char {
    ((value % 10) + b'0') as char
}

/// The five face characters, hour space-padded: `" 7:05"`, `"12:34"`.
#[must_use]
pub fn face_chars(now: TimeOfDay) -> [char; 5] {
    let hour = now.display_hour_12();
    let hour_tens = if hour >= 10 { '1' } else { ' ' };
    [
        hour_tens,
        ones_digit(hour),
        ':',
        tens_digit(now.minute()),
        ones_digit(now.minute()),
    ]
}

/// Build the complete frame for one tick: flash bar, clock face, and
/// alarm-enabled indicator, per the already-decided visibility.
#[must_use]
pub fn compose(now: TimeOfDay, status: AlarmStatus, enabled: bool, visible: bool) -> Frame {
    let mut frame = Frame::new();

    if flash_lit(status, now) {
        frame.fill_rect(0, FLASH_ROW, WIDTH, 1, BRIGHTNESS);
    }

    if visible {
        frame.write_text(&face_chars(now), 0, 0, BRIGHTNESS);
        if enabled {
            let (x, y) = ENABLED_PIXEL;
            frame.set_pixel(x, y, BRIGHTNESS);
        }
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared_constants::ENABLED_PIXEL;

    fn lit_pixels(frame: &Frame) -> usize {
        let mut count = 0;
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                if frame.get(x, y) > 0 {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn face_chars_pad_single_digit_hours() {
        assert_eq!(face_chars(TimeOfDay::new(7, 5, 0)), [' ', '7', ':', '0', '5']);
        assert_eq!(
            face_chars(TimeOfDay::new(12, 34, 0)),
            ['1', '2', ':', '3', '4']
        );
        // Midnight renders as 12.
        assert_eq!(
            face_chars(TimeOfDay::new(0, 0, 0)),
            ['1', '2', ':', '0', '0']
        );
    }

    #[test]
    fn invisible_face_leaves_frame_dark() {
        let frame = compose(TimeOfDay::new(22, 0, 0), AlarmStatus::Waiting, true, false);
        assert_eq!(lit_pixels(&frame), 0);
    }

    #[test]
    fn visible_face_lights_colon_and_indicator() {
        let now = TimeOfDay::new(12, 34, 1);
        let frame = compose(now, AlarmStatus::Waiting, true, true);
        // Colon column: after "12" the cursor sits at 3+1+3+1 = 8.
        assert!(frame.get(8, 1) > 0);
        assert!(frame.get(8, 3) > 0);
        assert_eq!(frame.get(8, 0), 0);
        // Enabled indicator.
        let (x, y) = ENABLED_PIXEL;
        assert!(frame.get(x, y) > 0);
    }

    #[test]
    fn disabled_alarm_hides_the_indicator() {
        let frame = compose(TimeOfDay::new(12, 34, 1), AlarmStatus::Waiting, false, true);
        let (x, y) = ENABLED_PIXEL;
        assert_eq!(frame.get(x, y), 0);
    }

    #[test]
    fn flash_bar_fills_bottom_row_on_even_seconds() {
        let even = compose(TimeOfDay::new(7, 15, 2), AlarmStatus::Playing, true, true);
        for x in 0..WIDTH {
            assert!(even.get(x, FLASH_ROW) > 0, "column {x} of the bar is dark");
        }

        let odd = compose(TimeOfDay::new(7, 15, 3), AlarmStatus::Playing, true, true);
        // On odd seconds only the indicator pixel remains on that row.
        for x in 0..WIDTH {
            let expected_lit = (x, FLASH_ROW) == ENABLED_PIXEL;
            assert_eq!(odd.get(x, FLASH_ROW) > 0, expected_lit);
        }
    }

    #[test]
    fn text_clips_at_the_right_edge() {
        let mut frame = Frame::new();
        frame.write_text(&['8', '8', '8', '8', '8', '8'], 0, 0, BRIGHTNESS);
        assert!(lit_pixels(&frame) > 0);
        assert_eq!(frame.get(WIDTH, 0), 0);
    }
}
