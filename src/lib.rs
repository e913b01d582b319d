//! Driver for two 8-digit 7-segment displays sharing one Holtek HT16K33.

#![no_std]

pub mod buffer;
mod command;
mod constants;
pub mod fade;
mod font;

pub use buffer::DisplayBuffer;
pub use command::Command;
pub use constants::*;
pub use fade::{Fade, FadeDuration, FadeInstant, FadeState, FadeStep};
pub use font::{glyph, glyph_or_blank, BLANK, LETTERS, MINUS, NUMBERS, UNDERSCORE};

use embedded_hal::{delay::DelayNs, i2c::I2c};
use num_traits::ToPrimitive;

pub struct HT16K33<I2C> {
    pub i2c: I2C,
    pub address: u8,
    buffer: DisplayBuffer,
    brightness: u8,
    fade: Fade,
}

impl<I2C, E> HT16K33<I2C>
where
    I2C: I2c<Error = E>,
{
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            buffer: [0; NUM_ROWS],
            brightness: MAX_BRIGHTNESS,
            fade: Fade::new(),
        }
    }

    pub fn destroy(self) -> I2C {
        self.i2c
    }

    /// Starts the oscillator, turns the display on and sets full brightness.
    pub fn init(&mut self) -> Result<(), HT16K33Error<E>> {
        self.write_command(Command::OscillatorOn)?;
        self.write_command(Command::DisplayOn)?;
        self.set_brightness(MAX_BRIGHTNESS)?;
        Ok(())
    }

    pub fn buffer(&self) -> &DisplayBuffer {
        &self.buffer
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn set_digit(&mut self, display: u8, position: u8, pattern: u8, dot: bool) {
        buffer::set_digit(&mut self.buffer, display, position, pattern, dot);
    }

    pub fn set_digit16(&mut self, position: u8, pattern: u8, dot: bool) {
        buffer::set_digit16(&mut self.buffer, position, pattern, dot);
    }

    /// Like [`set_digit`](Self::set_digit), unknown characters show as blank.
    pub fn set_char(&mut self, display: u8, position: u8, c: char, dot: bool) {
        self.set_digit(display, position, glyph_or_blank(c), dot);
    }

    pub fn set_char16(&mut self, position: u8, c: char, dot: bool) {
        self.set_digit16(position, glyph_or_blank(c), dot);
    }

    pub fn clear_display(&mut self, display: u8) {
        buffer::clear_display(&mut self.buffer, display);
    }

    pub fn clear_all(&mut self) {
        buffer::clear_all(&mut self.buffer);
    }

    pub fn fill_all(&mut self) {
        buffer::fill_all(&mut self.buffer);
    }

    /// Clears `display` and writes `text` from the left.
    ///
    /// Each character with a glyph takes one of the 8 slots. A `.` right after
    /// such a character lights that digit's decimal point instead of taking a
    /// slot; any other `.` and characters without a glyph are dropped.
    pub fn write_str(&mut self, display: u8, text: &str) {
        if display >= NUM_DISPLAYS {
            return;
        }
        self.clear_display(display);

        let mut position = 0;
        let mut chars = text.chars().peekable();
        while position < MAX_DIGITS {
            let Some(c) = chars.next() else {
                break;
            };
            let Some(pattern) = glyph(c) else {
                continue;
            };
            let dot = chars.next_if_eq(&'.').is_some();
            self.set_digit(display, position, pattern, dot);
            position += 1;
        }
    }

    /// Shows a signed integer right-aligned on `display`.
    pub fn display_value<T>(&mut self, display: u8, value: T) -> Result<(), HT16K33Error<E>>
    where
        T: ToPrimitive,
    {
        self.display_radix(display, value, 10)
    }

    /// Shows a signed integer in hexadecimal, right-aligned on `display`.
    pub fn display_hex_value<T>(&mut self, display: u8, value: T) -> Result<(), HT16K33Error<E>>
    where
        T: ToPrimitive,
    {
        self.display_radix(display, value, 16)
    }

    fn display_radix<T>(
        &mut self,
        display: u8,
        value: T,
        radix: u64,
    ) -> Result<(), HT16K33Error<E>>
    where
        T: ToPrimitive,
    {
        let value = value.to_i64().ok_or(HT16K33Error::InvalidValue)?;
        let negative = value < 0;
        let mut num = value.unsigned_abs();

        // digits plus sign must fit
        let mut needed = u8::from(negative);
        let mut rest = num;
        loop {
            needed += 1;
            rest /= radix;
            if rest == 0 {
                break;
            }
        }
        if needed > MAX_DIGITS {
            return Err(HT16K33Error::InvalidValue);
        }
        if display >= NUM_DISPLAYS {
            return Ok(());
        }

        self.clear_display(display);
        let mut position = MAX_DIGITS;
        loop {
            position -= 1;
            self.set_digit(display, position, NUMBERS[(num % radix) as usize], false);
            num /= radix;
            if num == 0 {
                break;
            }
        }
        if negative {
            self.set_digit(display, position - 1, MINUS, false);
        }
        Ok(())
    }

    /// Sends the whole buffer to display RAM in one write.
    pub fn flush(&mut self) -> Result<(), HT16K33Error<E>> {
        let mut data = [0; NUM_ROWS + 1];
        data[0] = DISPLAY_RAM_ADDRESS;
        data[1..].copy_from_slice(&self.buffer);
        self.i2c.write(self.address, &data)?;
        Ok(())
    }

    /// Stores `brightness` (saturated at 15) and sends it to the chip right away.
    pub fn set_brightness(&mut self, brightness: u8) -> Result<(), HT16K33Error<E>> {
        self.brightness = brightness.min(MAX_BRIGHTNESS);
        self.write_command(Command::Brightness(self.brightness))?;
        Ok(())
    }

    /// Dims to 0, flushes the buffer, then brightens back to 15, waiting `delay`
    /// after every step. Blocks until done and cancels a running [`start_fade`](Self::start_fade).
    ///
    /// A failed write does not stop the sequence; the first error is returned at the end.
    pub fn display_fade<D: DelayNs>(
        &mut self,
        delay: FadeDuration,
        delayer: &mut D,
    ) -> Result<(), HT16K33Error<E>> {
        self.fade = Fade::new();
        let mut fade = Fade::new();
        fade.begin(self.brightness);

        let mut result = Ok(());
        while let Some(step) = fade.advance() {
            let step_result = self.apply_fade_step(step);
            if result.is_ok() {
                result = step_result;
            }
            delayer.delay_ms(delay.to_millis());
        }
        let step_result = self.set_brightness(MAX_BRIGHTNESS);
        if result.is_ok() {
            result = step_result;
        }
        result
    }

    pub fn clear_display_fade<D: DelayNs>(
        &mut self,
        display: u8,
        delay: FadeDuration,
        delayer: &mut D,
    ) -> Result<(), HT16K33Error<E>> {
        if display >= NUM_DISPLAYS {
            return Ok(());
        }
        self.clear_display(display);
        self.display_fade(delay, delayer)
    }

    pub fn clear_all_fade<D: DelayNs>(
        &mut self,
        delay: FadeDuration,
        delayer: &mut D,
    ) -> Result<(), HT16K33Error<E>> {
        self.clear_all();
        self.display_fade(delay, delayer)
    }

    /// Lights every segment on both displays, using them as a plain light source.
    pub fn light_up_all_fade<D: DelayNs>(
        &mut self,
        delay: FadeDuration,
        delayer: &mut D,
    ) -> Result<(), HT16K33Error<E>> {
        self.fill_all();
        self.display_fade(delay, delayer)
    }

    /// Arms a non-blocking fade; drive it with [`update_fade`](Self::update_fade).
    /// Returns `false` if a fade is already running.
    pub fn start_fade(&mut self, now: FadeInstant, delay: FadeDuration) -> bool {
        self.fade.start(now, delay, self.brightness)
    }

    /// Takes at most one fade step if it is due at `now`. Returns whether a
    /// fade is still running.
    ///
    /// On a bus error the fade has still moved on; the error is only reported.
    pub fn update_fade(&mut self, now: FadeInstant) -> Result<bool, HT16K33Error<E>> {
        if let Some(step) = self.fade.tick(now) {
            self.apply_fade_step(step)?;
        }
        Ok(self.fade.is_fading())
    }

    pub fn is_fading(&self) -> bool {
        self.fade.is_fading()
    }

    pub fn fade_state(&self) -> FadeState {
        self.fade.state()
    }

    fn apply_fade_step(&mut self, step: FadeStep) -> Result<(), HT16K33Error<E>> {
        let brightness = self.set_brightness(step.brightness);
        let flush = if step.flush { self.flush() } else { Ok(()) };

        #[cfg(feature = "defmt")]
        if brightness.is_err() || flush.is_err() {
            defmt::warn!("fade: bus write failed at brightness {}", step.brightness);
        }

        brightness.and(flush)
    }

    fn write_command(&mut self, command: Command) -> Result<(), HT16K33Error<E>> {
        self.i2c.write(self.address, &[command.encode()])?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HT16K33Error<E> {
    I2cError(E),
    InvalidValue,
}

impl<E> From<E> for HT16K33Error<E> {
    fn from(error: E) -> Self {
        HT16K33Error::I2cError(error)
    }
}
