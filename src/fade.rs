//! Fade-out / fade-in state machine; the driver performs the bus writes.

use crate::constants::MAX_BRIGHTNESS;

/// Millisecond timestamp supplied by the caller.
pub type FadeInstant = fugit::TimerInstantU32<1_000>;
/// Delay between two brightness steps.
pub type FadeDuration = fugit::MillisDurationU32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FadeState {
    Idle,
    FadingOut,
    FadingIn,
}

/// Work for one step: write `brightness`, then flush the display buffer if `flush` is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FadeStep {
    pub brightness: u8,
    pub flush: bool,
}

#[derive(Clone, Debug)]
pub struct Fade {
    state: FadeState,
    step: i8,
    delay: FadeDuration,
    last_step: FadeInstant,
}

impl Default for Fade {
    fn default() -> Self {
        Self::new()
    }
}

impl Fade {
    pub const fn new() -> Self {
        Self {
            state: FadeState::Idle,
            step: 0,
            delay: FadeDuration::from_ticks(0),
            last_step: FadeInstant::from_ticks(0),
        }
    }

    pub fn state(&self) -> FadeState {
        self.state
    }

    pub fn is_fading(&self) -> bool {
        self.state != FadeState::Idle
    }

    pub fn delay(&self) -> FadeDuration {
        self.delay
    }

    /// Arms a fade that starts dimming from `brightness`. Returns `false` and
    /// changes nothing if a fade is already running.
    pub fn start(&mut self, now: FadeInstant, delay: FadeDuration, brightness: u8) -> bool {
        if self.is_fading() {
            return false;
        }
        self.begin(brightness);
        self.delay = delay;
        self.last_step = now;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "fade: start from {} every {} ms",
            self.step,
            delay.to_millis()
        );

        true
    }

    /// Returns the next step once `delay` has passed since the previous one,
    /// `None` while waiting or idle.
    pub fn tick(&mut self, now: FadeInstant) -> Option<FadeStep> {
        if !self.is_fading() {
            return None;
        }
        let elapsed = now.ticks().wrapping_sub(self.last_step.ticks());
        if elapsed < self.delay.ticks() {
            return None;
        }
        self.last_step = now;
        self.advance()
    }

    pub(crate) fn begin(&mut self, brightness: u8) {
        self.state = FadeState::FadingOut;
        self.step = brightness.min(MAX_BRIGHTNESS) as i8;
    }

    /// Takes one step regardless of timing.
    pub(crate) fn advance(&mut self) -> Option<FadeStep> {
        match self.state {
            FadeState::Idle => None,
            FadeState::FadingOut => {
                let brightness = self.step as u8;
                self.step -= 1;
                let flush = self.step < 0;
                if flush {
                    self.state = FadeState::FadingIn;
                    self.step = 0;

                    #[cfg(feature = "defmt")]
                    defmt::debug!("fade: dark, flushing buffer");
                }
                Some(FadeStep { brightness, flush })
            }
            FadeState::FadingIn => {
                let brightness = self.step as u8;
                self.step += 1;
                if self.step > MAX_BRIGHTNESS as i8 {
                    self.state = FadeState::Idle;

                    #[cfg(feature = "defmt")]
                    defmt::debug!("fade: done");
                }
                Some(FadeStep {
                    brightness,
                    flush: false,
                })
            }
        }
    }
}
