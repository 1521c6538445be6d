//! GPIO buzzer output
//!
//! Drives an active buzzer (one with its own oscillator) from a GPIO pin,
//! directly or through a transistor.

use embedded_hal::digital::OutputPin;

use otium_core::traits::AlarmOutput;

/// GPIO buzzer
///
/// The pin can be configured as active-high (default) or active-low.
pub struct GpioBuzzer<P> {
    pin: P,
    /// If true, buzzer ON = pin LOW
    inverted: bool,
    /// Current logical state (true = sounding)
    on: bool,
}

impl<P: OutputPin> GpioBuzzer<P> {
    /// Create a new GPIO buzzer, silenced
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the buzzer sounds when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut buzzer = Self {
            pin,
            inverted,
            on: false,
        };
        buzzer.set_on(false);
        buzzer
    }

    /// Create a new GPIO buzzer with active-high output
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create a new GPIO buzzer with active-low output
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }
}

impl<P: OutputPin> AlarmOutput for GpioBuzzer<P> {
    fn set_on(&mut self, on: bool) {
        self.on = on;

        // GPIO writes on the target are infallible
        let _ = if on != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
