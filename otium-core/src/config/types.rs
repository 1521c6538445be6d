//! Configuration type definitions

use crate::calendar::ClockState;
use crate::retirement::{Birthday, DEFAULT_RETIREMENT_AGE};

/// Clock value at boot when nothing else is configured
pub const DEFAULT_START: ClockState = ClockState::new(2020, 12, 31, 23, 59, 55);

/// Birthday used when nothing else is configured
pub const DEFAULT_BIRTHDAY: Birthday = Birthday::new(1965, 12, 31);

/// Console UART speed (8N1)
pub const DEFAULT_CONSOLE_BAUDRATE: u32 = 115_200;

/// Boot configuration of the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    /// Date and time the clock starts from
    pub start: ClockState,
    /// Owner's birthday
    pub birthday: Birthday,
    /// Age at which the retirement alarm sounds
    pub retirement_age: u16,
    /// Console UART baud rate
    pub console_baudrate: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            birthday: DEFAULT_BIRTHDAY,
            retirement_age: DEFAULT_RETIREMENT_AGE,
            console_baudrate: DEFAULT_CONSOLE_BAUDRATE,
        }
    }
}
