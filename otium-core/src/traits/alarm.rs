//! Retirement alarm output

/// Trait for the audible alarm
///
/// Implementations drive a buzzer via GPIO or PWM.
pub trait AlarmOutput {
    /// Turn the alarm on or off
    fn set_on(&mut self, on: bool);

    /// Check if the alarm is currently sounding
    fn is_on(&self) -> bool;
}
