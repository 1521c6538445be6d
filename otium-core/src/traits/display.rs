//! Character display trait

/// Errors that can occur with display communication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Pin or bus write failed
    Bus,
    /// Controller not ready (not yet initialised)
    Busy,
}

/// Trait for a 16x2 character display
///
/// The clock redraws the whole screen every tick, so drivers only need to
/// support clearing and writing text at a position.
pub trait DisplayDriver {
    /// Clear the entire screen and home the cursor
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text at a position
    ///
    /// - `row`: Row number (0-1)
    /// - `col`: Column number (0-15)
    /// - `text`: ASCII text to display (max 16 chars)
    fn text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;

    /// Switch the backlight on or off
    fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError>;

    /// Check if the backlight is on
    fn is_backlight_on(&self) -> bool;

    /// Invert the backlight state
    fn toggle_backlight(&mut self) -> Result<(), DisplayError> {
        let on = self.is_backlight_on();
        self.set_backlight(!on)
    }
}
