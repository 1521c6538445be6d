//! Display mode definition

use super::events::Event;

/// What the display shows on a non-retired tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// Time of day and date
    #[default]
    Clock,
    /// Retirement date
    Countdown,
    /// Time since boot
    Runtime,
}

impl DisplayMode {
    /// The mode after this one, wrapping back to `Clock`
    pub fn next(self) -> Self {
        match self {
            DisplayMode::Clock => DisplayMode::Countdown,
            DisplayMode::Countdown => DisplayMode::Runtime,
            DisplayMode::Runtime => DisplayMode::Clock,
        }
    }

    /// Attempt to transition to a new mode based on an event
    ///
    /// Only a button press moves the mode; every other event keeps it.
    pub fn transition(self, event: &Event) -> Self {
        match event {
            Event::ButtonPressed => self.next(),
            Event::Tick | Event::Line(_) => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use otium_protocol::Line;

    #[test]
    fn test_default_is_clock() {
        assert_eq!(DisplayMode::default(), DisplayMode::Clock);
    }

    #[test]
    fn test_three_presses_cycle() {
        let mut mode = DisplayMode::Clock;
        mode = mode.transition(&Event::ButtonPressed);
        assert_eq!(mode, DisplayMode::Countdown);
        mode = mode.transition(&Event::ButtonPressed);
        assert_eq!(mode, DisplayMode::Runtime);
        mode = mode.transition(&Event::ButtonPressed);
        assert_eq!(mode, DisplayMode::Clock);
    }

    #[test]
    fn test_other_events_keep_mode() {
        let mode = DisplayMode::Countdown;
        assert_eq!(mode.transition(&Event::Tick), DisplayMode::Countdown);
        let line = Line::try_from("GET DATETIME").unwrap();
        assert_eq!(mode.transition(&Event::Line(line)), DisplayMode::Countdown);
    }
}
