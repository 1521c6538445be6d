//! Time since boot

/// Seconds in one day
pub const SECS_PER_DAY: u32 = 86_400;
/// Seconds in one hour
pub const SECS_PER_HOUR: u32 = 3_600;
/// Seconds in one minute
pub const SECS_PER_MINUTE: u32 = 60;

/// Seconds elapsed since boot
///
/// Counts ticks, not wall-clock time: setting the clock does not affect it.
/// Wraps to zero after `u32::MAX` seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Runtime {
    seconds: u32,
}

/// A runtime split into whole days, hours, minutes and seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Uptime {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Runtime {
    pub const fn new() -> Self {
        Self { seconds: 0 }
    }

    pub const fn from_seconds(seconds: u32) -> Self {
        Self { seconds }
    }

    pub const fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Count one second
    pub fn increment(&mut self) {
        self.seconds = self.seconds.wrapping_add(1);
    }

    /// Split into days, hours, minutes and seconds (truncating)
    pub const fn to_dhms(&self) -> Uptime {
        let s = self.seconds;
        Uptime {
            days: s / SECS_PER_DAY,
            hours: (s % SECS_PER_DAY) / SECS_PER_HOUR,
            minutes: (s % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: s % SECS_PER_MINUTE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose() {
        let up = Runtime::from_seconds(90_061).to_dhms();
        assert_eq!(
            up,
            Uptime {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
    }

    #[test]
    fn test_decompose_zero_and_just_under_a_day() {
        let up = Runtime::new().to_dhms();
        assert_eq!((up.days, up.hours, up.minutes, up.seconds), (0, 0, 0, 0));

        let up = Runtime::from_seconds(SECS_PER_DAY - 1).to_dhms();
        assert_eq!((up.days, up.hours, up.minutes, up.seconds), (0, 23, 59, 59));
    }

    #[test]
    fn test_increment_wraps() {
        let mut runtime = Runtime::from_seconds(u32::MAX);
        runtime.increment();
        assert_eq!(runtime.seconds(), 0);
    }
}
