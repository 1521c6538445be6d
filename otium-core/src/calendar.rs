//! Calendar arithmetic
//!
//! The clock keeps its date and time as six separate fields and advances
//! them one second per tick with a cascaded carry:
//! second -> minute -> hour -> day -> month -> year.
//!
//! Rollover checks are equality checks against the last valid value, so a
//! field holding an out-of-range value written from the console keeps
//! counting up (wrapping at its width) until it meets the rollover value.
//! The arithmetic never panics, whatever the fields contain.

/// Days in each month of a common year, January first
pub const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Month length used for a month number outside 1..=12
const UNKNOWN_MONTH_LEN: u8 = 31;

/// Gregorian leap year rule
pub fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` (1-based) of `year`
pub fn days_in_month(month: u8, year: u16) -> u8 {
    if month == 2 && is_leap_year(year) {
        return 29;
    }
    common_month_len(month)
}

/// Month length ignoring leap years
fn common_month_len(month: u8) -> u8 {
    month
        .checked_sub(1)
        .and_then(|index| DAYS_IN_MONTH.get(usize::from(index)))
        .copied()
        .unwrap_or(UNKNOWN_MONTH_LEN)
}

/// Wall-clock date and time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockState {
    pub year: u16,
    /// 1..=12
    pub month: u8,
    /// 1..=days_in_month(month, year)
    pub day: u8,
    /// 0..=23
    pub hour: u8,
    /// 0..=59
    pub minute: u8,
    /// 0..=59
    pub second: u8,
}

impl ClockState {
    /// Create a clock state from its fields
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Check that every field is within its calendar range
    pub fn is_valid(&self) -> bool {
        self.year >= 1
            && (1..=12).contains(&self.month)
            && self.day >= 1
            && self.day <= days_in_month(self.month, self.year)
            && self.hour <= 23
            && self.minute <= 59
            && self.second <= 59
    }

    /// The state one second later
    ///
    /// The whole carry chain is resolved before the new state is returned.
    #[must_use]
    pub fn advance_one_second(self) -> Self {
        let mut next = self;
        next.increment_second();
        next
    }

    fn increment_second(&mut self) {
        if self.second == 59 {
            self.second = 0;
            self.increment_minute();
        } else {
            self.second = self.second.wrapping_add(1);
        }
    }

    fn increment_minute(&mut self) {
        if self.minute == 59 {
            self.minute = 0;
            self.increment_hour();
        } else {
            self.minute = self.minute.wrapping_add(1);
        }
    }

    fn increment_hour(&mut self) {
        if self.hour == 23 {
            self.hour = 0;
            self.increment_day();
        } else {
            self.hour = self.hour.wrapping_add(1);
        }
    }

    fn increment_day(&mut self) {
        // `>=` also moves an over-long day (e.g. 29 Feb, or 40) to the next month
        if self.day >= common_month_len(self.month) {
            if self.month == 2 && self.day == 28 && is_leap_year(self.year) {
                self.day = 29;
            } else {
                self.day = 1;
                self.increment_month();
            }
        } else {
            self.day = self.day.wrapping_add(1);
        }
    }

    fn increment_month(&mut self) {
        if self.month == 12 {
            self.month = 1;
            self.year = self.year.wrapping_add(1);
        } else {
            self.month = self.month.wrapping_add(1);
        }
    }
}
