//! Console command parsing
//!
//! Commands are matched literally. The two `SET` commands match on their
//! 12-character keyword prefix and then take positional numeric fields
//! from the third token onwards; the other commands must match the whole
//! line exactly.

use heapless::Vec;

/// Keyword prefix of the set-clock command
pub const SET_DATETIME: &str = "SET DATETIME";
/// Read-clock command
pub const GET_DATETIME: &str = "GET DATETIME";
/// Keyword prefix of the set-birthday command
pub const SET_BIRTHDAY: &str = "SET BIRTHDAY";
/// Read-birthday command
pub const GET_BIRTHDAY: &str = "GET BIRTHDAY";
/// Backlight toggle command
pub const TGL_BACKLIGHT: &str = "TGL BACKLIGHT";

/// Maximum numeric fields carried by any command
pub const MAX_FIELDS: usize = 6;

/// Fields in `SET DATETIME`: day, month, year, hour, minute, second
pub const DATETIME_FIELDS: usize = 6;

/// Fields in `SET BIRTHDAY`: day, month, year
pub const BIRTHDAY_FIELDS: usize = 3;

/// Index of the first numeric token (after the two keywords)
const FIRST_FIELD_TOKEN: usize = 2;

/// Positional numeric fields in the order they appeared
///
/// Holds fewer entries than the command defines when the line was cut
/// short; fields past the end are left untouched by the receiver.
pub type Fields = Vec<u16, MAX_FIELDS>;

/// A parsed console command
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// `SET DATETIME dd mm yyyy hh mm ss`
    SetDateTime(Fields),
    /// `GET DATETIME`
    GetDateTime,
    /// `SET BIRTHDAY dd mm yyyy`
    SetBirthday(Fields),
    /// `GET BIRTHDAY`
    GetBirthday,
    /// `TGL BACKLIGHT`
    ToggleBacklight,
    /// Anything that is not one of the above
    Unknown,
}

impl Command {
    /// Parse one command line (terminator already stripped)
    pub fn parse(line: &str) -> Self {
        if line.starts_with(SET_DATETIME) {
            Command::SetDateTime(parse_fields(line, DATETIME_FIELDS))
        } else if line == GET_DATETIME {
            Command::GetDateTime
        } else if line.starts_with(SET_BIRTHDAY) {
            Command::SetBirthday(parse_fields(line, BIRTHDAY_FIELDS))
        } else if line == GET_BIRTHDAY {
            Command::GetBirthday
        } else if line == TGL_BACKLIGHT {
            Command::ToggleBacklight
        } else {
            Command::Unknown
        }
    }
}

/// Collect up to `count` numeric fields starting at the third token
fn parse_fields(line: &str, count: usize) -> Fields {
    let mut fields = Fields::new();
    let tokens = line
        .split(' ')
        .filter(|token| !token.is_empty())
        .skip(FIRST_FIELD_TOKEN)
        .take(count.min(MAX_FIELDS));

    for token in tokens {
        // Cannot fail: take() bounds the count to capacity
        let _ = fields.push(parse_field(token));
    }
    fields
}

/// Best-effort integer parse of one field token
///
/// Reads an optional sign and the leading decimal digits, ignoring anything
/// after them. A token without leading digits reads as 0. The result wraps
/// modulo 2^16, so `"-1"` becomes `0xFFFF`.
pub fn parse_field(token: &str) -> u16 {
    let bytes = token.as_bytes();
    let (negative, digits) = match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, bytes),
    };

    let magnitude = digits
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(0u16, |acc, &b| {
            acc.wrapping_mul(10).wrapping_add(u16::from(b - b'0'))
        });

    if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(values: &[u16]) -> Fields {
        Fields::from_slice(values).unwrap()
    }

    #[test]
    fn test_parse_set_datetime() {
        let cmd = Command::parse("SET DATETIME 01 02 2030 03 04 05");
        assert_eq!(cmd, Command::SetDateTime(fields(&[1, 2, 2030, 3, 4, 5])));
    }

    #[test]
    fn test_parse_set_birthday() {
        let cmd = Command::parse("SET BIRTHDAY 24 06 1980");
        assert_eq!(cmd, Command::SetBirthday(fields(&[24, 6, 1980])));
    }

    #[test]
    fn test_parse_read_commands() {
        assert_eq!(Command::parse("GET DATETIME"), Command::GetDateTime);
        assert_eq!(Command::parse("GET BIRTHDAY"), Command::GetBirthday);
        assert_eq!(Command::parse("TGL BACKLIGHT"), Command::ToggleBacklight);
    }

    #[test]
    fn test_read_commands_need_exact_match() {
        assert_eq!(Command::parse("GET DATETIME "), Command::Unknown);
        assert_eq!(Command::parse("get datetime"), Command::Unknown);
        assert_eq!(Command::parse("TGL BACKLIGHTS"), Command::Unknown);
    }

    #[test]
    fn test_unknown_commands() {
        assert_eq!(Command::parse("FOO BAR"), Command::Unknown);
        assert_eq!(Command::parse(""), Command::Unknown);
        assert_eq!(Command::parse("SET DATE 1 2 3"), Command::Unknown);
    }

    #[test]
    fn test_set_matches_on_prefix() {
        // Only the first 12 characters are compared, as the keyword prefix
        let cmd = Command::parse("SET DATETIMEX 5 6 2001");
        assert_eq!(cmd, Command::SetDateTime(fields(&[5, 6, 2001])));
    }

    #[test]
    fn test_missing_and_extra_fields() {
        assert_eq!(
            Command::parse("SET DATETIME 15 7"),
            Command::SetDateTime(fields(&[15, 7]))
        );
        assert_eq!(
            Command::parse("SET BIRTHDAY 1 2 1970 99 98"),
            Command::SetBirthday(fields(&[1, 2, 1970]))
        );
        assert_eq!(Command::parse("SET BIRTHDAY"), Command::SetBirthday(Fields::new()));
    }

    #[test]
    fn test_repeated_spaces_collapse() {
        assert_eq!(
            Command::parse("SET BIRTHDAY   1  2 1970"),
            Command::SetBirthday(fields(&[1, 2, 1970]))
        );
    }

    #[test]
    fn test_parse_field_best_effort() {
        assert_eq!(parse_field("42"), 42);
        assert_eq!(parse_field("007"), 7);
        assert_eq!(parse_field("12abc"), 12);
        assert_eq!(parse_field("abc"), 0);
        assert_eq!(parse_field(""), 0);
        assert_eq!(parse_field("+9"), 9);
        assert_eq!(parse_field("-1"), u16::MAX);
        assert_eq!(parse_field("65536"), 0);
        assert_eq!(parse_field("70000"), 4464);
    }

    #[test]
    fn test_out_of_range_values_pass_through() {
        assert_eq!(
            Command::parse("SET DATETIME 40 13 2020 25 61 99"),
            Command::SetDateTime(fields(&[40, 13, 2020, 25, 61, 99]))
        );
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn parse_never_panics(line in "\\PC{0,40}") {
                let _ = Command::parse(&line);
            }

            #[test]
            fn plain_numbers_parse_exactly(value in 0u16..=u16::MAX) {
                let mut text = heapless::String::<8>::new();
                core::fmt::write(&mut text, format_args!("{}", value)).unwrap();
                prop_assert_eq!(parse_field(&text), value);
            }
        }
    }
}
