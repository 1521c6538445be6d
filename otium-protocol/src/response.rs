//! Response lines sent back to the console
//!
//! Every response is a single ASCII line terminated by CR LF.

use core::fmt::Write;

use heapless::String;

/// Maximum encoded response length, terminator included
pub const MAX_RESPONSE_LEN: usize = 32;

/// Line ending appended to every response
pub const RESPONSE_TERMINATOR: &str = "\r\n";

/// An encoded response line
pub type ResponseLine = String<MAX_RESPONSE_LEN>;

/// Errors that can occur while encoding a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResponseError {
    /// Encoded line does not fit in [`MAX_RESPONSE_LEN`]
    BufferTooSmall,
}

/// Responses from the clock to the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Response {
    /// Current clock value (`GET DATETIME`)
    DateTime {
        day: u8,
        month: u8,
        year: u16,
        hour: u8,
        minute: u8,
        second: u8,
    },
    /// Stored birthday (`GET BIRTHDAY`)
    Birthday { day: u8, month: u8, year: u16 },
    /// Acknowledgement of `TGL BACKLIGHT`
    BacklightToggled,
    /// The line was not a recognised command
    IncorrectCommand,
}

impl Response {
    /// Encode this response as a terminated ASCII line
    ///
    /// Day, month and time fields are zero-padded to two digits and the year
    /// to four, so `1.2.2030 3:4:5` reads `01.02.2030 03:04:05`.
    pub fn encode(&self) -> Result<ResponseLine, ResponseError> {
        let mut line = ResponseLine::new();
        let written = match *self {
            Response::DateTime {
                day,
                month,
                year,
                hour,
                minute,
                second,
            } => write!(
                line,
                "{:02}.{:02}.{:04} {:02}:{:02}:{:02}",
                day, month, year, hour, minute, second
            ),
            Response::Birthday { day, month, year } => {
                write!(line, "{:02}.{:02}.{:04}", day, month, year)
            }
            Response::BacklightToggled => line.write_str("BACKLIGHT TOGGLED."),
            Response::IncorrectCommand => line.write_str("Incorrect command."),
        };
        written.map_err(|_| ResponseError::BufferTooSmall)?;

        line.push_str(RESPONSE_TERMINATOR)
            .map_err(|_| ResponseError::BufferTooSmall)?;
        Ok(line)
    }

    /// Returns true if this response reports a rejected command
    pub fn is_error(&self) -> bool {
        matches!(self, Response::IncorrectCommand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_datetime() {
        let response = Response::DateTime {
            day: 1,
            month: 2,
            year: 2030,
            hour: 3,
            minute: 4,
            second: 5,
        };
        assert_eq!(response.encode().unwrap().as_str(), "01.02.2030 03:04:05\r\n");
    }

    #[test]
    fn test_encode_birthday() {
        let response = Response::Birthday {
            day: 31,
            month: 12,
            year: 1965,
        };
        assert_eq!(response.encode().unwrap().as_str(), "31.12.1965\r\n");
    }

    #[test]
    fn test_encode_fixed_lines() {
        assert_eq!(
            Response::BacklightToggled.encode().unwrap().as_str(),
            "BACKLIGHT TOGGLED.\r\n"
        );
        assert_eq!(
            Response::IncorrectCommand.encode().unwrap().as_str(),
            "Incorrect command.\r\n"
        );
        assert!(Response::IncorrectCommand.is_error());
        assert!(!Response::BacklightToggled.is_error());
    }

    #[test]
    fn test_encode_widest_values_fits() {
        let response = Response::DateTime {
            day: u8::MAX,
            month: u8::MAX,
            year: u16::MAX,
            hour: u8::MAX,
            minute: u8::MAX,
            second: u8::MAX,
        };
        assert_eq!(
            response.encode().unwrap().as_str(),
            "255.255.65535 255:255:255\r\n"
        );
    }
}
