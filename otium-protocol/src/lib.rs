//! Otium Serial Console Protocol
//!
//! This crate defines the line-oriented ASCII protocol spoken between the
//! clock and a serial terminal (PuTTY with default settings works out of
//! the box).
//!
//! # Protocol Overview
//!
//! The terminal sends one command per line, terminated by a carriage return.
//! Line feeds are ignored. Tokens are separated by spaces and are
//! case-sensitive:
//!
//! ```text
//! GET DATETIME                         -> "DD.MM.YYYY HH:MM:SS\r\n"
//! SET DATETIME dd mm yyyy hh mm ss     -> (no response)
//! GET BIRTHDAY                         -> "DD.MM.YYYY\r\n"
//! SET BIRTHDAY dd mm yyyy              -> (no response)
//! TGL BACKLIGHT                        -> "BACKLIGHT TOGGLED.\r\n"
//! anything else                        -> "Incorrect command.\r\n"
//! ```
//!
//! Numeric fields are parsed on a best-effort basis and are not range
//! checked. The clock stores whatever it is given.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod line;
pub mod response;

pub use command::{parse_field, Command, Fields, MAX_FIELDS};
pub use line::{Line, LineAssembler, LineError, LINE_TERMINATOR, MAX_LINE_LEN};
pub use response::{Response, ResponseError, ResponseLine, MAX_RESPONSE_LEN};
