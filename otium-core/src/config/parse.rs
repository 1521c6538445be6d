//! Simple TOML parser for the clock configuration
//!
//! Handles only the subset the clock needs. It does NOT support the full
//! TOML spec.
//!
//! Supported features:
//! - `[clock]`, `[birthday]`, `[retirement]` and `[console]` sections
//! - `key = integer` pairs, with optional `_` digit separators
//! - Comments (# ...), whole-line or trailing
//!
//! Keys the clock doesn't know are skipped so a file written for a newer
//! firmware still loads. Missing keys keep their default values.

use heapless::String as HString;

use super::types::ClockConfig;

/// Longest integer literal accepted, separators included
const MAX_INT_LEN: usize = 16;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Value is not an integer or doesn't fit its field
    InvalidValue,
    /// Start date and time is not a real calendar value
    InvalidDate,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Clock,
    Birthday,
    Retirement,
    Console,
}

/// Parse TOML configuration into ClockConfig
pub fn parse_config(input: &str) -> Result<ClockConfig, ParseError> {
    let mut config = ClockConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            section = parse_section_header(line)?;
            continue;
        }

        if let Some((key, value)) = parse_key_value(line) {
            apply_value(section, key, value, &mut config)?;
        }
    }

    if !config.start.is_valid() {
        return Err(ParseError::InvalidDate);
    }
    if !config.birthday.is_valid() {
        return Err(ParseError::InvalidValue);
    }

    Ok(config)
}

/// Parse a header line like "[clock]", trailing comment allowed
fn parse_section_header(line: &str) -> Result<Section, ParseError> {
    let line = strip_comment(line);
    let name = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or(ParseError::InvalidSection)?;

    match name.trim() {
        "clock" => Ok(Section::Clock),
        "birthday" => Ok(Section::Birthday),
        "retirement" => Ok(Section::Retirement),
        "console" => Ok(Section::Console),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = strip_comment(&line[eq_pos + 1..]);

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Remove a trailing comment
fn strip_comment(text: &str) -> &str {
    match text.find('#') {
        Some(hash_pos) => text[..hash_pos].trim(),
        None => text.trim(),
    }
}

/// Parse an integer value, ignoring `_` separators
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    let mut digits: HString<MAX_INT_LEN> = HString::new();
    for ch in value.chars().filter(|&ch| ch != '_') {
        digits.push(ch).map_err(|_| ParseError::InvalidValue)?;
    }
    digits.parse().map_err(|_| ParseError::InvalidValue)
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut ClockConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Clock => {
            let start = &mut config.start;
            match key {
                "year" => start.year = parse_int(value)?,
                "month" => start.month = parse_int(value)?,
                "day" => start.day = parse_int(value)?,
                "hour" => start.hour = parse_int(value)?,
                "minute" => start.minute = parse_int(value)?,
                "second" => start.second = parse_int(value)?,
                _ => {}
            }
        }
        Section::Birthday => {
            let birthday = &mut config.birthday;
            match key {
                "year" => birthday.year = parse_int(value)?,
                "month" => birthday.month = parse_int(value)?,
                "day" => birthday.day = parse_int(value)?,
                _ => {}
            }
        }
        Section::Retirement => {
            if key == "age" {
                config.retirement_age = parse_int(value)?;
            }
        }
        Section::Console => {
            if key == "baudrate" {
                config.console_baudrate = parse_int(value)?;
            }
        }
        Section::Root => {}
    }

    Ok(())
}
