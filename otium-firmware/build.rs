//! Build script for otium-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates clock.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ClockFile {
    clock: Option<ClockSection>,
    birthday: Option<BirthdaySection>,
    retirement: Option<RetirementSection>,
    console: Option<ConsoleSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClockSection {
    year: Option<i64>,
    month: Option<i64>,
    day: Option<i64>,
    hour: Option<i64>,
    minute: Option<i64>,
    second: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BirthdaySection {
    year: Option<i64>,
    month: Option<i64>,
    day: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RetirementSection {
    age: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConsoleSection {
    baudrate: Option<i64>,
}

/// Validate clock.toml configuration at compile time
fn validate_config() {
    // Re-run if clock.toml changes
    println!("cargo:rerun-if-changed=clock.toml");

    let config_path = Path::new("clock.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: clock.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds clock.toml as its boot configuration.       ║\n\
            ║  Please create one in the otium-firmware directory.              ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    // Read the config file
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read clock.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse TOML syntax and section layout
    let config: ClockFile = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid clock.toml                                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_clock(&config, &mut errors);
    validate_birthday(&config, &mut errors);
    validate_retirement(&config, &mut errors);
    validate_console(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid values in clock.toml                             ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=clock.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn check_range(errors: &mut Vec<String>, key: &str, value: Option<i64>, min: i64, max: i64) {
    if let Some(v) = value {
        if v < min || v > max {
            errors.push(format!("{} must be {}-{}", key, min, max));
        }
    }
}

fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(month: i64, year: i64) -> i64 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Validate the [clock] start values
fn validate_clock(config: &ClockFile, errors: &mut Vec<String>) {
    let Some(clock) = &config.clock else {
        return;
    };

    check_range(errors, "[clock] year", clock.year, 1, 65_535);
    check_range(errors, "[clock] month", clock.month, 1, 12);
    check_range(errors, "[clock] hour", clock.hour, 0, 23);
    check_range(errors, "[clock] minute", clock.minute, 0, 59);
    check_range(errors, "[clock] second", clock.second, 0, 59);

    // Defaults of the firmware fill in missing date keys
    let year = clock.year.unwrap_or(2020);
    let month = clock.month.unwrap_or(12);
    let day = clock.day.unwrap_or(31);
    if (1..=12).contains(&month) {
        let last = days_in_month(month, year);
        if day < 1 || day > last {
            errors.push(format!("[clock] day must be 1-{} for month {}", last, month));
        }
    }
}

/// Validate the [birthday] values
fn validate_birthday(config: &ClockFile, errors: &mut Vec<String>) {
    let Some(birthday) = &config.birthday else {
        return;
    };

    check_range(errors, "[birthday] year", birthday.year, 0, 65_535);
    check_range(errors, "[birthday] month", birthday.month, 1, 12);
    check_range(errors, "[birthday] day", birthday.day, 1, 31);
}

/// Validate the [retirement] values
fn validate_retirement(config: &ClockFile, errors: &mut Vec<String>) {
    if let Some(retirement) = &config.retirement {
        check_range(errors, "[retirement] age", retirement.age, 0, 65_535);
    }
}

/// Validate the [console] values
fn validate_console(config: &ClockFile, errors: &mut Vec<String>) {
    if let Some(console) = &config.console {
        check_range(errors, "[console] baudrate", console.baudrate, 300, 921_600);
    }
}
