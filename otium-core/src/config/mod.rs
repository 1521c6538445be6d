//! Configuration
//!
//! Boot values for the clock, read from a small TOML file that the
//! firmware embeds at compile time.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ParseError};
pub use types::*;
