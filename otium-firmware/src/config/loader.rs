//! Boot configuration loader
//!
//! Parses the embedded clock.toml. Falls back to compiled-in defaults if
//! the file does not parse, which only happens when the build-time check
//! and the runtime parser disagree.

use defmt::*;

use otium_core::config::{parse_config, ClockConfig};

/// Embedded boot configuration (compiled into firmware)
/// Edit clock.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../../clock.toml");

/// Load the boot configuration
pub fn load_config() -> ClockConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            error!("Using compiled-in defaults");
            ClockConfig::default()
        }
    }
}
