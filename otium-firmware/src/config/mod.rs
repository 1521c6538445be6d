//! Configuration loading
//!
//! Boot values come from clock.toml, embedded at compile time and parsed
//! by the no_std parser in otium-core.

pub mod loader;

pub use loader::load_config;
