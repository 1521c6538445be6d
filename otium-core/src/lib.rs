//! Board-agnostic core logic for the retirement clock firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Calendar arithmetic (second-by-second carry, leap years)
//! - Retirement threshold evaluation
//! - Display mode state machine and events
//! - View rendering into a character screen buffer
//! - The `Clock` aggregate: tick dispatcher and console command interpreter
//! - Configuration types and parsing
//! - Hardware abstraction traits (display, alarm)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod calendar;
pub mod clock;
pub mod config;
pub mod retirement;
pub mod runtime;
pub mod state;
pub mod traits;
pub mod view;

pub use calendar::ClockState;
pub use clock::{Clock, Outcome, TickOutcome};
pub use retirement::Birthday;
pub use runtime::Runtime;
