//! Hardware abstraction traits
//!
//! These traits define the interface between the clock logic
//! and hardware-specific implementations.

pub mod alarm;
pub mod display;

pub use alarm::AlarmOutput;
pub use display::{DisplayDriver, DisplayError};
