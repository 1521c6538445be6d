//! Display mode state machine
//!
//! The mode only changes on a button press. Ticks and console lines are
//! carried by the same event type so the firmware can queue all three
//! sources through one channel.

pub mod events;
pub mod mode;

pub use events::Event;
pub use mode::DisplayMode;
