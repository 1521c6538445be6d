//! Events consumed by the clock

use otium_protocol::Line;

/// Everything that can act on the clock state
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// One second elapsed
    Tick,
    /// The mode button was pressed (already debounced)
    ButtonPressed,
    /// A complete console line arrived (terminator stripped)
    Line(Line),
}
