//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Every producer feeds the one event queue; the controller task is its
//! only consumer, so clock state has a single writer.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use otium_core::state::Event;
use otium_protocol::Response;

/// Channel capacity for clock events
const EVENT_CHANNEL_SIZE: usize = 8;

/// Channel capacity for console responses
const RESPONSE_CHANNEL_SIZE: usize = 4;

/// Ticks, button presses and console lines, in arrival order
pub static EVENT_CHANNEL: Channel<CriticalSectionRawMutex, Event, EVENT_CHANNEL_SIZE> =
    Channel::new();

/// Responses waiting to be written to the console
pub static RESPONSE_CHANNEL: Channel<CriticalSectionRawMutex, Response, RESPONSE_CHANNEL_SIZE> =
    Channel::new();
