//! Tick task for the one-second clock beat

use defmt::*;
use embassy_time::{Duration, Ticker};

use otium_core::state::Event;

use crate::channels::EVENT_CHANNEL;

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 1_000;

/// Tick task - queues one tick event per second
///
/// `Ticker` keeps a fixed schedule, so a late wake-up does not shift the
/// following ticks. Ticks are never dropped; if the queue is full the task
/// waits for room.
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));

    loop {
        ticker.next().await;
        trace!("Tick");
        EVENT_CHANNEL.send(Event::Tick).await;
    }
}
