//! Mode button task
//!
//! The button pulls its GPIO low when pressed (internal pull-up).

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Timer};

use otium_core::state::Event;

use crate::channels::EVENT_CHANNEL;

/// Contact bounce settle time
const DEBOUNCE_MS: u64 = 50;

/// Button task - queues one event per debounced press
#[embassy_executor::task]
pub async fn button_task(mut button: Input<'static>) {
    info!("Button task started");

    loop {
        button.wait_for_falling_edge().await;
        Timer::after(Duration::from_millis(DEBOUNCE_MS)).await;

        // Bounce or a glitch shorter than the settle time
        if button.is_high() {
            continue;
        }

        debug!("Button pressed");
        EVENT_CHANNEL.send(Event::ButtonPressed).await;

        // One event per press, however long it is held
        button.wait_for_high().await;
        Timer::after(Duration::from_millis(DEBOUNCE_MS)).await;
    }
}
