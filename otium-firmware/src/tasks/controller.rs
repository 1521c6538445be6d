//! Main controller task
//!
//! Sole owner of the clock state, the LCD and the buzzer. Takes events off
//! the queue one at a time and runs each to completion, then forwards any
//! console response to the TX task.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::Delay;

use otium_core::config::ClockConfig;
use otium_core::traits::DisplayDriver;
use otium_core::{Clock, Outcome};
use otium_drivers::alarm::GpioBuzzer;
use otium_drivers::display::Hd44780;

use crate::channels::{EVENT_CHANNEL, RESPONSE_CHANNEL};

/// The 16x2 character LCD as wired on the board
pub type Lcd = Hd44780<Output<'static>, Delay>;

/// The retirement alarm buzzer
pub type Buzzer = GpioBuzzer<Output<'static>>;

/// Controller task - main event loop
#[embassy_executor::task]
pub async fn controller_task(config: ClockConfig, mut lcd: Lcd, mut buzzer: Buzzer) {
    info!("Controller task started");

    if let Err(e) = lcd.init() {
        warn!("LCD init failed: {:?}", e);
    }
    if let Err(e) = lcd.set_backlight(true) {
        warn!("Backlight on failed: {:?}", e);
    }

    let mut clock = Clock::new(&config);
    info!(
        "Clock starts {}.{}.{} {}:{}:{}, retirement at {}",
        clock.time().day,
        clock.time().month,
        clock.time().year,
        clock.time().hour,
        clock.time().minute,
        clock.time().second,
        clock.retirement_age()
    );

    loop {
        let event = EVENT_CHANNEL.receive().await;
        let was_retired = clock.is_retired();

        match clock.handle(&event, &mut lcd, &mut buzzer) {
            Ok(Outcome::Ticked(outcome)) => {
                trace!("Tick: {:?}", outcome);
            }
            Ok(Outcome::ModeChanged(mode)) => {
                debug!("Display mode: {:?}", mode);
            }
            Ok(Outcome::Replied(Some(response))) => {
                if response.is_error() {
                    warn!("Rejected console command");
                } else {
                    debug!("Response: {:?}", response);
                }
                RESPONSE_CHANNEL.send(response).await;
            }
            Ok(Outcome::Replied(None)) => {
                debug!("Command applied");
            }
            Err(e) => {
                warn!("Display error: {:?}", e);
            }
        }

        // Logged here so a display error on the same tick can't hide it
        match (was_retired, clock.is_retired()) {
            (false, true) => info!("Retirement reached, alarm on"),
            (true, false) => info!("Clock moved before retirement, alarm off"),
            _ => {}
        }
    }
}
