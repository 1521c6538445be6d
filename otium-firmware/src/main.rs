//! Otium - Retirement Clock Firmware
//!
//! Main firmware binary for an RP2040 board with a 16x2 character LCD,
//! an active buzzer, a mode button and a serial console.
//!
//! Named after the Latin "otium", the leisure that follows a working life.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use otium_drivers::alarm::GpioBuzzer;
use otium_drivers::display::{Hd44780, Hd44780Pins};

mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 128]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Otium firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load_config();

    // Setup UART for the serial console (8N1)
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = config.console_baudrate;

    let tx_buf = TX_BUF.init([0u8; 128]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("Console UART initialized at {} baud", config.console_baudrate);

    // LCD in 4-bit mode: RS=GPIO2, E=GPIO3, D4..D7=GPIO4..7, backlight=GPIO8
    let lcd_pins = Hd44780Pins {
        rs: Output::new(p.PIN_2, Level::Low),
        en: Output::new(p.PIN_3, Level::Low),
        d4: Output::new(p.PIN_4, Level::Low),
        d5: Output::new(p.PIN_5, Level::Low),
        d6: Output::new(p.PIN_6, Level::Low),
        d7: Output::new(p.PIN_7, Level::Low),
    };
    let backlight = Output::new(p.PIN_8, Level::Low);
    let lcd = Hd44780::new(lcd_pins, backlight, Delay);

    // Active buzzer on GPIO9, silent at boot
    let buzzer = GpioBuzzer::new_active_high(Output::new(p.PIN_9, Level::Low));

    // Mode button on GPIO15, active low
    let button = Input::new(p.PIN_15, Pull::Up);

    info!("LCD, buzzer and button initialized");

    // Spawn tasks
    spawner.spawn(unwrap!(tasks::controller_task(config, lcd, buzzer)));
    spawner.spawn(unwrap!(tasks::console_tx_task(tx)));
    spawner.spawn(unwrap!(tasks::console_rx_task(rx)));
    spawner.spawn(unwrap!(tasks::button_task(button)));
    spawner.spawn(unwrap!(tasks::tick_task()));

    info!("All tasks spawned, firmware running");
}
