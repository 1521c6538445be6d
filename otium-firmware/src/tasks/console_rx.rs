//! Console UART receive task
//!
//! Assembles command lines from the serial console and queues them.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use otium_core::state::Event;
use otium_protocol::{LineAssembler, LineError};

use crate::channels::EVENT_CHANNEL;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Console RX task - receives bytes and dispatches complete lines
#[embassy_executor::task]
pub async fn console_rx_task(mut rx: BufferedUartRx) {
    info!("Console RX task started");

    let mut assembler = LineAssembler::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    match assembler.feed(byte) {
                        Ok(Some(line)) => {
                            debug!("Line: {}", line.as_str());
                            // Drop the line rather than stall reception
                            if EVENT_CHANNEL.try_send(Event::Line(line)).is_err() {
                                warn!("Event queue full, dropping console line");
                            }
                        }
                        Ok(None) => {
                            // Need more bytes
                        }
                        Err(LineError::Overflow) => {
                            warn!("Console line too long, discarded");
                        }
                    }
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}
