//! Console UART transmit task
//!
//! Writes command responses back to the serial console.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use crate::channels::RESPONSE_CHANNEL;

/// Console TX task - encodes and sends responses in order
#[embassy_executor::task]
pub async fn console_tx_task(mut tx: BufferedUartTx) {
    info!("Console TX task started");

    loop {
        let response = RESPONSE_CHANNEL.receive().await;

        let line = match response.encode() {
            Ok(line) => line,
            Err(e) => {
                warn!("Failed to encode response {:?}: {:?}", response, e);
                continue;
            }
        };

        if let Err(e) = tx.write_all(line.as_bytes()).await {
            warn!("Failed to send response: {:?}", e);
        } else {
            trace!("Response sent");
        }
    }
}
