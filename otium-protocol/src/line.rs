//! Line assembly for the console byte stream.
//!
//! Bytes are fed one at a time as they arrive from the UART:
//! - CR (0x0D) ends the line and hands it out
//! - LF (0x0A) is line noise and is dropped
//! - anything else is appended to the buffer
//!
//! A line that grows past [`MAX_LINE_LEN`] bytes is thrown away and the
//! byte that overflowed it is lost with it.

use heapless::{String, Vec};

/// Byte that terminates a command line
pub const LINE_TERMINATOR: u8 = b'\r';

/// Byte that is ignored between commands
pub const LINE_FEED: u8 = b'\n';

/// Maximum command line length in bytes
pub const MAX_LINE_LEN: usize = 32;

/// A complete command line, without its terminator
pub type Line = String<MAX_LINE_LEN>;

/// Errors reported while assembling lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line exceeded the buffer; buffered bytes were discarded
    Overflow,
}

/// Accumulates bytes into command lines
#[derive(Debug, Clone, Default)]
pub struct LineAssembler {
    buffer: Vec<u8, MAX_LINE_LEN>,
}

impl LineAssembler {
    /// Create an empty assembler
    pub const fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Discard any partially received line
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Number of bytes waiting for a terminator
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Feed a single byte
    ///
    /// Returns `Ok(Some(line))` when a terminator completes a line,
    /// `Ok(None)` when more bytes are needed, or `Err(Overflow)` when the
    /// buffer was full and has been reset.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Line>, LineError> {
        match byte {
            LINE_FEED => Ok(None),
            LINE_TERMINATOR => Ok(Some(self.take_line())),
            _ => {
                if self.buffer.push(byte).is_err() {
                    self.reset();
                    return Err(LineError::Overflow);
                }
                Ok(None)
            }
        }
    }

    /// Feed multiple bytes
    ///
    /// Returns the first complete line found, if any.
    /// Remaining bytes after a complete line are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<Line>, LineError> {
        for &byte in bytes {
            if let Some(line) = self.feed(byte)? {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    /// Hand out the buffered line and start a new one
    ///
    /// A line that is not valid UTF-8 cannot match any command, so it comes
    /// out empty and is answered as an incorrect command.
    fn take_line(&mut self) -> Line {
        let line = core::str::from_utf8(&self.buffer)
            .ok()
            .and_then(|text| Line::try_from(text).ok())
            .unwrap_or_default();
        self.reset();
        line
    }
}
