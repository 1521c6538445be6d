//! HD44780 Character LCD Driver
//!
//! Driver for 16x2 HD44780-compatible LCDs wired in 4-bit mode
//! (RS, E, D4..D7) with the R/W line tied low, plus a GPIO-switched
//! backlight. The busy flag cannot be read in this wiring, so every
//! command is followed by its worst-case execution delay.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use otium_core::traits::{DisplayDriver, DisplayError};

/// Display dimensions
const ROWS: u8 = 2;
const COLS: u8 = 16;

/// DDRAM address of the first column of each row
const ROW_OFFSETS: [u8; ROWS as usize] = [0x00, 0x40];

/// HD44780 commands
#[allow(dead_code)]
mod cmd {
    pub const CLEAR: u8 = 0x01;
    pub const HOME: u8 = 0x02;
    /// Entry mode: increment, no shift
    pub const ENTRY_MODE_INC: u8 = 0x06;
    pub const DISPLAY_OFF: u8 = 0x08;
    /// Display on, cursor off, blink off
    pub const DISPLAY_ON: u8 = 0x0C;
    /// Function set: 4-bit bus, 2 lines, 5x8 font
    pub const FUNCTION_4BIT_2LINE: u8 = 0x28;
    pub const SET_DDRAM_ADDR: u8 = 0x80;
}

/// Power-on settle time before the first command
const POWER_ON_DELAY_US: u32 = 50_000;
/// Execution time of clear and home
const CLEAR_DELAY_US: u32 = 2_000;
/// Execution time of every other command and of data writes
const COMMAND_DELAY_US: u32 = 50;
/// Enable pulse width
const ENABLE_PULSE_US: u32 = 1;

/// Control and data pins of the LCD
pub struct Hd44780Pins<P> {
    pub rs: P,
    pub en: P,
    pub d4: P,
    pub d5: P,
    pub d6: P,
    pub d7: P,
}

/// HD44780 LCD driver
pub struct Hd44780<P, D> {
    pins: Hd44780Pins<P>,
    backlight: P,
    delay: D,
    backlight_on: bool,
    initialized: bool,
}

impl<P, D> Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Create a new driver; the display stays untouched until `init`
    pub fn new(pins: Hd44780Pins<P>, backlight: P, delay: D) -> Self {
        Self {
            pins,
            backlight,
            delay,
            backlight_on: false,
            initialized: false,
        }
    }

    /// Initialize the display
    ///
    /// Runs the 4-bit initialization-by-instruction sequence, clears the
    /// screen and leaves the cursor hidden.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.delay.delay_us(POWER_ON_DELAY_US);
        set(&mut self.pins.rs, false)?;
        set(&mut self.pins.en, false)?;

        // Three times 8-bit mode, then switch to 4-bit
        self.write_nibble(0x03)?;
        self.delay.delay_us(4_500);
        self.write_nibble(0x03)?;
        self.delay.delay_us(150);
        self.write_nibble(0x03)?;
        self.delay.delay_us(150);
        self.write_nibble(0x02)?;
        self.delay.delay_us(COMMAND_DELAY_US);

        let init_cmds: &[u8] = &[
            cmd::FUNCTION_4BIT_2LINE,
            cmd::DISPLAY_OFF,
            cmd::CLEAR,
            cmd::ENTRY_MODE_INC,
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c)?;
        }

        self.initialized = true;
        Ok(())
    }

    /// Check if `init` has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Send a command byte
    fn command(&mut self, byte: u8) -> Result<(), DisplayError> {
        set(&mut self.pins.rs, false)?;
        self.write_byte(byte)?;
        let wait = if byte == cmd::CLEAR || byte == cmd::HOME {
            CLEAR_DELAY_US
        } else {
            COMMAND_DELAY_US
        };
        self.delay.delay_us(wait);
        Ok(())
    }

    /// Send a character byte to the current DDRAM address
    fn data(&mut self, byte: u8) -> Result<(), DisplayError> {
        set(&mut self.pins.rs, true)?;
        self.write_byte(byte)?;
        self.delay.delay_us(COMMAND_DELAY_US);
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.write_nibble(byte >> 4)?;
        self.write_nibble(byte & 0x0F)
    }

    /// Put the low four bits on D4..D7 and pulse E
    fn write_nibble(&mut self, nibble: u8) -> Result<(), DisplayError> {
        set(&mut self.pins.d4, nibble & 0x01 != 0)?;
        set(&mut self.pins.d5, nibble & 0x02 != 0)?;
        set(&mut self.pins.d6, nibble & 0x04 != 0)?;
        set(&mut self.pins.d7, nibble & 0x08 != 0)?;

        set(&mut self.pins.en, true)?;
        self.delay.delay_us(ENABLE_PULSE_US);
        set(&mut self.pins.en, false)?;
        self.delay.delay_us(ENABLE_PULSE_US);
        Ok(())
    }

    fn ensure_ready(&self) -> Result<(), DisplayError> {
        if self.initialized {
            Ok(())
        } else {
            Err(DisplayError::Busy)
        }
    }
}

impl<P, D> DisplayDriver for Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.ensure_ready()?;
        self.command(cmd::CLEAR)
    }

    fn text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        self.ensure_ready()?;
        if row >= ROWS || col >= COLS {
            return Ok(());
        }

        self.command(cmd::SET_DDRAM_ADDR | (ROW_OFFSETS[row as usize] + col))?;

        let room = usize::from(COLS - col);
        for ch in text.chars().take(room) {
            // The character ROM only matches ASCII
            let byte = if ch.is_ascii() { ch as u8 } else { b'?' };
            self.data(byte)?;
        }
        Ok(())
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError> {
        set(&mut self.backlight, on)?;
        self.backlight_on = on;
        Ok(())
    }

    fn is_backlight_on(&self) -> bool {
        self.backlight_on
    }
}

fn set<P: OutputPin>(pin: &mut P, high: bool) -> Result<(), DisplayError> {
    let result = if high { pin.set_high() } else { pin.set_low() };
    result.map_err(|_| DisplayError::Bus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::ErrorType;
    use std::cell::RefCell;
    use std::rc::Rc;

    const RS: usize = 0;
    const EN: usize = 1;
    const D4: usize = 2;
    const BL: usize = 6;

    /// Bus shared by all mock pins; latches a nibble on each falling E edge
    #[derive(Default)]
    struct Bus {
        levels: [bool; 7],
        /// (rs, nibble) per enable pulse
        nibbles: Vec<(bool, u8)>,
        fail: bool,
    }

    impl Bus {
        /// Pair up latched nibbles after the init preamble into bytes
        fn bytes(&self, skip: usize) -> Vec<(bool, u8)> {
            self.nibbles[skip..]
                .chunks(2)
                .map(|pair| (pair[0].0, (pair[0].1 << 4) | pair[1].1))
                .collect()
        }
    }

    /// Mock GPIO pin for testing
    struct MockPin {
        line: usize,
        bus: Rc<RefCell<Bus>>,
    }

    #[derive(Debug)]
    struct PinFault;

    impl embedded_hal::digital::Error for PinFault {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    impl ErrorType for MockPin {
        type Error = PinFault;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            let mut bus = self.bus.borrow_mut();
            if bus.fail {
                return Err(PinFault);
            }
            if self.line == EN && bus.levels[EN] {
                let nibble = (0..4).fold(0u8, |acc, bit| {
                    acc | (u8::from(bus.levels[D4 + bit]) << bit)
                });
                let rs = bus.levels[RS];
                bus.nibbles.push((rs, nibble));
            }
            bus.levels[self.line] = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            let mut bus = self.bus.borrow_mut();
            if bus.fail {
                return Err(PinFault);
            }
            bus.levels[self.line] = true;
            Ok(())
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    /// Nibbles latched by `init` before its command bytes
    const PREAMBLE: usize = 4;
    /// Nibbles latched by the whole `init`
    const INIT_NIBBLES: usize = PREAMBLE + 5 * 2;

    fn lcd() -> (Hd44780<MockPin, NoDelay>, Rc<RefCell<Bus>>) {
        let bus = Rc::new(RefCell::new(Bus::default()));
        let pin = |line| MockPin {
            line,
            bus: Rc::clone(&bus),
        };
        let pins = Hd44780Pins {
            rs: pin(RS),
            en: pin(EN),
            d4: pin(D4),
            d5: pin(D4 + 1),
            d6: pin(D4 + 2),
            d7: pin(D4 + 3),
        };
        let lcd = Hd44780::new(pins, pin(BL), NoDelay);
        (lcd, bus)
    }

    #[test]
    fn test_init_sequence() {
        let (mut lcd, bus) = lcd();
        lcd.init().unwrap();
        assert!(lcd.is_initialized());

        let bus = bus.borrow();
        let preamble: Vec<u8> = bus.nibbles[..PREAMBLE].iter().map(|n| n.1).collect();
        assert_eq!(preamble, vec![0x03, 0x03, 0x03, 0x02]);
        assert_eq!(
            bus.bytes(PREAMBLE),
            vec![
                (false, 0x28),
                (false, 0x08),
                (false, 0x01),
                (false, 0x06),
                (false, 0x0C)
            ]
        );
    }

    #[test]
    fn test_use_before_init_is_busy() {
        let (mut lcd, _bus) = lcd();
        assert_eq!(lcd.clear(), Err(DisplayError::Busy));
        assert_eq!(lcd.text(0, 0, "x"), Err(DisplayError::Busy));
    }

    #[test]
    fn test_text_positions_cursor_and_writes_data() {
        let (mut lcd, bus) = lcd();
        lcd.init().unwrap();
        lcd.text(1, 3, "Hi").unwrap();

        assert_eq!(
            bus.borrow().bytes(INIT_NIBBLES),
            vec![(false, 0x80 | 0x43), (true, b'H'), (true, b'i')]
        );
    }

    #[test]
    fn test_text_clipped_to_row() {
        let (mut lcd, bus) = lcd();
        lcd.init().unwrap();
        lcd.text(0, 14, "abcdef").unwrap();
        // Address byte plus two characters
        assert_eq!(bus.borrow().bytes(INIT_NIBBLES).len(), 3);

        lcd.text(2, 0, "off screen").unwrap();
        lcd.text(0, 16, "off screen").unwrap();
        assert_eq!(bus.borrow().bytes(INIT_NIBBLES).len(), 3);
    }

    #[test]
    fn test_non_ascii_replaced() {
        let (mut lcd, bus) = lcd();
        lcd.init().unwrap();
        lcd.text(0, 0, "é").unwrap();
        assert_eq!(bus.borrow().bytes(INIT_NIBBLES)[1], (true, b'?'));
    }

    #[test]
    fn test_clear_command() {
        let (mut lcd, bus) = lcd();
        lcd.init().unwrap();
        lcd.clear().unwrap();
        assert_eq!(bus.borrow().bytes(INIT_NIBBLES), vec![(false, 0x01)]);
    }

    #[test]
    fn test_backlight_toggle() {
        let (mut lcd, bus) = lcd();
        assert!(!lcd.is_backlight_on());

        lcd.set_backlight(true).unwrap();
        assert!(lcd.is_backlight_on());
        assert!(bus.borrow().levels[BL]);

        lcd.toggle_backlight().unwrap();
        assert!(!lcd.is_backlight_on());
        assert!(!bus.borrow().levels[BL]);
    }

    #[test]
    fn test_pin_error_maps_to_bus() {
        let (mut lcd, bus) = lcd();
        lcd.init().unwrap();
        bus.borrow_mut().fail = true;
        assert_eq!(lcd.clear(), Err(DisplayError::Bus));
        assert_eq!(lcd.set_backlight(true), Err(DisplayError::Bus));
        assert!(!lcd.is_backlight_on());
    }
}
