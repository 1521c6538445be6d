//! View rendering
//!
//! Each tick the clock renders one view into a [`Screen`] and redraws the
//! display from it. The screen is a plain buffer so views can be tested
//! without a display attached.

use core::fmt::Write;

use heapless::String;

use crate::calendar::ClockState;
use crate::retirement::{retirement_year, Birthday};
use crate::runtime::Runtime;
use crate::state::DisplayMode;
use crate::traits::{DisplayDriver, DisplayError};

/// Display rows
pub const ROWS: usize = 2;
/// Display columns
pub const COLS: usize = 16;

/// Text of one display row
pub type RowText = String<COLS>;

/// One row of a screen: text starting at a column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenLine {
    pub col: u8,
    pub text: RowText,
}

/// Contents of the whole display
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    lines: [ScreenLine; ROWS],
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blank every row
    pub fn clear(&mut self) {
        for line in self.lines.iter_mut() {
            line.col = 0;
            line.text.clear();
        }
    }

    /// Set the text of a row, truncated to what fits after `col`
    ///
    /// Rows past the bottom of the display are ignored.
    pub fn set_line(&mut self, row: usize, col: u8, text: &str) {
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };
        line.col = col;
        line.text.clear();
        let room = COLS.saturating_sub(usize::from(col));
        for ch in text.chars().take(room) {
            if line.text.push(ch).is_err() {
                break;
            }
        }
    }

    /// Row contents, if `row` is on the display
    pub fn line(&self, row: usize) -> Option<&ScreenLine> {
        self.lines.get(row)
    }

    /// Text of a row, empty for rows off the display
    pub fn text(&self, row: usize) -> &str {
        self.lines.get(row).map_or("", |line| line.text.as_str())
    }

    /// Clear the display and write every non-empty row
    pub fn draw<D: DisplayDriver>(&self, display: &mut D) -> Result<(), DisplayError> {
        display.clear()?;
        for (row, line) in self.lines.iter().enumerate() {
            if line.text.is_empty() {
                continue;
            }
            display.text(row as u8, line.col, &line.text)?;
        }
        Ok(())
    }
}

/// Renders the clock views into a screen buffer
#[derive(Debug, Default)]
pub struct Renderer {
    screen: Screen,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the view for this tick
    ///
    /// The retirement message replaces whatever `mode` would show.
    pub fn render(
        &mut self,
        mode: DisplayMode,
        now: &ClockState,
        birthday: &Birthday,
        retirement_age: u16,
        runtime: &Runtime,
        retired: bool,
    ) -> &Screen {
        if retired {
            return self.render_retired();
        }
        match mode {
            DisplayMode::Clock => self.render_clock(now),
            DisplayMode::Countdown => self.render_countdown(birthday, retirement_age),
            DisplayMode::Runtime => self.render_runtime(runtime),
        }
    }

    /// `HH:MM:SS` over `D.M.YYYY`
    pub fn render_clock(&mut self, now: &ClockState) -> &Screen {
        let mut time = RowText::new();
        let _ = write!(time, "{:02}:{:02}:{:02}", now.hour, now.minute, now.second);
        let mut date = RowText::new();
        let _ = write!(date, "{}.{}.{}", now.day, now.month, now.year);
        self.show(&time, &date)
    }

    /// Retirement date over a label
    pub fn render_countdown(&mut self, birthday: &Birthday, retirement_age: u16) -> &Screen {
        let mut date = RowText::new();
        let _ = write!(
            date,
            "{}.{}.{}",
            birthday.day,
            birthday.month,
            retirement_year(birthday, retirement_age)
        );
        self.show(&date, "Retirement date")
    }

    /// `D:H:M:S` since boot over a label
    pub fn render_runtime(&mut self, runtime: &Runtime) -> &Screen {
        let up = runtime.to_dhms();
        let mut text = RowText::new();
        let _ = write!(text, "{}:{}:{}:{}", up.days, up.hours, up.minutes, up.seconds);
        self.show(&text, "System runtime")
    }

    /// The retirement message, centred
    pub fn render_retired(&mut self) -> &Screen {
        self.screen.clear();
        self.screen.set_line(0, 4, "Go home,");
        self.screen.set_line(1, 3, "old timer!");
        &self.screen
    }

    fn show(&mut self, top: &str, bottom: &str) -> &Screen {
        self.screen.clear();
        self.screen.set_line(0, 0, top);
        self.screen.set_line(1, 0, bottom);
        &self.screen
    }
}
