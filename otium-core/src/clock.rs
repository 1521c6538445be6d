//! The clock aggregate
//!
//! `Clock` owns every piece of mutable application state: wall-clock time,
//! birthday, runtime counter, display mode and the retirement flag. The
//! firmware hands it one event at a time, so handlers never interleave.

use otium_protocol::{Command, Fields, Response};

use crate::calendar::ClockState;
use crate::config::ClockConfig;
use crate::retirement::{is_retired, Birthday};
use crate::runtime::Runtime;
use crate::state::{DisplayMode, Event};
use crate::traits::{AlarmOutput, DisplayDriver, DisplayError};
use crate::view::Renderer;

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickOutcome {
    /// The retirement message was shown on this tick
    pub retired: bool,
    /// The alarm output was switched on or off by this tick
    pub alarm_changed: bool,
}

/// Result of handling one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// A tick was processed
    Ticked(TickOutcome),
    /// The button moved the display to a new mode
    ModeChanged(DisplayMode),
    /// A console line was executed, with its response if it has one
    Replied(Option<Response>),
}

/// Retirement clock state and behaviour
#[derive(Debug)]
pub struct Clock {
    time: ClockState,
    birthday: Birthday,
    retirement_age: u16,
    runtime: Runtime,
    mode: DisplayMode,
    retired: bool,
    renderer: Renderer,
}

impl Clock {
    /// Create a clock in its boot state
    pub fn new(config: &ClockConfig) -> Self {
        Self {
            time: config.start,
            birthday: config.birthday,
            retirement_age: config.retirement_age,
            runtime: Runtime::new(),
            mode: DisplayMode::default(),
            retired: false,
            renderer: Renderer::new(),
        }
    }

    pub fn time(&self) -> &ClockState {
        &self.time
    }

    pub fn birthday(&self) -> &Birthday {
        &self.birthday
    }

    pub fn retirement_age(&self) -> u16 {
        self.retirement_age
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Whether the last tick found the owner retired
    pub fn is_retired(&self) -> bool {
        self.retired
    }

    /// Handle one event to completion
    pub fn handle<D, A>(
        &mut self,
        event: &Event,
        display: &mut D,
        alarm: &mut A,
    ) -> Result<Outcome, DisplayError>
    where
        D: DisplayDriver,
        A: AlarmOutput,
    {
        match event {
            Event::Tick => self.tick(display, alarm).map(Outcome::Ticked),
            Event::ButtonPressed => Ok(Outcome::ModeChanged(self.button_pressed())),
            Event::Line(line) => self.execute_line(line, display).map(Outcome::Replied),
        }
    }

    /// Advance one second and redraw
    ///
    /// The runtime, calendar and retirement flag are all updated before the
    /// alarm or display is touched, so a display error never loses a second.
    pub fn tick<D, A>(&mut self, display: &mut D, alarm: &mut A) -> Result<TickOutcome, DisplayError>
    where
        D: DisplayDriver,
        A: AlarmOutput,
    {
        self.runtime.increment();
        self.time = self.time.advance_one_second();
        self.retired = is_retired(&self.time, &self.birthday, self.retirement_age);

        let alarm_changed = alarm.is_on() != self.retired;
        if alarm_changed {
            alarm.set_on(self.retired);
        }

        let screen = self.renderer.render(
            self.mode,
            &self.time,
            &self.birthday,
            self.retirement_age,
            &self.runtime,
            self.retired,
        );
        screen.draw(display)?;

        Ok(TickOutcome {
            retired: self.retired,
            alarm_changed,
        })
    }

    /// Cycle to the next display mode
    ///
    /// The new view appears on the next tick.
    pub fn button_pressed(&mut self) -> DisplayMode {
        self.mode = self.mode.transition(&Event::ButtonPressed);
        self.mode
    }

    /// Parse and execute one console line
    pub fn execute_line<D: DisplayDriver>(
        &mut self,
        line: &str,
        display: &mut D,
    ) -> Result<Option<Response>, DisplayError> {
        self.execute(&Command::parse(line), display)
    }

    /// Execute a console command
    ///
    /// Returns the response line to send back, if the command has one.
    pub fn execute<D: DisplayDriver>(
        &mut self,
        command: &Command,
        display: &mut D,
    ) -> Result<Option<Response>, DisplayError> {
        let response = match command {
            Command::SetDateTime(fields) => {
                self.set_datetime(fields);
                None
            }
            Command::GetDateTime => Some(Response::DateTime {
                day: self.time.day,
                month: self.time.month,
                year: self.time.year,
                hour: self.time.hour,
                minute: self.time.minute,
                second: self.time.second,
            }),
            Command::SetBirthday(fields) => {
                self.set_birthday(fields);
                None
            }
            Command::GetBirthday => Some(Response::Birthday {
                day: self.birthday.day,
                month: self.birthday.month,
                year: self.birthday.year,
            }),
            Command::ToggleBacklight => {
                display.toggle_backlight()?;
                Some(Response::BacklightToggled)
            }
            Command::Unknown => Some(Response::IncorrectCommand),
        };
        Ok(response)
    }

    /// Overwrite day, month, year, hour, minute, second in that order
    ///
    /// Values are stored as given, truncated to the field width.
    fn set_datetime(&mut self, fields: &Fields) {
        for (index, &value) in fields.iter().enumerate() {
            match index {
                0 => self.time.day = value as u8,
                1 => self.time.month = value as u8,
                2 => self.time.year = value,
                3 => self.time.hour = value as u8,
                4 => self.time.minute = value as u8,
                5 => self.time.second = value as u8,
                _ => {}
            }
        }
    }

    /// Overwrite day, month, year in that order
    fn set_birthday(&mut self, fields: &Fields) {
        for (index, &value) in fields.iter().enumerate() {
            match index {
                0 => self.birthday.day = value as u8,
                1 => self.birthday.month = value as u8,
                2 => self.birthday.year = value,
                _ => {}
            }
        }
    }
}
