//! Current-position state machine.
//!
//! A [`NavigationState`] is either *live*, following the displayed instant
//! on every tick, or *manual*, frozen until the next explicit command. Any
//! explicit navigation switches to manual; only [`Command::ReturnToNow`]
//! switches back.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::calendar::{MonthTable, month_table};
use crate::consts::{MAX_YEAR, MIN_YEAR, MONTH_COUNT};
use crate::convert::{flores_to_gregorian, gregorian_to_flores};
use crate::gregorian::{GregorianDate, Timestamp};
use crate::lunar::{LunarPhase, phase_of};
use crate::prelude::*;
use crate::types::{Day, Era, Month};
use crate::{CalendarError, FloresDate};

/// Whether the position follows the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum Mode {
    #[display(fmt = "live")]
    Live,
    #[display(fmt = "manual")]
    Manual,
}

/// Every operation the state machine accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Go to an explicit Flores Solis date; rejected if the day does not exist
    SetExplicit { year: i64, month: u8, day: u8 },
    SetFromGregorian(GregorianDate),
    /// Parse a Gregorian date string and go there
    ParseGregorian(String),
    /// Move to the displayed instant without changing mode
    JumpToNow(Timestamp),
    /// Move to the displayed instant and resume following the clock
    ReturnToNow(Timestamp),
    ShiftDay(i64),
    ShiftMonth(i64),
    JumpToYear(i64),
    /// Periodic clock tick carrying the displayed instant
    Tick(Timestamp),
}

/// The current position and whether it follows the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    position: FloresDate,
    follow_live: bool,
}

/// Everything a view needs after a mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub position: FloresDate,
    pub month_table: MonthTable,
    pub era: Era,
    pub display_year: u64,
    pub gregorian: GregorianDate,
    pub phase: LunarPhase,
    pub mode: Mode,
}

impl NavigationState {
    /// Starts in live mode at the date of `displayed`.
    pub fn new(displayed: Timestamp) -> Self {
        Self {
            position: gregorian_to_flores(displayed.date()),
            follow_live: true,
        }
    }

    /// Starts in manual mode at `position`.
    pub const fn at(position: FloresDate) -> Self {
        Self {
            position,
            follow_live: false,
        }
    }

    pub const fn position(&self) -> FloresDate {
        self.position
    }

    pub const fn follow_live(&self) -> bool {
        self.follow_live
    }

    pub const fn mode(&self) -> Mode {
        if self.follow_live {
            Mode::Live
        } else {
            Mode::Manual
        }
    }

    /// # Errors
    /// Returns the validation error and leaves the state unchanged if the
    /// year, month or day is out of range.
    pub fn set_explicit(&mut self, year: i64, month: u8, day: u8) -> Result<(), CalendarError> {
        let position = FloresDate::new(year, month, day)?;
        self.follow_live = false;
        self.move_to(position);
        Ok(())
    }

    pub fn set_from_gregorian(&mut self, date: GregorianDate) {
        self.follow_live = false;
        self.move_to(gregorian_to_flores(date));
    }

    /// # Errors
    /// Returns the parse error and leaves the state unchanged if `input`
    /// is not a Gregorian date.
    pub fn set_from_gregorian_str(&mut self, input: &str) -> Result<(), CalendarError> {
        let date = input.parse::<GregorianDate>()?;
        self.set_from_gregorian(date);
        Ok(())
    }

    /// Moves to the date of `displayed`, keeping the current mode.
    /// Returns whether the date changed.
    pub fn set_to_now(&mut self, displayed: Timestamp) -> bool {
        self.move_to(gregorian_to_flores(displayed.date()))
    }

    pub fn return_to_now(&mut self, displayed: Timestamp) -> bool {
        if !self.follow_live {
            info!("following the clock again");
        }
        self.follow_live = true;
        self.set_to_now(displayed)
    }

    /// Handles a clock tick. Only a change of date moves the position.
    pub fn tick(&mut self, displayed: Timestamp) -> bool {
        if !self.follow_live {
            return false;
        }
        let changed = self.set_to_now(displayed);
        if !changed {
            trace!(instant = displayed.unix_seconds(), "tick without date change");
        }
        changed
    }

    /// Moves `n` days, crossing month and year boundaries as needed.
    ///
    /// Goes through the Gregorian day count, so the result equals `n`
    /// single-day steps in constant time. Stops at the first and last day
    /// of the supported range.
    pub fn shift_day(&mut self, n: i64) {
        self.follow_live = false;
        let target = flores_to_gregorian(self.position).add_days(n);
        self.move_to(gregorian_to_flores(target));
    }

    /// Moves `n` months, wrapping into adjacent years, and pulls the day
    /// back to the end of a shorter month.
    pub fn shift_month(&mut self, n: i64) {
        self.follow_live = false;
        let months = i128::from(MONTH_COUNT);
        let first = i128::from(MIN_YEAR) * months;
        let last = i128::from(MAX_YEAR) * months + months - 1;
        let current = i128::from(self.position.year()) * months
            + i128::from(self.position.month().get());
        let target = (current + i128::from(n)).clamp(first, last);

        // both fit after clamping to the supported range
        let year = i64::try_from(target.div_euclid(months)).unwrap_or(MAX_YEAR);
        let index = u8::try_from(target.rem_euclid(months)).unwrap_or(0);
        let month = Month::new(index).unwrap_or(Month::FIRST);
        self.move_to(clamp_day(year, month, self.position.day()));
    }

    /// Changes the year, keeping the month and clamping the day.
    pub fn jump_to_year(&mut self, year: i64) {
        self.follow_live = false;
        let year = year.clamp(MIN_YEAR, MAX_YEAR);
        self.move_to(clamp_day(year, self.position.month(), self.position.day()));
    }

    /// Dispatches a command. Returns whether the position changed.
    ///
    /// # Errors
    /// Only [`Command::SetExplicit`] and [`Command::ParseGregorian`] can fail;
    /// on failure nothing is modified.
    pub fn apply(&mut self, command: Command) -> Result<bool, CalendarError> {
        let before = self.position;
        match command {
            Command::SetExplicit { year, month, day } => self.set_explicit(year, month, day)?,
            Command::SetFromGregorian(date) => self.set_from_gregorian(date),
            Command::ParseGregorian(input) => self.set_from_gregorian_str(&input)?,
            Command::JumpToNow(displayed) => {
                self.set_to_now(displayed);
            }
            Command::ReturnToNow(displayed) => {
                self.return_to_now(displayed);
            }
            Command::ShiftDay(n) => self.shift_day(n),
            Command::ShiftMonth(n) => self.shift_month(n),
            Command::JumpToYear(year) => self.jump_to_year(year),
            Command::Tick(displayed) => {
                self.tick(displayed);
            }
        }
        Ok(self.position != before)
    }

    pub fn month_table(&self) -> MonthTable {
        month_table(self.position.year())
    }

    pub fn snapshot(&self) -> Snapshot {
        let gregorian = flores_to_gregorian(self.position);
        Snapshot {
            position: self.position,
            month_table: self.month_table(),
            era: self.position.era(),
            display_year: self.position.display_year(),
            gregorian,
            phase: phase_of(gregorian),
            mode: self.mode(),
        }
    }

    fn move_to(&mut self, position: FloresDate) -> bool {
        if position == self.position {
            return false;
        }
        debug!(from = %self.position, to = %position, mode = %self.mode(), "position changed");
        self.position = position;
        true
    }
}

fn clamp_day(year: i64, month: Month, day: Day) -> FloresDate {
    let length = month_table(year).length(month);
    FloresDate::from_parts(year, month, Day::clamped(day.get(), length))
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = self.position.month();
        writeln!(f, "{} {} {}", month, self.display_year, self.era)?;
        writeln!(f, "Day: {} of {}", self.position.day(), self.month_table.length(month))?;
        writeln!(f, "Gregorian: {}", self.gregorian.to_long_string())?;
        write!(f, "Lunar Phase: {} {}", self.phase.symbol(), self.phase)
    }
}
