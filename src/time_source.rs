//! The displayed instant: true UTC time shifted by a configured offset.
//!
//! Nothing in here reads the system clock except [`SystemClock`]; every
//! computation takes the current instant as an argument.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::CalendarError;
use crate::consts::{
    MAX_UTC_OFFSET_HOURS, MIN_UTC_OFFSET_HOURS, SECONDS_PER_HOUR, UTC_OFFSET_STEPS_PER_HOUR,
};
use crate::gregorian::Timestamp;

const SECONDS_PER_STEP: i64 = 900;

/// Offset applied to UTC to get the instant shown to the user.
///
/// The base offset is a whole number of quarter hours between -12 and +14.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawUtcOffset", into = "RawUtcOffset")]
pub struct UtcOffset {
    quarter_hours: i16,
    extra_seconds: i64,
    dst: bool,
}

/// Serialized form of [`UtcOffset`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawUtcOffset {
    base_hours: f64,
    #[serde(default)]
    extra_seconds: i64,
    #[serde(default)]
    dst: bool,
}

impl UtcOffset {
    pub const UTC: Self = Self {
        quarter_hours: 0,
        extra_seconds: 0,
        dst: false,
    };

    /// Creates an offset of `hours` from UTC.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidUtcOffset` unless `hours` is a finite
    /// multiple of 0.25 within `-12..=14`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_hours(hours: f64) -> Result<Self, CalendarError> {
        let steps = hours * UTC_OFFSET_STEPS_PER_HOUR;
        if !hours.is_finite()
            || !(MIN_UTC_OFFSET_HOURS..=MAX_UTC_OFFSET_HOURS).contains(&hours)
            || steps.fract() != 0.0
        {
            return Err(CalendarError::InvalidUtcOffset { hours });
        }
        Ok(Self {
            // within -48..=56 after the checks above
            quarter_hours: steps as i16,
            ..Self::UTC
        })
    }

    #[must_use]
    pub const fn with_extra_seconds(self, extra_seconds: i64) -> Self {
        Self {
            extra_seconds,
            ..self
        }
    }

    #[must_use]
    pub const fn with_dst(self, dst: bool) -> Self {
        Self { dst, ..self }
    }

    pub fn base_hours(&self) -> f64 {
        f64::from(self.quarter_hours) / UTC_OFFSET_STEPS_PER_HOUR
    }

    pub const fn extra_seconds(&self) -> i64 {
        self.extra_seconds
    }

    pub const fn dst(&self) -> bool {
        self.dst
    }

    /// Total shift from UTC in seconds
    pub const fn total_seconds(&self) -> i64 {
        let dst = if self.dst { SECONDS_PER_HOUR } else { 0 };
        self.quarter_hours as i64 * SECONDS_PER_STEP + self.extra_seconds.saturating_add(dst)
    }
}

impl TryFrom<RawUtcOffset> for UtcOffset {
    type Error = CalendarError;

    fn try_from(raw: RawUtcOffset) -> Result<Self, Self::Error> {
        Ok(Self::from_hours(raw.base_hours)?
            .with_extra_seconds(raw.extra_seconds)
            .with_dst(raw.dst))
    }
}

impl From<UtcOffset> for RawUtcOffset {
    fn from(offset: UtcOffset) -> Self {
        Self {
            base_hours: offset.base_hours(),
            extra_seconds: offset.extra_seconds,
            dst: offset.dst,
        }
    }
}

/// The instant shown to the user for the true UTC instant `now`.
pub const fn displayed_instant(now: Timestamp, offset: &UtcOffset) -> Timestamp {
    now.add_seconds(offset.total_seconds())
}

/// Source of the true current instant.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// The operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_system_time(SystemTime::now())
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: Timestamp,
}

impl FixedClock {
    pub const fn new(now: Timestamp) -> Self {
        Self { now }
    }

    pub const fn advance(&mut self, seconds: i64) {
        self.now = self.now.add_seconds(seconds);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.now
    }
}
