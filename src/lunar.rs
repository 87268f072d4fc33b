//! Fixed-period lunar phase estimate.
//!
//! The moon's age is the time since a reference new moon, reduced modulo the
//! mean synodic month. It drifts from the true phase by up to about a day and
//! is meant for display, not for astronomy.

use serde::{Deserialize, Serialize};

use crate::consts::{
    LUNAR_REFERENCE_UNIX_SECONDS, PHASE_BOUNDARIES, SECONDS_PER_DAY, SYNODIC_MONTH_DAYS,
};
use crate::gregorian::{GregorianDate, Timestamp};
use crate::prelude::*;

/// One of the eight named phases, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum LunarPhase {
    #[display(fmt = "New Moon")]
    NewMoon,
    #[display(fmt = "Waxing Crescent")]
    WaxingCrescent,
    #[display(fmt = "First Quarter")]
    FirstQuarter,
    #[display(fmt = "Waxing Gibbous")]
    WaxingGibbous,
    #[display(fmt = "Full Moon")]
    FullMoon,
    #[display(fmt = "Waning Gibbous")]
    WaningGibbous,
    #[display(fmt = "Last Quarter")]
    LastQuarter,
    #[display(fmt = "Waning Crescent")]
    WaningCrescent,
}

impl LunarPhase {
    pub const ALL: [Self; 8] = [
        Self::NewMoon,
        Self::WaxingCrescent,
        Self::FirstQuarter,
        Self::WaxingGibbous,
        Self::FullMoon,
        Self::WaningGibbous,
        Self::LastQuarter,
        Self::WaningCrescent,
    ];

    /// Phase for a lunar age in days, expected in `[0, SYNODIC_MONTH_DAYS)`
    pub fn from_age(age: f64) -> Self {
        let index = PHASE_BOUNDARIES
            .iter()
            .position(|&upper| age < upper)
            .unwrap_or(PHASE_BOUNDARIES.len());
        Self::ALL[index]
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::NewMoon => "\u{1F311}",
            Self::WaxingCrescent => "\u{1F312}",
            Self::FirstQuarter => "\u{1F313}",
            Self::WaxingGibbous => "\u{1F314}",
            Self::FullMoon => "\u{1F315}",
            Self::WaningGibbous => "\u{1F316}",
            Self::LastQuarter => "\u{1F317}",
            Self::WaningCrescent => "\u{1F318}",
        }
    }
}

/// Days since the last new moon at `instant`, in `[0, SYNODIC_MONTH_DAYS)`.
#[allow(clippy::cast_precision_loss)]
pub fn lunar_age(instant: Timestamp) -> f64 {
    let seconds = instant.unix_seconds() as f64 - LUNAR_REFERENCE_UNIX_SECONDS as f64;
    let days = seconds / SECONDS_PER_DAY as f64;
    let age = (days % SYNODIC_MONTH_DAYS + SYNODIC_MONTH_DAYS) % SYNODIC_MONTH_DAYS;
    // float rounding can land exactly on the period for tiny negative ages
    if age >= SYNODIC_MONTH_DAYS { 0.0 } else { age }
}

pub fn phase_at(instant: Timestamp) -> LunarPhase {
    LunarPhase::from_age(lunar_age(instant))
}

/// Phase at midnight starting `date`.
pub fn phase_of(date: GregorianDate) -> LunarPhase {
    phase_at(date.midnight())
}
