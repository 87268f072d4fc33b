//! Month tables of the Flores Solis calendar.
//!
//! A year has eleven fixed months followed by Viola, whose length depends on
//! the leap status of the *following* Gregorian year. Tables are cheap values
//! and are rebuilt for every year they are asked about.

use serde::Serialize;

use crate::consts::{FIXED_MONTH_DAYS, MONTH_COUNT, MONTH_NAMES};
use crate::types::{Month, viola_length};

/// One entry of a month table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MonthInfo {
    pub month: Month,
    pub name: &'static str,
    pub length: u8,
}

/// The twelve months of one Flores Solis year, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MonthTable {
    year: i64,
    months: [MonthInfo; MONTH_COUNT as usize],
}

/// Builds the month table for `year`.
pub fn month_table(year: i64) -> MonthTable {
    MonthTable::for_year(year)
}

impl MonthTable {
    pub fn for_year(year: i64) -> Self {
        let months = std::array::from_fn(|i| {
            let length = FIXED_MONTH_DAYS
                .get(i)
                .copied()
                .unwrap_or_else(|| viola_length(year));
            MonthInfo {
                month: Month::all().nth(i).unwrap_or(Month::LAST),
                name: MONTH_NAMES[i],
                length,
            }
        });
        Self { year, months }
    }

    /// The Flores Solis year this table describes
    pub const fn year(&self) -> i64 {
        self.year
    }

    pub const fn get(&self, month: Month) -> MonthInfo {
        self.months[month.index()]
    }

    /// Number of days in `month`
    pub const fn length(&self, month: Month) -> u8 {
        self.get(month).length
    }

    /// Days from the first of the year to the first of `month`
    pub fn days_before(&self, month: Month) -> u16 {
        self.months[..month.index()]
            .iter()
            .map(|info| u16::from(info.length))
            .sum()
    }

    /// 366 when Viola has its leap day, 365 otherwise
    pub fn days_in_year(&self) -> u16 {
        self.months.iter().map(|info| u16::from(info.length)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MonthInfo> {
        self.months.iter()
    }
}

impl<'a> IntoIterator for &'a MonthTable {
    type Item = &'a MonthInfo;
    type IntoIter = std::slice::Iter<'a, MonthInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.months.iter()
    }
}
