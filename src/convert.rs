//! Gregorian <-> Flores Solis date mapping.
//!
//! Flores Solis year `y` starts on Gregorian March 20 of year `y` and ends on
//! the day before March 20 of year `y + 1`.

use crate::FloresDate;
use crate::calendar::month_table;
use crate::consts::{ANCHOR_DAY, ANCHOR_MONTH};
use crate::gregorian::GregorianDate;
use crate::types::{Day, Month};

/// Gregorian date of the first day of Flores Solis year `year`.
///
/// Year, month and day are all set explicitly, so small years are never
/// reinterpreted as 19xx.
pub const fn anchor(year: i64) -> GregorianDate {
    GregorianDate::from_ymd_unchecked(year, ANCHOR_MONTH, ANCHOR_DAY)
}

/// Maps a Gregorian date onto the Flores Solis calendar.
pub fn gregorian_to_flores(date: GregorianDate) -> FloresDate {
    let gregorian_year = date.year();
    let year = if date >= anchor(gregorian_year) {
        gregorian_year
    } else {
        gregorian_year - 1
    };

    // 0..days_in_year by construction
    let mut remaining = date.days_since(anchor(year));
    let table = month_table(year);
    let mut month = Month::FIRST;
    for info in &table {
        let length = i64::from(info.length);
        if remaining < length || info.month == Month::LAST {
            break;
        }
        remaining -= length;
        month = month.succ();
    }

    let length = table.length(month);
    let day = u8::try_from(remaining + 1).unwrap_or(length);
    FloresDate::from_parts(year, month, Day::clamped(day, length))
}

/// Maps a Flores Solis date back onto the Gregorian calendar.
pub fn flores_to_gregorian(date: FloresDate) -> GregorianDate {
    let table = month_table(date.year());
    let offset = i64::from(date.day().get() - 1) + i64::from(table.days_before(date.month()));
    anchor(date.year()).add_days(offset)
}

impl From<GregorianDate> for FloresDate {
    fn from(date: GregorianDate) -> Self {
        gregorian_to_flores(date)
    }
}

impl From<FloresDate> for GregorianDate {
    fn from(date: FloresDate) -> Self {
        flores_to_gregorian(date)
    }
}
