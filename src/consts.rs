/// Largest supported Flores Solis year (inclusive)
///
/// Midnight of every supported day fits in an `i64` count of Unix seconds.
pub const MAX_YEAR: i64 = 100_000_000_000;
/// Smallest supported Flores Solis year (inclusive)
pub const MIN_YEAR: i64 = -MAX_YEAR;

/// Number of months in a Flores Solis year
pub const MONTH_COUNT: u8 = 12;

/// Index of the last month (Viola)
pub const VIOLA: u8 = 11;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month names in calendar order
pub const MONTH_NAMES: [&str; MONTH_COUNT as usize] = [
    "Narcissus",
    "Serrulata",
    "Convallaria",
    "Rosa",
    "Helianthus",
    "Gladiolus",
    "Aster",
    "Tagetes",
    "Chrysanthemum",
    "Pulcherrima",
    "Galanthus",
    "Viola",
];

/// Lengths of the fixed months (everything before Viola)
pub const FIXED_MONTH_DAYS: [u8; VIOLA as usize] = [
    31, // Narcissus
    30, // Serrulata
    31, // Convallaria
    31, // Rosa
    32, // Helianthus
    31, // Gladiolus
    30, // Aster
    30, // Tagetes
    30, // Chrysanthemum
    30, // Pulcherrima
    30, // Galanthus
];

/// Viola in a year whose following Gregorian year is common
pub const VIOLA_DAYS: u8 = 29;
/// Viola in a year whose following Gregorian year is a leap year
pub const VIOLA_DAYS_LEAP: u8 = 30;

/// Gregorian month (1-based) of the Flores Solis new year
pub const ANCHOR_MONTH: u8 = 3;
/// Gregorian day of the Flores Solis new year
pub const ANCHOR_DAY: u8 = 20;

/// Era label for years >= 0
pub const ERA_PEV: &str = "PEV";
/// Era label for years < 0
pub const ERA_AEV: &str = "AEV";

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Gregorian month lengths (index 0 is unused, months are 1-indexed)
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [
    0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31,
];

/// Gregorian month abbreviations (index 0 is January)
pub const GREGORIAN_MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Mean synodic month in days
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_853;

/// New moon of 2000-01-06 18:14 UTC, in Unix seconds
pub const LUNAR_REFERENCE_UNIX_SECONDS: i64 = 947_182_440;

/// Upper bounds (exclusive, in days of lunar age) of every phase but the last
pub const PHASE_BOUNDARIES: [f64; 7] = [
    1.845_66, 5.536_99, 9.228_31, 12.919_63, 16.610_96, 20.302_28, 23.993_61,
];

/// UTC offset limits in hours (inclusive)
pub const MIN_UTC_OFFSET_HOURS: f64 = -12.0;
pub const MAX_UTC_OFFSET_HOURS: f64 = 14.0;
/// UTC offsets are expressed in quarter-hour steps
pub const UTC_OFFSET_STEPS_PER_HOUR: f64 = 4.0;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Month-first format separator (legacy US format)
pub const MONTH_FIRST_SEPARATOR: char = '/';
