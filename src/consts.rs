/// Number of months in an Ethiopic year, including Pagumen
pub const MONTHS_PER_YEAR: u8 = 13;

/// Month number of Meskerem, the first month
pub const MESKEREM: u8 = 1;

/// Month number of Pagumen, the short intercalary 13th month
pub const PAGUMEN: u8 = 13;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Days in each of the twelve regular months
pub const DAYS_PER_MONTH: u8 = 30;

/// Days in Pagumen in a common year
pub const PAGUMEN_DAYS: u8 = 5;

/// Days in Pagumen in a leap year
pub const PAGUMEN_DAYS_LEAP: u8 = 6;

/// Days in a common year
pub const DAYS_PER_YEAR: u16 = 365;

/// Days in a leap year
pub const DAYS_PER_LEAP_YEAR: u16 = 366;

/// Leap year occurs every 4 years...
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// ...in the year whose floor-mod-4 remainder is 3
pub(crate) const LEAP_YEAR_REMAINDER: i32 = 3;
/// Days in one full 4-year leap cycle (4 * 365 + 1)
pub(crate) const DAYS_PER_LEAP_CYCLE: i64 = 1461;

/// Offset between the Ethiopic day count and the ISO epoch day scale.
///
/// Encodes the fixed alignment 0001-01-01 Ethiopic = 0008-08-27 ISO:
/// day one of the Ethiopic calendar falls 716366 days before
/// 1970-01-01 Gregorian.
pub(crate) const ISO_EPOCH_OFFSET: i64 = 716_367;

/// Seconds per day, for turning a wall-clock reading into an epoch day
pub(crate) const SECONDS_PER_DAY: i64 = 86_400;

/// Date component separator (ISO 8601 style)
pub const DATE_SEPARATOR: char = '-';
/// Range separator between the start and end dates of a range
pub const RANGE_SEPARATOR: char = '/';

/// Romanized month names, keyed by `month - 1`
pub const MONTH_NAMES: [&str; 13] = [
    "Meskerem", // 1
    "Tikimt",   // 2
    "Hidar",    // 3
    "Tahsas",   // 4
    "Tir",      // 5
    "Yekatit",  // 6
    "Megabit",  // 7
    "Miyazya",  // 8
    "Ginbot",   // 9
    "Sene",     // 10
    "Hamle",    // 11
    "Nehase",   // 12
    "Pagumen",  // 13
];

/// Amharic month names, keyed by `month - 1`
pub const MONTH_NAMES_AMHARIC: [&str; 13] = [
    "መስከረም", // 1
    "ጥቅምት",  // 2
    "ኅዳር",   // 3
    "ታኅሳስ",  // 4
    "ጥር",    // 5
    "የካቲት",  // 6
    "መጋቢት",  // 7
    "ሚያዝያ",  // 8
    "ግንቦት",  // 9
    "ሰኔ",    // 10
    "ሐምሌ",   // 11
    "ነሐሴ",   // 12
    "ጳጉሜን",  // 13
];
