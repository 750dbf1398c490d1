use chrono::{Datelike, NaiveDate};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Canonical day counts, February before leap adjustment.
const MONTH_DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// The grid always lays out this many day slots; slots past the month's
/// length are disabled, never removed.
pub const GRID_SLOTS: usize = 31;

pub const GRID_COLS: u16 = 7;
pub const GRID_ROWS: u16 = 6;

/// Standard proleptic Gregorian rule.
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let base = MONTH_DAYS[(month - 1) as usize];
    if month == 2 && is_leap_year(year) {
        base + 1
    } else {
        base
    }
}

/// Column of day 1 in a week that starts on Sunday (0=Sun..6=Sat).
#[must_use]
pub fn weekday_offset(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DaySlot {
    pub row: u16,
    pub col: u16,
    pub enabled: bool,
    pub weekend: bool,
}

/// Layout and enablement for one (year, month) pair. Rebuilt wholesale on
/// every month or year change so no flags leak from the prior month.
#[derive(Clone, Debug)]
pub struct DayGrid {
    pub year: i32,
    pub month: u32,
    pub offset: u32,
    pub day_count: u32,
    slots: [DaySlot; GRID_SLOTS],
}

impl DayGrid {
    #[must_use]
    pub fn build(year: i32, month: u32) -> Self {
        let offset = weekday_offset(year, month);
        let day_count = days_in_month(year, month);

        let mut slots = [DaySlot {
            row: 0,
            col: 0,
            enabled: false,
            weekend: false,
        }; GRID_SLOTS];

        for (i, slot) in slots.iter_mut().enumerate() {
            let cell = i as u32 + offset;
            let col = (cell % 7) as u16;
            slot.row = (cell / 7) as u16;
            slot.col = col;
            slot.enabled = (i as u32) < day_count;
            slot.weekend = col == 0 || col == 6;
        }

        Self {
            year,
            month,
            offset,
            day_count,
            slots,
        }
    }

    /// Slot for the given day (1-indexed).
    #[must_use]
    pub fn slot(&self, day: u32) -> Option<&DaySlot> {
        self.slots.get((day as usize).checked_sub(1)?)
    }

    pub fn slots(&self) -> impl Iterator<Item = (u32, &DaySlot)> {
        self.slots.iter().enumerate().map(|(i, s)| (i as u32 + 1, s))
    }

    #[must_use]
    pub fn is_enabled(&self, day: u32) -> bool {
        self.slot(day).is_some_and(|s| s.enabled)
    }

    #[must_use]
    pub fn enabled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.enabled).count()
    }
}
