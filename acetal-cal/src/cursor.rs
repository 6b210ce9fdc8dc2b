use chrono::NaiveDate;

use crate::error::CalError;

/// Year the calendar opens on. There is no "today" detection.
pub const INITIAL_YEAR: i32 = 2024;
/// Month the calendar opens on.
pub const INITIAL_MONTH: u32 = 5;

const MONTH_NAMES: [&str; 12] = [
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

/// The (year, month) pair currently displayed.
///
/// Always a valid month: the only way to obtain one is through [`CalendarCursor::new`],
/// [`CalendarCursor::initial`] or [`CalendarCursor::advance`], and all of them keep
/// `month` within `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarCursor {
    year: i32,
    month: u32,
}

impl CalendarCursor {
    pub fn new(year: i32, month: u32) -> Result<Self, CalError> {
        if !(1..=12).contains(&month) {
            return Err(CalError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The fixed starting point of the application.
    pub fn initial() -> Self {
        Self {
            year: INITIAL_YEAR,
            month: INITIAL_MONTH,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns `(year, month)`.
    pub fn current(&self) -> (i32, u32) {
        (self.year, self.month)
    }

    /// Moves by `delta` months, carrying into the year.
    ///
    /// Month 0 wraps to December of the previous year and month 13 to January
    /// of the next one.
    pub fn advance(self, delta: i32) -> Self {
        let index = self.year as i64 * 12 + (self.month as i64 - 1) + delta as i64;
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn prev(self) -> Self {
        self.advance(-1)
    }

    pub fn next(self) -> Self {
        self.advance(1)
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Human-readable header text, e.g. `May 2024`.
    pub fn label(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn days_in_month(&self) -> u32 {
        let next = self.next();
        match (self.first_day(), next.first_day()) {
            (Some(first), Some(following)) => (following - first).num_days() as u32,
            _ => 0,
        }
    }

    /// The concrete date for `day` of this month, if it exists.
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }
}

impl Default for CalendarCursor {
    fn default() -> Self {
        Self::initial()
    }
}

impl std::fmt::Display for CalendarCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
