use chrono::Datelike;

use crate::cursor::CalendarCursor;

/// Column headers, weeks start on Sunday.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One calendar row. `None` marks a slot outside the month.
pub type Week = [Option<u32>; 7];

/// Week-by-weekday layout of a month.
///
/// Derived entirely from a [`CalendarCursor`] and rebuilt from scratch on every
/// navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGrid {
    cursor: CalendarCursor,
    weeks: Vec<Week>,
}

impl DayGrid {
    pub fn for_cursor(cursor: CalendarCursor) -> Self {
        let Some(first) = cursor.first_day() else {
            return Self {
                cursor,
                weeks: Vec::new(),
            };
        };

        let mut weeks = Vec::new();
        let mut week: Week = [None; 7];
        let mut column = first.weekday().num_days_from_sunday() as usize;

        for day in 1..=cursor.days_in_month() {
            week[column] = Some(day);
            column += 1;
            if column == 7 {
                weeks.push(week);
                week = [None; 7];
                column = 0;
            }
        }
        if column != 0 {
            weeks.push(week);
        }

        Self { cursor, weeks }
    }

    pub fn cursor(&self) -> CalendarCursor {
        self.cursor
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// `(week, column)` of `day`, if the month has it.
    pub fn position_of(&self, day: u32) -> Option<(usize, usize)> {
        self.weeks.iter().enumerate().find_map(|(row, week)| {
            week.iter()
                .position(|slot| *slot == Some(day))
                .map(|col| (row, col))
        })
    }

    pub fn day_at(&self, row: usize, col: usize) -> Option<u32> {
        self.weeks.get(row).and_then(|week| week.get(col).copied().flatten())
    }
}
