use acetal_cal::{CalError, DaySchedule, HOURS_PER_DAY, SlotRef, format_date};
use chrono::NaiveDate;

use crate::app::WindowId;

/// Tallest hour row whose full day still fits the `u16` line space.
pub const MAX_ROW_HEIGHT: u16 = u16::MAX / HOURS_PER_DAY as u16;

/// State of one "Schedule for <date>" window.
///
/// Owns the schedule of its date; the schedule is dropped with the window.
pub struct DayView {
    pub id: WindowId,
    pub schedule: DaySchedule,
    pub selected_hour: u32,
    /// First visible content line.
    pub scroll: u16,
    pub row_height: u16,
    /// Visible lines, as laid out by the last render.
    pub viewport_height: u16,
}

impl DayView {
    pub fn new(id: WindowId, date: NaiveDate, row_height: u16) -> Self {
        Self {
            id,
            schedule: DaySchedule::new(date),
            selected_hour: 0,
            scroll: 0,
            row_height: row_height.clamp(1, MAX_ROW_HEIGHT),
            viewport_height: 0,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.schedule.date()
    }

    pub fn title(&self) -> String {
        format!("Schedule for {}", format_date(self.date()))
    }

    pub fn content_height(&self) -> u16 {
        HOURS_PER_DAY as u16 * self.row_height
    }

    pub fn max_scroll(&self) -> u16 {
        self.content_height().saturating_sub(self.viewport_height)
    }

    /// Records the viewport the last layout produced and re-clamps the scroll.
    pub fn set_viewport(&mut self, height: u16) {
        self.viewport_height = height;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = (self.scroll as i32 + delta).clamp(0, self.max_scroll() as i32);
        self.scroll = target as u16;
    }

    pub fn page_up(&mut self) {
        let page = self.viewport_height.max(self.row_height) as i32;
        self.scroll_by(-page);
        self.select(self.selected_hour.saturating_sub(self.rows_per_page()));
    }

    pub fn page_down(&mut self) {
        let page = self.viewport_height.max(self.row_height) as i32;
        self.scroll_by(page);
        self.select(self.selected_hour + self.rows_per_page());
    }

    fn rows_per_page(&self) -> u32 {
        (self.viewport_height / self.row_height).max(1) as u32
    }

    /// Selects `hour` (clamped to the day) and scrolls it into view.
    pub fn select(&mut self, hour: u32) {
        self.selected_hour = hour.min(HOURS_PER_DAY - 1);
        if self.viewport_height == 0 {
            return;
        }
        let top = self.selected_hour as u16 * self.row_height;
        let bottom = top + self.row_height;
        if top < self.scroll {
            self.scroll = top;
        } else if bottom > self.scroll.saturating_add(self.viewport_height) {
            self.scroll = bottom.saturating_sub(self.viewport_height).min(top);
        }
    }

    pub fn select_prev(&mut self) {
        self.select(self.selected_hour.saturating_sub(1));
    }

    pub fn select_next(&mut self) {
        self.select(self.selected_hour + 1);
    }

    pub fn selected_slot(&self) -> Result<SlotRef, CalError> {
        self.schedule.slot_ref(self.selected_hour)
    }
}
