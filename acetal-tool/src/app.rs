//! Application state: month navigation and the stack of open windows.

use std::time::Instant;

use acetal_cal::{CalendarCursor, DayGrid, SlotRef, format_date};
use chrono::NaiveDate;
use ratatui::layout::{Position, Rect};
use tracing::{info, warn};

use crate::config::UiSettings;
use crate::day_view::DayView;
use crate::editor::{EditorField, TaskEditor};

pub type WindowId = u64;

/// A popup layered above the month window.
pub enum Window {
    Day(DayView),
    Editor(TaskEditor),
}

/// Something a mouse click can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    PrevMonth,
    NextMonth,
    Day(u32),
    HourRow(u32),
    EditorField(EditorField),
    PaletteRow(usize),
}

/// Screen area of a clickable element, recorded during render.
///
/// `layer` is 0 for the month window and `i + 1` for `windows[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitArea {
    pub area: Rect,
    pub layer: usize,
    pub target: HitTarget,
}

#[derive(Debug, Clone, Copy)]
struct Click {
    layer: usize,
    hour: u32,
    at: Instant,
}

pub struct App {
    pub cursor: CalendarCursor,
    pub grid: DayGrid,
    pub selected_day: u32,
    pub windows: Vec<Window>,
    pub settings: UiSettings,
    pub should_quit: bool,
    pub hits: Vec<HitArea>,
    last_click: Option<Click>,
    next_window_id: WindowId,
}

impl App {
    pub fn new(settings: UiSettings) -> Self {
        let cursor = CalendarCursor::initial();
        Self {
            cursor,
            grid: DayGrid::for_cursor(cursor),
            selected_day: 1,
            windows: Vec::new(),
            settings,
            should_quit: false,
            hits: Vec::new(),
            last_click: None,
            next_window_id: 1,
        }
    }

    /// Layer index of the window receiving input.
    pub fn top_layer(&self) -> usize {
        self.windows.len()
    }

    pub fn top_window_mut(&mut self) -> Option<&mut Window> {
        self.windows.last_mut()
    }

    pub fn prev_month(&mut self) {
        self.navigate(-1);
    }

    pub fn next_month(&mut self) {
        self.navigate(1);
    }

    fn navigate(&mut self, delta: i32) {
        self.cursor = self.cursor.advance(delta);
        self.grid = DayGrid::for_cursor(self.cursor);
        self.selected_day = self.selected_day.min(self.cursor.days_in_month()).max(1);
        info!(month = %self.cursor, "navigated");
    }

    /// Moves the day selection by `delta` days, staying inside the month.
    pub fn move_selection(&mut self, delta: i32) {
        let target = self.selected_day as i64 + delta as i64;
        if (1..=self.cursor.days_in_month() as i64).contains(&target) {
            self.selected_day = target as u32;
        }
    }

    pub fn activate_selected_day(&mut self) {
        self.activate_day(self.selected_day);
    }

    /// Day button activation.
    pub fn activate_day(&mut self, day: u32) {
        self.selected_day = day;
        if let Some(date) = self.cursor.date(day) {
            self.open_day(date);
        }
    }

    pub fn open_day(&mut self, date: NaiveDate) {
        let id = self.next_window_id;
        self.next_window_id += 1;
        info!(date = %format_date(date), window = id, "opening day schedule");
        self.windows
            .push(Window::Day(DayView::new(id, date, self.settings.row_height)));
    }

    /// Opens the task editor for a slot of the top day window.
    pub fn open_editor(&mut self) {
        let Some(Window::Day(view)) = self.windows.last() else {
            return;
        };
        let owner = view.id;
        match view.selected_slot() {
            Ok(slot) => self.open_editor_for(owner, slot),
            Err(e) => warn!(error = %e, "cannot open editor"),
        }
    }

    fn open_editor_for(&mut self, owner: WindowId, slot: SlotRef) {
        info!(slot = %slot.title(), "opening task editor");
        self.windows.push(Window::Editor(TaskEditor::new(
            owner,
            slot,
            self.settings.default_color,
        )));
    }

    /// Closes the top window, or quits when only the month window is left.
    pub fn close_top(&mut self) {
        if self.windows.pop().is_none() {
            self.should_quit = true;
        }
        self.last_click = None;
    }

    /// Saves the top editor into its owning day window and closes it.
    ///
    /// An invalid duration leaves the editor open and the schedule untouched.
    pub fn save_editor(&mut self) {
        let Some(Window::Editor(editor)) = self.windows.last_mut() else {
            return;
        };
        let Some(block) = editor.submit() else {
            warn!(
                slot = %editor.target.title(),
                error = editor.error.as_deref().unwrap_or_default(),
                "task not saved"
            );
            return;
        };
        let owner = editor.owner;
        let hour = editor.target.hour;

        let view = self.windows.iter_mut().find_map(|w| match w {
            Window::Day(view) if view.id == owner => Some(view),
            _ => None,
        });
        match view {
            Some(view) => {
                if let Err(e) = view.schedule.assign(hour, block) {
                    warn!(error = %e, "task not saved");
                    return;
                }
                info!(date = %format_date(view.date()), hour, "task saved");
            }
            None => warn!(owner, "day window closed before save"),
        }
        self.windows.pop();
    }

    /// Handles a left click at `(column, row)`.
    pub fn click(&mut self, column: u16, row: u16, now: Instant) {
        let layer = self.top_layer();
        let Some(hit) = self
            .hits
            .iter()
            .rev()
            .find(|h| h.layer == layer && h.area.contains(Position::new(column, row)))
            .copied()
        else {
            return;
        };

        match hit.target {
            HitTarget::PrevMonth => self.prev_month(),
            HitTarget::NextMonth => self.next_month(),
            HitTarget::Day(day) => self.activate_day(day),
            HitTarget::HourRow(hour) => self.click_hour(layer, hour, now),
            HitTarget::EditorField(field) => self.click_editor_field(field),
            HitTarget::PaletteRow(row) => {
                if let Some(Window::Editor(editor)) = self.windows.last_mut() {
                    if let Some(picker) = editor.picker.as_mut() {
                        picker.select(row);
                    }
                    editor.confirm_picker();
                }
            }
        }
    }

    fn click_hour(&mut self, layer: usize, hour: u32, now: Instant) {
        if let Some(Window::Day(view)) = self.windows.last_mut() {
            view.select(hour);
        }

        let double = self.last_click.is_some_and(|prev| {
            prev.layer == layer
                && prev.hour == hour
                && now.duration_since(prev.at) <= self.settings.double_click
        });
        if double {
            self.last_click = None;
            self.open_editor();
        } else {
            self.last_click = Some(Click {
                layer,
                hour,
                at: now,
            });
        }
    }

    fn click_editor_field(&mut self, field: EditorField) {
        let Some(Window::Editor(editor)) = self.windows.last_mut() else {
            return;
        };
        editor.focus = field;
        match field {
            EditorField::Color => editor.open_picker(&self.settings.palette),
            EditorField::Save => self.save_editor(),
            EditorField::Label | EditorField::Duration => {}
        }
    }

    pub fn scroll_top_day(&mut self, delta: i32) {
        if let Some(Window::Day(view)) = self.windows.last_mut() {
            view.scroll_by(delta);
        }
    }
}
