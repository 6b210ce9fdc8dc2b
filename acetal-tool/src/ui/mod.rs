//! TUI rendering with ratatui.
//!
//! Every frame is drawn from scratch out of [`App`] state: the month window
//! first, then each popup in stack order. Clickable areas are recorded in
//! `App::hits` as they are drawn.

mod day;
mod editor;
mod month;

use acetal_cal::Rgb;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::app::{App, HitArea, HitTarget, Window};

pub const APP_TITLE: &str = "Interactive Calendar";

/// Columns/rows each stacked popup is shifted by, so stacked windows stay distinguishable.
const CASCADE_STEP: u16 = 2;

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Desktop
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());
    let desktop = chunks[0];

    let App {
        cursor,
        grid,
        selected_day,
        windows,
        settings,
        hits,
        ..
    } = app;
    hits.clear();
    let mut hits = Hits { inner: hits, layer: 0 };

    month::render(
        frame,
        month::MonthState {
            cursor: *cursor,
            grid: &*grid,
            selected_day: *selected_day,
        },
        main_window_area(desktop),
        &mut hits,
    );

    for (index, window) in windows.iter_mut().enumerate() {
        hits.layer = index + 1;
        let cascade = index as u16 * CASCADE_STEP;
        match window {
            Window::Day(view) => day::render(frame, view, desktop, cascade, &mut hits),
            Window::Editor(task_editor) => {
                editor::render(frame, task_editor, settings, desktop, cascade, &mut hits)
            }
        }
    }

    render_status_bar(frame, windows.last(), chunks[1]);
}

/// Collects hit areas for the layer currently being drawn.
pub(crate) struct Hits<'a> {
    inner: &'a mut Vec<HitArea>,
    layer: usize,
}

impl Hits<'_> {
    fn push(&mut self, area: Rect, target: HitTarget) {
        self.inner.push(HitArea {
            area,
            layer: self.layer,
            target,
        });
    }
}

fn render_status_bar(frame: &mut Frame, top: Option<&Window>, area: Rect) {
    let status = match top {
        None => "←↑↓→: Select  Enter: Open day  p/n: Prev/Next month  q: Quit",
        Some(Window::Day(_)) => "↑/↓: Select hour  Enter/double-click: Edit task  PgUp/PgDn: Scroll  Esc: Close",
        Some(Window::Editor(editor)) if editor.picker.is_some() => {
            "↑/↓: Navigate  Enter: Choose  Esc: Cancel"
        }
        Some(Window::Editor(_)) => "Tab: Next field  Enter: Activate  Ctrl+S: Save  Esc: Close",
    };

    let status_bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status_bar, area);
}

/// The main window: half the width and height of the terminal, centered.
pub fn main_window_area(display: Rect) -> Rect {
    centered_rect(50, 50, display)
}

/// A `width` x `height` window centered in `area`, shifted right and down by
/// `cascade` and kept inside `area`.
pub fn fixed_window(area: Rect, width: u16, height: u16, cascade: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + ((area.width - width) / 2 + cascade).min(area.width - width);
    let y = area.y + ((area.height - height) / 2 + cascade / 2).min(area.height - height);
    Rect::new(x, y, width, height)
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub(crate) fn tui_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}
