use acetal_cal::{HOURS_PER_DAY, ROW_HEIGHT, Rgb, SURFACE_WIDTH, ScheduleSlot, Shape};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Scrollbar, ScrollbarOrientation, ScrollbarState},
};
use unicode_segmentation::UnicodeSegmentation;

use super::{Hits, fixed_window, tui_color};
use crate::app::HitTarget;
use crate::day_view::DayView;

const DAY_WINDOW_WIDTH: u16 = 50;
const LABEL_WIDTH: u16 = 15;

/// Marks a block that reaches into later hours.
const CONTINUES_MARKER: &str = "▼";
/// Marks a block that runs past 24:00.
const OVERFLOW_MARKER: &str = "»";

pub(super) fn render(frame: &mut Frame, view: &mut DayView, desktop: Rect, cascade: u16, hits: &mut Hits) {
    let area = fixed_window(
        desktop,
        DAY_WINDOW_WIDTH,
        desktop.height.saturating_sub(2),
        cascade,
    );
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", view.title()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),    // Hour rows
            Constraint::Length(1), // Scrollbar
        ])
        .split(inner);
    let rows_area = chunks[0];

    view.set_viewport(rows_area.height);
    let scroll = view.scroll as i32;
    let row_height = view.row_height as i32;

    let label_width = LABEL_WIDTH.min(rows_area.width);
    let surface_x = rows_area.x + label_width;
    let surface_width = rows_area.width - label_width;

    for slot in view.schedule.slots() {
        let hour = slot.hour();
        let row_top = rows_area.y as i32 + hour as i32 * row_height - scroll;
        let row = Row {
            top: row_top,
            height: view.row_height,
            clip: rows_area,
        };
        if !row.is_visible() {
            continue;
        }

        let selected = hour == view.selected_hour;
        let buf = frame.buffer_mut();
        paint_label(buf, &row, slot, rows_area.x, label_width, selected);
        paint_surface(buf, &row, slot, surface_x, surface_width);

        if let Some(visible) = row.visible_rect(rows_area.x, rows_area.width) {
            hits.push(visible, HitTarget::HourRow(hour));
        }
    }

    let mut scrollbar_state = ScrollbarState::new(view.max_scroll() as usize)
        .viewport_content_length(view.viewport_height as usize)
        .position(view.scroll as usize);
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        chunks[1],
        &mut scrollbar_state,
    );
}

/// One hour row in screen space. `top` may lie above the clip area when the
/// row is partly scrolled out.
struct Row {
    top: i32,
    height: u16,
    clip: Rect,
}

impl Row {
    fn screen_y(&self, line: i32) -> Option<u16> {
        let y = self.top + line;
        (line >= 0 && line < self.height as i32 && y >= self.clip.y as i32 && y < self.clip.bottom() as i32)
            .then_some(y as u16)
    }

    fn is_visible(&self) -> bool {
        (0..self.height as i32).any(|line| self.screen_y(line).is_some())
    }

    fn visible_rect(&self, x: u16, width: u16) -> Option<Rect> {
        let lines: Vec<u16> = (0..self.height as i32)
            .filter_map(|line| self.screen_y(line))
            .collect();
        let first = *lines.first()?;
        Some(Rect::new(x, first, width, lines.len() as u16))
    }
}

fn paint_label(buf: &mut Buffer, row: &Row, slot: &ScheduleSlot, x: u16, width: u16, selected: bool) {
    let base = if selected {
        Style::default()
            .bg(Color::Cyan)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else if slot.hour() % 2 == 0 {
        Style::default().bg(Color::Rgb(40, 40, 40))
    } else {
        Style::default()
    };

    for line in 0..row.height as i32 {
        let Some(y) = row.screen_y(line) else {
            continue;
        };
        buf.set_style(Rect::new(x, y, width, 1), base);
        if line == row.height as i32 / 2 {
            buf.set_stringn(x + 1, y, slot.label(), width.saturating_sub(1) as usize, base);
        }
    }
}

/// Paints the slot's shapes, scaled from surface units to cells and clipped
/// to the slot's own row.
fn paint_surface(buf: &mut Buffer, row: &Row, slot: &ScheduleSlot, x: u16, width: u16) {
    if width == 0 {
        return;
    }
    let to_col = |units: i64| (units * width as i64 / SURFACE_WIDTH).clamp(0, width as i64) as u16;
    let to_line = |units: i64| units.saturating_mul(row.height as i64) / ROW_HEIGHT;

    let mut fill: Option<(Rgb, i64)> = None;
    for shape in slot.surface() {
        match shape {
            Shape::Rect {
                x0,
                y0,
                x1,
                y1,
                fill: color,
            } => {
                let (left, right) = (to_col(x0), to_col(x1));
                let (top, bottom) = (to_line(y0), to_line(y1));
                for line in top.max(0)..bottom.min(row.height as i64) {
                    if let Some(y) = row.screen_y(line as i32) {
                        let area = Rect::new(x + left, y, right.saturating_sub(left), 1);
                        buf.set_style(area, Style::default().bg(tui_color(color)));
                    }
                }
                fill = Some((color, bottom));
            }
            Shape::Text { x: cx, y: cy, text } => {
                let Some((color, bottom)) = fill else {
                    continue;
                };
                // Labels of blocks taller than the row are pulled into view.
                let visible_bottom = bottom.min(row.height as i64);
                if visible_bottom <= 0 {
                    continue;
                }
                let line = to_line(cy).min(visible_bottom - 1).min(row.height as i64 / 2);
                let Some(y) = row.screen_y(line as i32) else {
                    continue;
                };
                let text = truncate_graphemes(&text, width as usize);
                let text_width = text.graphemes(true).count() as u16;
                let start = to_col(cx).saturating_sub(text_width / 2).min(width - text_width);
                let style = Style::default()
                    .bg(tui_color(color))
                    .fg(tui_color(color.contrasting_text()));
                buf.set_string(x + start, y, text, style);
            }
        }
    }

    if let Some(task) = slot.task() {
        let marker = if task.overflows_day(slot.hour()) {
            Some(OVERFLOW_MARKER)
        } else if task.end_hour(slot.hour()) > slot.hour() as i64 + 1
            && slot.hour() + 1 < HOURS_PER_DAY
        {
            Some(CONTINUES_MARKER)
        } else {
            None
        };
        let bottom_line = row.screen_y(row.height as i32 - 1);
        if let (Some(marker), Some(y)) = (marker, bottom_line) {
            if let Some(cell) = buf.cell_mut(Position::new(x + width - 1, y)) {
                cell.set_symbol(marker);
                cell.set_fg(tui_color(task.color.contrasting_text()));
            }
        }
    }
}

fn truncate_graphemes(s: &str, max: usize) -> &str {
    match s.grapheme_indices(true).nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
