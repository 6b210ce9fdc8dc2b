use acetal_cal::{CalendarCursor, DayGrid, WEEKDAY_LABELS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::{APP_TITLE, Hits};
use crate::app::HitTarget;

pub(super) struct MonthState<'a> {
    pub cursor: CalendarCursor,
    pub grid: &'a DayGrid,
    pub selected_day: u32,
}

pub(super) fn render(frame: &mut Frame, state: MonthState, area: Rect, hits: &mut Hits) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {APP_TITLE} "));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Prev / month label / next
            Constraint::Length(1), // Weekday names
            Constraint::Min(1),    // Day buttons
        ])
        .split(inner);

    render_header(frame, state.cursor, chunks[0], hits);
    render_weekdays(frame, chunks[1]);
    render_days(frame, &state, chunks[2], hits);
}

fn render_header(frame: &mut Frame, cursor: CalendarCursor, area: Rect, hits: &mut Hits) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area);

    let button = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    frame.render_widget(Paragraph::new("[<]").style(button), chunks[0]);
    frame.render_widget(Paragraph::new("[>]").style(button), chunks[2]);
    hits.push(chunks[0], HitTarget::PrevMonth);
    hits.push(chunks[2], HitTarget::NextMonth);

    let label = Paragraph::new(cursor.label())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(label, chunks[1]);
}

fn seven_columns(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 7); 7])
        .split(area)
        .to_vec()
}

fn render_weekdays(frame: &mut Frame, area: Rect) {
    for (label, cell) in WEEKDAY_LABELS.iter().zip(seven_columns(area)) {
        let header = Paragraph::new(*label)
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED));
        frame.render_widget(header, cell);
    }
}

fn render_days(frame: &mut Frame, state: &MonthState, area: Rect, hits: &mut Hits) {
    let weeks = state.grid.weeks();
    if weeks.is_empty() {
        return;
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, weeks.len() as u32); weeks.len()])
        .split(area);

    for (week, row) in weeks.iter().zip(rows.iter()) {
        for (slot, cell) in week.iter().zip(seven_columns(*row)) {
            let Some(day) = *slot else {
                continue;
            };
            render_day_button(frame, day, day == state.selected_day, cell);
            hits.push(cell, HitTarget::Day(day));
        }
    }
}

fn render_day_button(frame: &mut Frame, day: u32, selected: bool, cell: Rect) {
    let style = if selected {
        Style::default()
            .bg(Color::Cyan)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    // Too small for a border: draw the bare number.
    let text_area = if cell.height >= 3 && cell.width >= 4 {
        let block = Block::default().borders(Borders::ALL).style(style);
        let inner = block.inner(cell);
        frame.render_widget(block, cell);
        inner
    } else {
        frame.render_widget(Block::default().style(style), cell);
        cell
    };

    let middle = Rect {
        y: text_area.y + text_area.height / 2,
        height: 1.min(text_area.height),
        ..text_area
    };
    let number = Paragraph::new(day.to_string())
        .alignment(Alignment::Center)
        .style(style);
    frame.render_widget(number, middle);
}
