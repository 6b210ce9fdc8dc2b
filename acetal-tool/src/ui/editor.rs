use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use super::{Hits, fixed_window, tui_color};
use crate::app::HitTarget;
use crate::config::UiSettings;
use crate::editor::{EditorField, TaskEditor};
use crate::picker::ColorPicker;
use crate::text_input::TextInput;

const EDITOR_WIDTH: u16 = 58;
const EDITOR_HEIGHT: u16 = 14;
const PICKER_WIDTH: u16 = 34;
const CUSTOM_PREFIX: &str = "Custom: ";
const HIGHLIGHT_SYMBOL: &str = "> ";

pub(super) fn render(
    frame: &mut Frame,
    editor: &TaskEditor,
    settings: &UiSettings,
    desktop: Rect,
    cascade: u16,
    hits: &mut Hits,
) {
    let area = fixed_window(desktop, EDITOR_WIDTH, EDITOR_HEIGHT, cascade);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", editor.title()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Task
            Constraint::Length(3), // Duration
            Constraint::Length(3), // Color + Save
            Constraint::Min(1),    // Error
        ])
        .split(inner);
    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(12)])
        .split(chunks[2]);

    let accepts_input = editor.picker.is_none();
    render_text_field(frame, editor, EditorField::Label, "Task", &editor.label, chunks[0], accepts_input);
    render_text_field(
        frame,
        editor,
        EditorField::Duration,
        "Duration (hours)",
        &editor.duration,
        chunks[1],
        accepts_input,
    );
    render_color_button(frame, editor, buttons[0]);
    render_save_button(frame, editor, buttons[1]);

    if let Some(error) = &editor.error {
        let error = Paragraph::new(format!("Error: {error}"))
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true });
        frame.render_widget(error, chunks[3]);
    }

    match &editor.picker {
        Some(picker) => render_picker(frame, picker, settings, desktop, cascade + 2, hits),
        None => {
            hits.push(chunks[0], HitTarget::EditorField(EditorField::Label));
            hits.push(chunks[1], HitTarget::EditorField(EditorField::Duration));
            hits.push(buttons[0], HitTarget::EditorField(EditorField::Color));
            hits.push(buttons[1], HitTarget::EditorField(EditorField::Save));
        }
    }
}

fn field_block(editor: &TaskEditor, field: EditorField, title: &str) -> Block<'static> {
    let border = if editor.focus == field {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title.to_string())
}

fn render_text_field(
    frame: &mut Frame,
    editor: &TaskEditor,
    field: EditorField,
    title: &str,
    input: &TextInput,
    area: Rect,
    accepts_input: bool,
) {
    let block = field_block(editor, field, title);
    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(input.value().to_string()).block(block), area);

    if accepts_input && editor.focus == field {
        let column = (input.cursor_column() as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position((inner.x + column, inner.y));
    }
}

fn render_color_button(frame: &mut Frame, editor: &TaskEditor, area: Rect) {
    let block = field_block(editor, EditorField::Color, "Color");
    let swatch = Style::default()
        .bg(tui_color(editor.color))
        .fg(tui_color(editor.color.contrasting_text()));
    let button = Paragraph::new(format!("Choose Color  {}", editor.color))
        .alignment(Alignment::Center)
        .style(swatch)
        .block(block);
    frame.render_widget(button, area);
}

fn render_save_button(frame: &mut Frame, editor: &TaskEditor, area: Rect) {
    let style = if editor.focus == EditorField::Save {
        Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let button = Paragraph::new("Save")
        .alignment(Alignment::Center)
        .style(style)
        .block(field_block(editor, EditorField::Save, ""));
    frame.render_widget(button, area);
}

fn render_picker(
    frame: &mut Frame,
    picker: &ColorPicker,
    settings: &UiSettings,
    desktop: Rect,
    cascade: u16,
    hits: &mut Hits,
) {
    // Rows + borders + error line.
    let height = picker.row_count() as u16 + 3;
    let area = fixed_window(desktop, PICKER_WIDTH, height, cascade);
    frame.render_widget(Clear, area);

    let block = Block::default().borders(Borders::ALL).title(" Choose Color ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);
    let list_area = chunks[0];

    let mut items: Vec<ListItem> = picker
        .entries
        .iter()
        .map(|entry| {
            let marker = if entry.color == settings.default_color {
                " (default)"
            } else {
                ""
            };
            ListItem::new(Line::from(vec![
                Span::styled("  ", Style::default().bg(tui_color(entry.color))),
                Span::raw(format!(" {}{}", entry.name, marker)),
            ]))
        })
        .collect();
    items.push(ListItem::new(format!("{CUSTOM_PREFIX}{}", picker.custom.value())));

    let list = List::new(items)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    let mut state = ListState::default();
    state.select(Some(picker.selected));
    frame.render_stateful_widget(list, list_area, &mut state);

    let offset = state.offset();
    for row in offset..picker.row_count() {
        let y = list_area.y + (row - offset) as u16;
        if y >= list_area.bottom() {
            break;
        }
        hits.push(Rect::new(list_area.x, y, list_area.width, 1), HitTarget::PaletteRow(row));
    }

    if picker.custom_selected() {
        let row = picker.selected.saturating_sub(offset) as u16;
        let column = (HIGHLIGHT_SYMBOL.len() + CUSTOM_PREFIX.len() + picker.custom.cursor_column()) as u16;
        if row < list_area.height {
            frame.set_cursor_position((
                list_area.x + column.min(list_area.width.saturating_sub(1)),
                list_area.y + row,
            ));
        }
    }

    if let Some(error) = &picker.error {
        let error = Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red));
        frame.render_widget(error, chunks[1]);
    }
}
