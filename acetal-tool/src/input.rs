use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::{App, Window};
use crate::editor::{EditorField, TaskEditor};

pub fn handle_event(app: &mut App, event: Event, now: Instant) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse, now),
        _ => {}
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match app.windows.last() {
        None => handle_month_key(app, key),
        Some(Window::Day(_)) => handle_day_key(app, key),
        Some(Window::Editor(_)) => handle_editor_key(app, key),
    }
}

fn handle_month_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_top(),
        KeyCode::Left | KeyCode::Char('h') => app.move_selection(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_selection(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-7),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(7),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_selected_day(),
        KeyCode::PageUp | KeyCode::Char('p') | KeyCode::Char('<') => app.prev_month(),
        KeyCode::PageDown | KeyCode::Char('n') | KeyCode::Char('>') => app.next_month(),
        _ => {}
    }
}

fn handle_day_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
        app.close_top();
        return;
    }
    if key.code == KeyCode::Enter {
        app.open_editor();
        return;
    }

    let Some(Window::Day(view)) = app.top_window_mut() else {
        return;
    };
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => view.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => view.select_next(),
        KeyCode::PageUp => view.page_up(),
        KeyCode::PageDown => view.page_down(),
        KeyCode::Home => view.select(0),
        KeyCode::End => view.select(u32::MAX),
        _ => {}
    }
}

fn handle_editor_key(app: &mut App, key: KeyEvent) {
    let palette = app.settings.palette.clone();
    let Some(Window::Editor(editor)) = app.top_window_mut() else {
        return;
    };

    if editor.picker.is_some() {
        handle_picker_key(editor, key);
        return;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => app.close_top(),
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => app.save_editor(),
        (KeyCode::Tab, _) | (KeyCode::Down, _) => editor.focus = editor.focus.next(),
        (KeyCode::BackTab, _) | (KeyCode::Up, _) => editor.focus = editor.focus.prev(),
        (KeyCode::Enter, _) | (KeyCode::Char(' '), _)
            if matches!(editor.focus, EditorField::Color | EditorField::Save) =>
        {
            match editor.focus {
                EditorField::Color => editor.open_picker(&palette),
                _ => app.save_editor(),
            }
        }
        (KeyCode::Enter, _) => editor.focus = editor.focus.next(),
        (code, modifiers) => {
            if let Some(input) = editor.focused_input() {
                edit_text(input, code, modifiers);
            }
        }
    }
}

fn handle_picker_key(editor: &mut TaskEditor, key: KeyEvent) {
    let Some(picker) = editor.picker.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Esc => editor.cancel_picker(),
        KeyCode::Enter => editor.confirm_picker(),
        KeyCode::Up => picker.up(),
        KeyCode::Down => picker.down(),
        code if picker.custom_selected() => {
            picker.error = None;
            edit_text(&mut picker.custom, code, key.modifiers);
        }
        _ => {}
    }
}

fn edit_text(input: &mut crate::text_input::TextInput, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.left(),
        KeyCode::Right => input.right(),
        KeyCode::Home => input.home(),
        KeyCode::End => input.end(),
        KeyCode::Char(c) if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            input.insert(c)
        }
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.click(mouse.column, mouse.row, now),
        MouseEventKind::ScrollUp => app.scroll_top_day(-1),
        MouseEventKind::ScrollDown => app.scroll_top_day(1),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiSettings;
    use acetal_cal::Rgb;

    fn press(app: &mut App, code: KeyCode) {
        press_with(app, code, KeyModifiers::NONE);
    }

    fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        handle_event(app, Event::Key(KeyEvent::new(code, modifiers)), Instant::now());
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn editor(app: &App) -> &TaskEditor {
        match app.windows.last() {
            Some(Window::Editor(editor)) => editor,
            _ => panic!("editor not on top"),
        }
    }

    #[test]
    fn month_keys_navigate() {
        let mut app = App::new(UiSettings::default());
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.cursor.current(), (2024, 6));
        press(&mut app, KeyCode::PageUp);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.cursor.current(), (2024, 4));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn full_task_flow_by_keyboard() {
        let mut app = App::new(UiSettings::default());

        // Open 2024-05-15 and go to 09:00.
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        for _ in 0..9 {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(editor(&app).title(), "Add/Edit Task for 2024-05-15 09:00");

        type_text(&mut app, "Standup");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "1");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(editor(&app).color, app.settings.palette[1].color);

        press_with(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(app.windows.len(), 1);
        let Some(Window::Day(view)) = app.windows.last() else {
            panic!("day window expected");
        };
        let task = view.schedule.slot(9).unwrap().task().unwrap();
        assert_eq!(task.label, "Standup");
        assert_eq!(task.duration_hours, 1);
    }

    #[test]
    fn bad_duration_then_retry() {
        let mut app = App::new(UiSettings::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "abc");
        press_with(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);

        assert!(editor(&app).error.is_some());
        assert_eq!(editor(&app).duration.value(), "abc");

        for _ in 0..3 {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "2");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.windows.len(), 1);
    }

    #[test]
    fn picker_escape_keeps_color() {
        let mut app = App::new(UiSettings {
            default_color: Rgb::new(1, 2, 3),
            ..UiSettings::default()
        });
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        assert!(editor(&app).picker.is_some());

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Esc);
        assert!(editor(&app).picker.is_none());
        assert_eq!(editor(&app).color, Rgb::new(1, 2, 3));
        assert_eq!(app.windows.len(), 2);
    }

    #[test]
    fn custom_hex_entry() {
        let mut app = App::new(UiSettings::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Enter);
        for _ in 0..20 {
            press(&mut app, KeyCode::Down);
        }
        for _ in 0..7 {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "#00ff7f");
        press(&mut app, KeyCode::Enter);

        assert_eq!(editor(&app).color, Rgb::new(0, 0xff, 0x7f));
    }

    #[test]
    fn escape_closes_windows_in_order() {
        let mut app = App::new(UiSettings::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.windows.len(), 2);
        press(&mut app, KeyCode::Esc);
        assert!(matches!(app.windows.last(), Some(Window::Day(_))));
        press(&mut app, KeyCode::Esc);
        assert!(app.windows.is_empty());
        assert!(!app.should_quit);
    }
}
