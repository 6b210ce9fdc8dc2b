use acetal_cal::Rgb;

use crate::config::PaletteEntry;
use crate::text_input::TextInput;

/// Color chooser opened from the task editor's color button.
///
/// Rows are the palette followed by one custom `#rrggbb` entry.
pub struct ColorPicker {
    pub entries: Vec<PaletteEntry>,
    pub selected: usize,
    pub custom: TextInput,
    pub error: Option<String>,
}

impl ColorPicker {
    pub fn new(entries: Vec<PaletteEntry>, current: Rgb) -> Self {
        let selected = entries
            .iter()
            .position(|entry| entry.color == current)
            .unwrap_or(entries.len());

        Self {
            entries,
            selected,
            custom: TextInput::with_value(current.to_string()),
            error: None,
        }
    }

    pub fn row_count(&self) -> usize {
        self.entries.len() + 1
    }

    pub fn custom_selected(&self) -> bool {
        self.selected == self.entries.len()
    }

    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn down(&mut self) {
        if self.selected + 1 < self.row_count() {
            self.selected += 1;
        }
    }

    pub fn select(&mut self, row: usize) {
        if row < self.row_count() {
            self.selected = row;
        }
    }

    /// The chosen color, or `None` with `error` set when the custom entry
    /// does not parse.
    pub fn confirm(&mut self) -> Option<Rgb> {
        if let Some(entry) = self.entries.get(self.selected) {
            return Some(entry.color);
        }
        match self.custom.value().parse::<Rgb>() {
            Ok(color) => Some(color),
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Vec<PaletteEntry> {
        vec![
            PaletteEntry {
                name: "White".into(),
                color: Rgb::WHITE,
            },
            PaletteEntry {
                name: "Black".into(),
                color: Rgb::BLACK,
            },
        ]
    }

    #[test]
    fn starts_on_current_color() {
        assert_eq!(ColorPicker::new(palette(), Rgb::BLACK).selected, 1);

        let picker = ColorPicker::new(palette(), Rgb::new(1, 2, 3));
        assert!(picker.custom_selected());
        assert_eq!(picker.custom.value(), "#010203");
    }

    #[test]
    fn invalid_custom_color_is_reported() {
        let mut picker = ColorPicker::new(palette(), Rgb::new(1, 2, 3));
        picker.custom.backspace();
        assert_eq!(picker.confirm(), None);
        assert!(picker.error.is_some());

        picker.custom.insert('3');
        assert_eq!(picker.confirm(), Some(Rgb::new(1, 2, 3)));
    }

    #[test]
    fn navigation_stays_in_range() {
        let mut picker = ColorPicker::new(palette(), Rgb::WHITE);
        picker.up();
        assert_eq!(picker.selected, 0);
        for _ in 0..5 {
            picker.down();
        }
        assert!(picker.custom_selected());
        picker.select(7);
        assert!(picker.custom_selected());
    }
}
