use acetal_cal::{Rgb, SlotRef, TaskBlock, TaskForm};

use crate::app::WindowId;
use crate::config::PaletteEntry;
use crate::picker::ColorPicker;
use crate::text_input::TextInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Label,
    Duration,
    Color,
    Save,
}

impl EditorField {
    const ORDER: [EditorField; 4] = [
        EditorField::Label,
        EditorField::Duration,
        EditorField::Color,
        EditorField::Save,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// "Add/Edit Task" popup bound to one slot of one day window.
pub struct TaskEditor {
    /// Day window whose schedule receives the task.
    pub owner: WindowId,
    pub target: SlotRef,
    pub label: TextInput,
    pub duration: TextInput,
    pub color: Rgb,
    pub focus: EditorField,
    pub error: Option<String>,
    pub picker: Option<ColorPicker>,
}

impl TaskEditor {
    pub fn new(owner: WindowId, target: SlotRef, default_color: Rgb) -> Self {
        Self {
            owner,
            target,
            label: TextInput::default(),
            duration: TextInput::default(),
            color: default_color,
            focus: EditorField::Label,
            error: None,
            picker: None,
        }
    }

    pub fn title(&self) -> String {
        format!("Add/Edit Task for {}", self.target.title())
    }

    pub fn form(&self) -> TaskForm {
        TaskForm::new(self.label.value(), self.duration.value(), self.color)
    }

    /// Validates the fields. On failure the error is kept for display and
    /// every field keeps its value.
    pub fn submit(&mut self) -> Option<TaskBlock> {
        match self.form().submit() {
            Ok(block) => {
                self.error = None;
                Some(block)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            EditorField::Label => Some(&mut self.label),
            EditorField::Duration => Some(&mut self.duration),
            EditorField::Color | EditorField::Save => None,
        }
    }

    pub fn open_picker(&mut self, palette: &[PaletteEntry]) {
        self.focus = EditorField::Color;
        self.picker = Some(ColorPicker::new(palette.to_vec(), self.color));
    }

    /// Adopts the picker's choice. Keeps the picker open if the choice is invalid.
    pub fn confirm_picker(&mut self) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };
        if let Some(color) = picker.confirm() {
            self.color = color;
            self.picker = None;
        }
    }

    /// Closes the picker, keeping the previous color.
    pub fn cancel_picker(&mut self) {
        self.picker = None;
    }
}
