use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::Rgb;
use crate::error::CalError;
use crate::schedule::HOURS_PER_DAY;

/// A saved task occupying an hour slot.
///
/// `duration_hours` is taken as entered. Zero, negative and past-midnight
/// durations are not rejected; see [`TaskBlock::overflows_day`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskBlock {
    pub label: String,
    pub duration_hours: i64,
    pub color: Rgb,
}

impl TaskBlock {
    pub fn new(label: impl Into<String>, duration_hours: i64, color: Rgb) -> Self {
        Self {
            label: label.into(),
            duration_hours,
            color,
        }
    }

    /// Hour at which the block ends when it starts at `start_hour`,
    /// saturating at the `i64` range.
    pub fn end_hour(&self, start_hour: u32) -> i64 {
        (start_hour as i64).saturating_add(self.duration_hours)
    }

    /// Whether the block runs past 24:00.
    pub fn overflows_day(&self, start_hour: u32) -> bool {
        self.end_hour(start_hour) > HOURS_PER_DAY as i64
    }
}

/// Raw values of the task editor's fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskForm {
    pub label: String,
    pub duration: String,
    pub color: Rgb,
}

impl TaskForm {
    pub fn new(label: impl Into<String>, duration: impl Into<String>, color: Rgb) -> Self {
        Self {
            label: label.into(),
            duration: duration.into(),
            color,
        }
    }

    /// Reads the fields into a [`TaskBlock`].
    ///
    /// Fails only when the duration is not an integer. The form is left
    /// untouched either way so the caller can keep showing it.
    pub fn submit(&self) -> Result<TaskBlock, CalError> {
        let duration_hours = self.duration.trim().parse::<i64>().map_err(|e| {
            debug!(input = %self.duration, error = %e, "duration rejected");
            CalError::InvalidDurationFormat {
                input: self.duration.clone(),
            }
        })?;

        Ok(TaskBlock {
            label: self.label.clone(),
            duration_hours,
            color: self.color,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_trims_duration() {
        let form = TaskForm::new("Lunch", " 2 ", Rgb::WHITE);
        assert_eq!(form.submit().unwrap().duration_hours, 2);
    }

    #[test]
    fn submit_rejects_non_integer() {
        for input in ["abc", "", "1.5", "2h"] {
            let form = TaskForm::new("x", input, Rgb::WHITE);
            assert_eq!(
                form.submit(),
                Err(CalError::InvalidDurationFormat {
                    input: input.to_string()
                })
            );
        }
    }

    #[test]
    fn unchecked_inputs_are_accepted() {
        let block = TaskForm::new("", "0", Rgb::WHITE).submit().unwrap();
        assert_eq!(block.label, "");
        assert_eq!(block.duration_hours, 0);

        let block = TaskForm::new("Backwards", "-3", Rgb::WHITE).submit().unwrap();
        assert_eq!(block.duration_hours, -3);
    }

    #[test]
    fn overflow_past_midnight() {
        let block = TaskBlock::new("Night shift", 4, Rgb::BLACK);
        assert!(block.overflows_day(22));
        assert_eq!(block.end_hour(22), 26);
        assert!(!block.overflows_day(20));
    }

    #[test]
    fn extreme_durations_do_not_overflow() {
        let block = TaskForm::new("x", i64::MAX.to_string(), Rgb::WHITE)
            .submit()
            .unwrap();
        assert_eq!(block.end_hour(22), i64::MAX);
        assert!(block.overflows_day(22));

        let block = TaskForm::new("x", i64::MIN.to_string(), Rgb::WHITE)
            .submit()
            .unwrap();
        assert_eq!(block.end_hour(22), i64::MIN + 22);
        assert!(!block.overflows_day(22));
    }

    #[test]
    fn durations_beyond_i64_are_rejected() {
        let form = TaskForm::new("x", "99999999999999999999", Rgb::WHITE);
        assert!(matches!(
            form.submit(),
            Err(CalError::InvalidDurationFormat { .. })
        ));
    }
}
