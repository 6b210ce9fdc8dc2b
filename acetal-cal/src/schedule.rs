use chrono::NaiveDate;
use tracing::{debug, instrument};

use crate::error::CalError;
use crate::surface::{Shape, draw_task};
use crate::task::TaskBlock;

pub const HOURS_PER_DAY: u32 = 24;

/// Row label for `hour`, e.g. `09:00 - 10:00`.
pub fn hour_label(hour: u32) -> String {
    format!("{:02}:00 - {:02}:00", hour, hour + 1)
}

/// Identifies one hour slot of one day.
///
/// Handlers are bound to a copy of this value when they are created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotRef {
    pub date: NaiveDate,
    pub hour: u32,
}

impl SlotRef {
    pub fn new(date: NaiveDate, hour: u32) -> Result<Self, CalError> {
        if hour >= HOURS_PER_DAY {
            return Err(CalError::InvalidHour(hour));
        }
        Ok(Self { date, hour })
    }

    /// `2024-05-15 09:00`
    pub fn title(&self) -> String {
        format!("{} {:02}:00", crate::format_date(self.date), self.hour)
    }
}

/// Per-hour container for at most one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSlot {
    hour: u32,
    task: Option<TaskBlock>,
}

impl ScheduleSlot {
    fn empty(hour: u32) -> Self {
        Self { hour, task: None }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn label(&self) -> String {
        hour_label(self.hour)
    }

    pub fn task(&self) -> Option<&TaskBlock> {
        self.task.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.task.is_none()
    }

    /// What the slot's drawing surface shows.
    pub fn surface(&self) -> Vec<Shape> {
        self.task.as_ref().map(draw_task).unwrap_or_default()
    }
}

/// Schedule of one date: always exactly 24 slots, indexed by hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    date: NaiveDate,
    slots: [ScheduleSlot; HOURS_PER_DAY as usize],
}

impl DaySchedule {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            slots: std::array::from_fn(|hour| ScheduleSlot::empty(hour as u32)),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn slots(&self) -> &[ScheduleSlot] {
        &self.slots
    }

    pub fn slot(&self, hour: u32) -> Result<&ScheduleSlot, CalError> {
        self.slots
            .get(hour as usize)
            .ok_or(CalError::InvalidHour(hour))
    }

    pub fn slot_ref(&self, hour: u32) -> Result<SlotRef, CalError> {
        SlotRef::new(self.date, hour)
    }

    /// Puts `block` into the slot, discarding whatever was there.
    ///
    /// Returns the replaced block. No overlap check is made against later
    /// hours, even when the block's duration reaches into them.
    #[instrument(skip(self, block), fields(date = %self.date, label = %block.label))]
    pub fn assign(&mut self, hour: u32, block: TaskBlock) -> Result<Option<TaskBlock>, CalError> {
        let slot = self
            .slots
            .get_mut(hour as usize)
            .ok_or(CalError::InvalidHour(hour))?;
        let previous = slot.task.replace(block);
        debug!(replaced = previous.is_some(), "task assigned");
        Ok(previous)
    }

    pub fn clear(&mut self, hour: u32) -> Result<Option<TaskBlock>, CalError> {
        let slot = self
            .slots
            .get_mut(hour as usize)
            .ok_or(CalError::InvalidHour(hour))?;
        Ok(slot.task.take())
    }

    /// Hours that currently hold a task, ascending.
    pub fn occupied_hours(&self) -> impl Iterator<Item = u32> + '_ {
        self.slots
            .iter()
            .filter(|slot| !slot.is_empty())
            .map(|slot| slot.hour)
    }
}
