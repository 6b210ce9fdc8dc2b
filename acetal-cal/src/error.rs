use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalError {
    #[error("Duration must be a whole number of hours, got {input:?}")]
    InvalidDurationFormat { input: String },

    #[error("Month out of range: {0}")]
    InvalidMonth(u32),

    #[error("Hour out of range: {0}")]
    InvalidHour(u32),

    #[error("Invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),
}
