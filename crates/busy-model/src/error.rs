use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Window start falls after window end.
    #[error("End date must be after start date. (start {start}, end {end})")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },

    /// Assignment end date precedes its start date.
    #[error("assignment '{project}' ends on {end} before it starts on {start}")]
    EndBeforeStart {
        project: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("project name is empty")]
    EmptyProject,
}

pub type Result<T> = std::result::Result<T, ModelError>;
