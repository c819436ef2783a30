use chrono::NaiveTime;
use std::time::Duration;

/// Malformed input rejected before any rendering or submission happens
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid month: {0}. Must be between 1 and 12")]
    InvalidMonth(u32),
    #[error("Year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),
    #[error("First weekday offset {0} is out of range (0-6)")]
    WeekdayOffsetOutOfRange(u32),
    #[error("Total days {0} is out of range (1-31)")]
    TotalDaysOutOfRange(u32),
    #[error("Slot length must be at least one minute")]
    ZeroSlotLength,
    #[error("Slot height must be at least one pixel")]
    ZeroSlotHeight,
    #[error("Day end {end} must be after day start {start}")]
    InvertedAxis { start: NaiveTime, end: NaiveTime },
    #[error("Day {start}-{end} is not a whole number of {slot_minutes} minute slots")]
    MisalignedAxis {
        start: NaiveTime,
        end: NaiveTime,
        slot_minutes: u32,
    },
    #[error("Time slots must be strictly increasing with a uniform cadence")]
    IrregularSlots,
    #[error("Cannot place blocks on an empty time axis")]
    EmptyAxis,
    #[error("Block '{title}' ends at {end} which is not after its start {start}")]
    EmptyInterval {
        title: String,
        start: NaiveTime,
        end: NaiveTime,
    },
    #[error("Block '{0}' falls outside the time axis")]
    BlockOutsideAxis(String),
    #[error("Unknown floor: {0}")]
    UnknownFloor(String),
    #[error("Account cannot be empty")]
    EmptyAccount,
    #[error("Password cannot be empty")]
    EmptyPassword,
}

/// Failure surfaced by the authentication collaborator or the submit guard
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("A login request is already in progress")]
    AlreadyPending,
    #[error("Login rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Login request timed out after {0:?}")]
pub struct TimeoutError(pub Duration);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
    #[error(transparent)]
    Timeout(#[from] TimeoutError),
}
