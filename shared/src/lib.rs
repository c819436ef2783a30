use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Highlight state of a single day cell
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CellHighlight {
    #[default]
    None,
    /// The date the user picked in the dashboard date input
    Selected,
    /// The clock's current date
    Today,
}

/// One rendered unit of a calendar grid.
/// `day` is `None` for padding before day 1 or after the last day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarCell {
    pub day: Option<u32>,
    pub highlight: CellHighlight,
}

impl CalendarCell {
    pub fn empty() -> Self {
        Self {
            day: None,
            highlight: CellHighlight::None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.day.is_none()
    }
}

/// Static description of a calendar month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthDescriptorDto {
    /// Display label, e.g. "August 2025"
    pub name: String,
    pub total_days: u32,
    /// Weekday of day 1 (0 = Sunday, 1 = Monday, etc.)
    pub first_weekday_offset: u32,
    pub year: i32,
    pub month: u32,
}

/// Request body for generating a grid from an arbitrary month descriptor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarGridRequest {
    pub month: MonthDescriptorDto,
    #[serde(default)]
    pub selected_date: Option<NaiveDate>,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// A month calendar partitioned into week rows of exactly seven cells
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarGridResponse {
    pub name: String,
    pub year: i32,
    pub month: u32,
    pub weekday_labels: Vec<String>,
    pub weeks: Vec<Vec<CalendarCell>>,
    pub selected_date: Option<NaiveDate>,
    pub today: Option<NaiveDate>,
}

/// Query parameters for the calendar month API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarMonthRequest {
    pub month: u32,
    pub year: i32,
}

/// Represents the current focus date for calendar navigation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarFocusDate {
    pub month: u32,
    pub year: i32,
}

impl CalendarFocusDate {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            year: date.year(),
        }
    }
}

/// Request to update the calendar focus date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateCalendarFocusRequest {
    pub month: u32,
    pub year: i32,
}

/// Response after updating calendar focus date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateCalendarFocusResponse {
    pub focus_date: CalendarFocusDate,
    pub success_message: String,
}

/// Current date information from the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentDateResponse {
    pub month: u32,
    pub year: i32,
    pub day: u32,
    pub formatted_date: String, // e.g., "August 15, 2025"
    pub iso_date: String,       // e.g., "2025-08-15"
}

/// The date picked in the dashboard "Go to" input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectedDateDto {
    pub date: NaiveDate,
}

/// A fixed-cadence label on the schedule time axis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSlotDto {
    pub label: String,
    pub start: NaiveTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSlotListResponse {
    pub slot_minutes: u32,
    pub slots: Vec<TimeSlotDto>,
}

/// A meeting entry expressed as a time interval
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleBlockDto {
    pub title: String,
    #[serde(default)]
    pub room: Option<String>,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Request body for laying out blocks over the configured time axis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleLayoutRequest {
    pub blocks: Vec<ScheduleBlockDto>,
}

/// One ruler row of the time axis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlotRowDto {
    pub label: String,
    pub top_px: u32,
    pub height_px: u32,
}

/// A schedule block with geometry derived from its time interval
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PositionedBlockDto {
    pub title: String,
    pub room: Option<String>,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub top_px: u32,
    pub height_px: u32,
    pub row_index: usize,
    pub row_span: usize,
    /// Column used when blocks overlap in time (0 = leftmost)
    pub lane: usize,
    /// Indexes (into `blocks`) of blocks booking the same room at the same time
    pub conflicts_with: Vec<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleLayoutResponse {
    pub date: Option<NaiveDate>,
    pub rows: Vec<SlotRowDto>,
    pub blocks: Vec<PositionedBlockDto>,
    pub height_px: u32,
    pub lane_count: usize,
}

/// Query parameters for the day schedule API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ScheduleDayQuery {
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FloorDto {
    pub id: String,
    pub name: String,
    pub rooms: Vec<String>,
    pub is_selected: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FloorListResponse {
    pub floors: Vec<FloorDto>,
    pub selected_floor: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectFloorRequest {
    pub floor_id: String,
}

/// Credentials submitted from the login form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub account: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginStatusResponse {
    pub is_loading: bool,
}

/// Uniform JSON error body for API failures
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}
