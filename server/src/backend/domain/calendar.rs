//! Calendar domain logic for the booking dashboard.
//!
//! Turns month descriptors into week-partitioned grids and keeps the small
//! amount of navigation state the dashboard needs (focus month, selected
//! date). The UI only renders what this module produces.

use chrono::{Datelike, NaiveDate};
use log::{debug, info};
use shared::{CalendarCell, CalendarFocusDate, CellHighlight, CurrentDateResponse};
use std::sync::{Arc, Mutex, PoisonError};

use crate::backend::domain::clock::Clock;
use crate::backend::domain::models::errors::ValidationError;
use crate::backend::domain::models::month::{self, first_of_month, HighlightDates, MonthDescriptor};

pub const DAYS_IN_WEEK: usize = 7;

pub const WEEKDAY_LABELS: [&str; DAYS_IN_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A generated month grid together with the inputs that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: MonthDescriptor,
    pub weeks: Vec<Vec<CalendarCell>>,
    pub highlights: HighlightDates,
}

/// Transform a month descriptor into rows of exactly seven cells.
///
/// Leading cells pad up to `first_weekday_offset`, trailing cells pad the
/// last week to a multiple of seven. Highlights are matched by date and
/// `Selected` takes precedence over `Today`.
pub fn generate_month_grid(
    month: &MonthDescriptor,
    highlights: HighlightDates,
) -> Result<Vec<Vec<CalendarCell>>, ValidationError> {
    month.validate()?;

    let leading = month.first_weekday_offset as usize;
    let filled = leading + month.total_days as usize;
    let padded_len = filled.div_ceil(DAYS_IN_WEEK) * DAYS_IN_WEEK;

    let mut cells = Vec::with_capacity(padded_len);
    cells.extend((0..leading).map(|_| CalendarCell::empty()));

    for day in 1..=month.total_days {
        let date = month.date_of(day);
        let highlight = match date {
            Some(date) if highlights.selected == Some(date) => CellHighlight::Selected,
            Some(date) if highlights.today == Some(date) => CellHighlight::Today,
            _ => CellHighlight::None,
        };
        cells.push(CalendarCell {
            day: Some(day),
            highlight,
        });
    }

    cells.resize_with(padded_len, CalendarCell::empty);

    debug!(
        "Generated grid for {}: {} leading, {} trailing padding cells",
        month.name,
        leading,
        padded_len - filled
    );

    Ok(cells
        .chunks(DAYS_IN_WEEK)
        .map(|week| week.to_vec())
        .collect())
}

/// Calendar service that handles all calendar-related business logic
#[derive(Clone)]
pub struct CalendarService {
    clock: Arc<dyn Clock>,
    /// Month/year the dashboard calendar is showing. In memory only.
    current_focus_date: Arc<Mutex<CalendarFocusDate>>,
    /// Date picked in the dashboard "Go to" input
    selected_date: Arc<Mutex<NaiveDate>>,
}

impl CalendarService {
    pub fn new(clock: Arc<dyn Clock>, selected_date: NaiveDate) -> Self {
        Self {
            clock,
            current_focus_date: Arc::new(Mutex::new(CalendarFocusDate::from_date(selected_date))),
            selected_date: Arc::new(Mutex::new(selected_date)),
        }
    }

    /// Generate the grid of a real month highlighted with the current
    /// selected date and today's date
    pub fn generate_calendar_month(&self, month: u32, year: i32) -> Result<MonthGrid, ValidationError> {
        self.generate_month_view(month, year, self.get_selected_date())
    }

    /// Like [`Self::generate_calendar_month`] but highlighting `selected`
    /// rather than the stored selection. Nothing is stored.
    pub fn generate_month_view(
        &self,
        month: u32,
        year: i32,
        selected: NaiveDate,
    ) -> Result<MonthGrid, ValidationError> {
        info!("Generating calendar for {}/{}", month, year);

        let descriptor = MonthDescriptor::for_month(year, month)?;
        let highlights = HighlightDates {
            selected: Some(selected),
            ..self.current_highlights()
        };
        let weeks = generate_month_grid(&descriptor, highlights)?;

        Ok(MonthGrid {
            month: descriptor,
            weeks,
            highlights,
        })
    }

    pub fn current_highlights(&self) -> HighlightDates {
        HighlightDates {
            selected: Some(self.get_selected_date()),
            today: Some(self.today()),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn month_name(&self, month: u32) -> &'static str {
        month::month_name(month)
    }

    /// The month before `current_month`, rolling back a year after January
    pub fn previous_month(current_month: u32, current_year: i32) -> Result<(u32, i32), ValidationError> {
        first_of_month(current_year, current_month)?;
        let (month, year) = if current_month == 1 {
            let year = current_year
                .checked_sub(1)
                .ok_or(ValidationError::YearOutOfRange(current_year))?;
            (12, year)
        } else {
            (current_month - 1, current_year)
        };
        first_of_month(year, month)?;
        Ok((month, year))
    }

    /// The month after `current_month`, rolling over a year after December
    pub fn next_month(current_month: u32, current_year: i32) -> Result<(u32, i32), ValidationError> {
        first_of_month(current_year, current_month)?;
        let (month, year) = if current_month == 12 {
            let year = current_year
                .checked_add(1)
                .ok_or(ValidationError::YearOutOfRange(current_year))?;
            (1, year)
        } else {
            (current_month + 1, current_year)
        };
        first_of_month(year, month)?;
        Ok((month, year))
    }

    /// Get current date information
    pub fn get_current_date(&self) -> CurrentDateResponse {
        let today = self.today();
        let (year, month, day) = (today.year(), today.month(), today.day());

        CurrentDateResponse {
            month,
            year,
            day,
            formatted_date: format!("{} {}, {}", self.month_name(month), day, year),
            iso_date: today.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn get_focus_date(&self) -> CalendarFocusDate {
        self.current_focus_date
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Move the calendar to a month. Months chrono cannot represent are
    /// rejected so the focus always renders.
    pub fn set_focus_date(&self, month: u32, year: i32) -> Result<CalendarFocusDate, ValidationError> {
        first_of_month(year, month)?;

        let new_focus_date = CalendarFocusDate { month, year };
        *self
            .current_focus_date
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = new_focus_date.clone();

        Ok(new_focus_date)
    }

    pub fn navigate_previous_month(&self) -> Result<CalendarFocusDate, ValidationError> {
        self.shift_focus(Self::previous_month)
    }

    pub fn navigate_next_month(&self) -> Result<CalendarFocusDate, ValidationError> {
        self.shift_focus(Self::next_month)
    }

    /// Apply a navigation step; on error the focus is left as it was
    fn shift_focus(
        &self,
        step: impl Fn(u32, i32) -> Result<(u32, i32), ValidationError>,
    ) -> Result<CalendarFocusDate, ValidationError> {
        let mut focus = self
            .current_focus_date
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let (month, year) = step(focus.month, focus.year)?;
        *focus = CalendarFocusDate { month, year };
        Ok(focus.clone())
    }

    pub fn get_selected_date(&self) -> NaiveDate {
        *self.selected_date.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Select a date and bring its month into focus
    pub fn set_selected_date(&self, date: NaiveDate) -> NaiveDate {
        info!("Selected date set to {}", date);
        *self.selected_date.lock().unwrap_or_else(PoisonError::into_inner) = date;
        *self
            .current_focus_date
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = CalendarFocusDate::from_date(date);
        date
    }
}
