use chrono::{Datelike, NaiveDate};

use super::errors::ValidationError;

/// Static description of a calendar month used to generate a grid.
///
/// `year` and `month` identify the month so day cells can be compared against
/// real dates; `name`, `total_days` and `first_weekday_offset` drive the layout.
/// Nothing checks that the layout fields agree with the real calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthDescriptor {
    pub name: String,
    pub total_days: u32,
    /// 0 = Sunday, 1 = Monday, etc.
    pub first_weekday_offset: u32,
    pub year: i32,
    pub month: u32,
}

impl MonthDescriptor {
    /// Build the descriptor of a real month from the calendar
    pub fn for_month(year: i32, month: u32) -> Result<Self, ValidationError> {
        let first = first_of_month(year, month)?;
        // Last day that exists; avoids building the following month, which
        // may lie past the end of the representable range
        let total_days = (28..=31)
            .rev()
            .find(|day| NaiveDate::from_ymd_opt(year, month, *day).is_some())
            .unwrap_or(28);

        Ok(Self {
            name: format!("{} {}", month_name(month), year),
            total_days,
            first_weekday_offset: first.weekday().num_days_from_sunday(),
            year,
            month,
        })
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=12).contains(&self.month) {
            return Err(ValidationError::InvalidMonth(self.month));
        }
        if self.first_weekday_offset > 6 {
            return Err(ValidationError::WeekdayOffsetOutOfRange(
                self.first_weekday_offset,
            ));
        }
        if !(1..=31).contains(&self.total_days) {
            return Err(ValidationError::TotalDaysOutOfRange(self.total_days));
        }
        Ok(())
    }

    /// The real date of `day` in this month, if it exists
    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }
}

/// First day of a month, rejecting months chrono cannot represent
pub fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, ValidationError> {
    if !(1..=12).contains(&month) {
        return Err(ValidationError::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(ValidationError::YearOutOfRange(year))
}

/// Dates to highlight in a generated grid.
/// When both point at the same day, `selected` wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighlightDates {
    pub selected: Option<NaiveDate>,
    pub today: Option<NaiveDate>,
}

/// Get the human-readable name for a month number
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "Invalid Month",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_month_august_2025() {
        let month = MonthDescriptor::for_month(2025, 8).unwrap();
        assert_eq!(month.name, "August 2025");
        assert_eq!(month.total_days, 31);
        assert_eq!(month.first_weekday_offset, 5); // Friday
    }

    #[test]
    fn test_for_month_february() {
        assert_eq!(MonthDescriptor::for_month(2024, 2).unwrap().total_days, 29);
        assert_eq!(MonthDescriptor::for_month(2025, 2).unwrap().total_days, 28);
        assert_eq!(MonthDescriptor::for_month(1900, 2).unwrap().total_days, 28);
        assert_eq!(MonthDescriptor::for_month(2000, 2).unwrap().total_days, 29);
        assert_eq!(MonthDescriptor::for_month(2025, 12).unwrap().total_days, 31);
    }

    #[test]
    fn test_for_month_rejects_invalid_month() {
        assert_eq!(
            MonthDescriptor::for_month(2025, 13),
            Err(ValidationError::InvalidMonth(13))
        );
        assert_eq!(
            MonthDescriptor::for_month(2025, 0),
            Err(ValidationError::InvalidMonth(0))
        );
    }

    #[test]
    fn test_for_month_rejects_unrepresentable_year() {
        assert_eq!(
            MonthDescriptor::for_month(300_000, 1),
            Err(ValidationError::YearOutOfRange(300_000))
        );
        assert_eq!(
            MonthDescriptor::for_month(i32::MIN, 6),
            Err(ValidationError::YearOutOfRange(i32::MIN))
        );
    }

    #[test]
    fn test_for_month_last_representable_december() {
        let max_year = NaiveDate::MAX.year();
        let december = MonthDescriptor::for_month(max_year, 12).unwrap();
        assert_eq!(december.total_days, 31);
    }

    #[test]
    fn test_validate() {
        let mut month = MonthDescriptor::for_month(2025, 9).unwrap();
        assert!(month.validate().is_ok());

        month.first_weekday_offset = 7;
        assert_eq!(
            month.validate(),
            Err(ValidationError::WeekdayOffsetOutOfRange(7))
        );

        month.first_weekday_offset = 1;
        month.total_days = 0;
        assert_eq!(month.validate(), Err(ValidationError::TotalDaysOutOfRange(0)));
    }

    #[test]
    fn test_date_of_missing_day() {
        let month = MonthDescriptor::for_month(2025, 9).unwrap();
        assert!(month.date_of(30).is_some());
        assert!(month.date_of(31).is_none());
    }
}
