use shared::{CalendarGridResponse, MonthDescriptorDto};

use crate::backend::domain::models::month::{HighlightDates, MonthDescriptor};
use crate::backend::domain::{MonthGrid, WEEKDAY_LABELS};

pub struct CalendarMapper;

impl CalendarMapper {
    /// Convert shared MonthDescriptorDto to domain MonthDescriptor
    pub fn descriptor_to_domain(dto: MonthDescriptorDto) -> MonthDescriptor {
        MonthDescriptor {
            name: dto.name,
            total_days: dto.total_days,
            first_weekday_offset: dto.first_weekday_offset,
            year: dto.year,
            month: dto.month,
        }
    }

    /// Convert a generated grid to the API response
    pub fn grid_to_dto(grid: MonthGrid) -> CalendarGridResponse {
        let MonthGrid {
            month,
            weeks,
            highlights: HighlightDates { selected, today },
        } = grid;

        CalendarGridResponse {
            name: month.name,
            year: month.year,
            month: month.month,
            weekday_labels: WEEKDAY_LABELS.iter().map(|l| l.to_string()).collect(),
            weeks,
            selected_date: selected,
            today,
        }
    }
}
