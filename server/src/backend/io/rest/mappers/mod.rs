pub mod calendar_mapper;
pub mod floor_mapper;
pub mod login_mapper;
pub mod schedule_mapper;

pub use calendar_mapper::CalendarMapper;
pub use floor_mapper::FloorMapper;
pub use login_mapper::LoginMapper;
pub use schedule_mapper::ScheduleMapper;
