pub mod errors;
pub mod floor;
pub mod login;
pub mod month;
pub mod schedule;
