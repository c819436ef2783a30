//! # Domain Module
//!
//! Business logic for the booking dashboard, independent of HTTP and HTML.
//!
//! - **calendar**: month grid generation, focus month and selected date
//! - **schedule_service**: time axis slots and block layout for a day
//! - **floor_service**: the floor list and its single selection
//! - **login_service**: login submission with loading flag and double-submit guard
//! - **clock**: where "today" comes from

pub mod calendar;
pub mod clock;
pub mod floor_service;
pub mod login_service;
pub mod models;
pub mod schedule_service;

pub use calendar::*;
pub use clock::*;
pub use floor_service::*;
pub use login_service::*;
pub use schedule_service::*;
