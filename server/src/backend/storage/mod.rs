//! # Storage Module
//!
//! Nothing is persisted. Schedule blocks live in memory, seeded from
//! configuration, behind the [`ScheduleStorage`] trait.

pub mod memory;
pub mod traits;

pub use memory::InMemoryScheduleRepository;
pub use traits::ScheduleStorage;
