//! # Storage Traits
//!
//! Storage abstraction for schedule data so the domain layer does not care
//! where blocks come from. The bundled implementation is an in-memory fixture.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::backend::domain::models::schedule::ScheduleBlock;

#[async_trait]
pub trait ScheduleStorage: Send + Sync {
    /// Blocks scheduled on `date`, in insertion order
    async fn blocks_for_date(&self, date: NaiveDate) -> Result<Vec<ScheduleBlock>>;

    /// Dates that have at least one block, ascending
    async fn scheduled_dates(&self) -> Result<Vec<NaiveDate>>;
}
