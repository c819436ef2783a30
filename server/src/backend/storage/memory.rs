use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;

use super::traits::ScheduleStorage;
use crate::backend::domain::models::schedule::{DatedBlock, ScheduleBlock};

/// Read-only schedule repository seeded from configuration
#[derive(Debug, Clone, Default)]
pub struct InMemoryScheduleRepository {
    blocks_by_date: BTreeMap<NaiveDate, Vec<ScheduleBlock>>,
}

impl InMemoryScheduleRepository {
    pub fn new(seed: Vec<DatedBlock>) -> Self {
        let mut blocks_by_date: BTreeMap<NaiveDate, Vec<ScheduleBlock>> = BTreeMap::new();
        for DatedBlock { date, block } in seed {
            blocks_by_date.entry(date).or_default().push(block);
        }
        Self { blocks_by_date }
    }
}

#[async_trait]
impl ScheduleStorage for InMemoryScheduleRepository {
    async fn blocks_for_date(&self, date: NaiveDate) -> Result<Vec<ScheduleBlock>> {
        Ok(self.blocks_by_date.get(&date).cloned().unwrap_or_default())
    }

    async fn scheduled_dates(&self) -> Result<Vec<NaiveDate>> {
        Ok(self.blocks_by_date.keys().copied().collect())
    }
}
