use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A fixed-cadence label on the time axis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub label: String,
    pub start: NaiveTime,
}

impl TimeSlot {
    pub fn at(start: NaiveTime) -> Self {
        Self {
            label: start.format("%H:%M").to_string(),
            start,
        }
    }
}

/// A meeting entry on the day schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleBlock {
    pub title: String,
    #[serde(default)]
    pub room: Option<String>,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl ScheduleBlock {
    /// Half-open interval intersection
    pub fn overlaps(&self, other: &ScheduleBlock) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Blocks without a room are treated as booking the one shared room
    pub fn shares_room(&self, other: &ScheduleBlock) -> bool {
        match (&self.room, &other.room) {
            (Some(room), Some(other_room)) => room == other_room,
            _ => true,
        }
    }

    /// A double booking: same room, intersecting times
    pub fn conflicts_with(&self, other: &ScheduleBlock) -> bool {
        self.overlaps(other) && self.shares_room(other)
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// A schedule block stored against the day it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedBlock {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub block: ScheduleBlock,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRow {
    pub label: String,
    pub top_px: u32,
    pub height_px: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedBlock {
    pub block: ScheduleBlock,
    pub top_px: u32,
    pub height_px: u32,
    pub row_index: usize,
    pub row_span: usize,
    /// Side-by-side column, assigned across all rooms
    pub lane: usize,
    /// Indices of blocks double-booking the same room
    pub conflicts_with: Vec<usize>,
}

/// Time-axis layout: ruler rows plus the blocks placed over them
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScheduleLayout {
    pub rows: Vec<SlotRow>,
    pub blocks: Vec<PositionedBlock>,
    pub height_px: u32,
    pub lane_count: usize,
}
