//! Day schedule layout.
//!
//! The time axis is a list of fixed-cadence slots. Blocks are time intervals
//! and their pixel geometry is derived from where they fall on that axis, so
//! alignment with the ruler holds by construction.

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, NaiveTime};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::backend::domain::models::errors::ValidationError;
use crate::backend::domain::models::schedule::{
    PositionedBlock, ScheduleBlock, ScheduleLayout, SlotRow, TimeSlot,
};
use crate::backend::storage::ScheduleStorage;

/// Shape of the day schedule time axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeAxisConfig {
    pub day_start: NaiveTime,
    /// Exclusive: the last slot starts one cadence before this
    pub day_end: NaiveTime,
    pub slot_minutes: u32,
    pub slot_height_px: u32,
}

impl TimeAxisConfig {
    /// The axis must cover a positive span made of whole slots
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.slot_minutes == 0 {
            return Err(ValidationError::ZeroSlotLength);
        }
        if self.slot_height_px == 0 {
            return Err(ValidationError::ZeroSlotHeight);
        }
        if self.day_end <= self.day_start {
            return Err(ValidationError::InvertedAxis {
                start: self.day_start,
                end: self.day_end,
            });
        }
        if (self.day_end - self.day_start).num_minutes() % i64::from(self.slot_minutes) != 0 {
            return Err(ValidationError::MisalignedAxis {
                start: self.day_start,
                end: self.day_end,
                slot_minutes: self.slot_minutes,
            });
        }
        Ok(())
    }
}

impl Default for TimeAxisConfig {
    fn default() -> Self {
        Self {
            day_start: NaiveTime::from_hms_opt(7, 0, 0).unwrap_or_default(),
            day_end: NaiveTime::from_hms_opt(19, 0, 0).unwrap_or_default(),
            slot_minutes: 30,
            slot_height_px: 48,
        }
    }
}

/// Generate slot labels from `start` (inclusive) to `end` (exclusive).
/// Only whole slots are produced; a trailing partial slot is dropped.
pub fn time_slots(start: NaiveTime, end: NaiveTime, cadence_minutes: u32) -> Vec<TimeSlot> {
    if cadence_minutes == 0 || end <= start {
        return Vec::new();
    }

    let span = (end - start).num_minutes();
    let cadence = i64::from(cadence_minutes);
    (0..)
        .map(|step| step * cadence)
        .take_while(|offset| offset + cadence <= span)
        .map(|offset| TimeSlot::at(start + Duration::minutes(offset)))
        .collect()
}

/// Lay out `blocks` over the time axis described by `slots`.
///
/// Every slot yields one `slot_height_px` row in input order. Each block is
/// positioned from its start/end times relative to the first slot; blocks are
/// returned sorted by start time. Lanes separate every pair of blocks that
/// overlap in time, while conflicts only link blocks in the same room.
pub fn render_schedule_grid(
    slots: &[TimeSlot],
    blocks: &[ScheduleBlock],
    cadence_minutes: u32,
    slot_height_px: u32,
) -> Result<ScheduleLayout, ValidationError> {
    let cadence = i64::from(cadence_minutes);
    if cadence == 0 {
        return Err(ValidationError::IrregularSlots);
    }
    let regular = slots
        .windows(2)
        .all(|pair| (pair[1].start - pair[0].start).num_minutes() == cadence);
    if !regular {
        return Err(ValidationError::IrregularSlots);
    }

    let rows: Vec<SlotRow> = slots
        .iter()
        .enumerate()
        .map(|(index, slot)| SlotRow {
            label: slot.label.clone(),
            top_px: index as u32 * slot_height_px,
            height_px: slot_height_px,
        })
        .collect();
    let height_px = rows.len() as u32 * slot_height_px;

    if blocks.is_empty() {
        return Ok(ScheduleLayout {
            rows,
            blocks: Vec::new(),
            height_px,
            lane_count: 0,
        });
    }

    let axis_start = slots.first().ok_or(ValidationError::EmptyAxis)?.start;
    let axis_minutes = slots.len() as i64 * cadence;

    let mut ordered: Vec<&ScheduleBlock> = blocks.iter().collect();
    ordered.sort_by_key(|block| (block.start, block.end));

    // (start, end) in minutes from the axis start
    let mut spans = Vec::with_capacity(ordered.len());
    for block in &ordered {
        if block.end <= block.start {
            return Err(ValidationError::EmptyInterval {
                title: block.title.clone(),
                start: block.start,
                end: block.end,
            });
        }
        let start = (block.start - axis_start).num_minutes();
        let end = (block.end - axis_start).num_minutes();
        if start < 0 || end > axis_minutes {
            return Err(ValidationError::BlockOutsideAxis(block.title.clone()));
        }
        spans.push((start, end));
    }

    let lanes = assign_lanes(&spans);
    let lane_count = lanes.iter().max().map_or(0, |lane| lane + 1);
    let px = |minutes: i64| (minutes * i64::from(slot_height_px) / cadence) as u32;

    let positioned = ordered
        .iter()
        .zip(&spans)
        .enumerate()
        .map(|(index, (block, &(start, end)))| {
            let conflicts_with = ordered
                .iter()
                .enumerate()
                .filter(|(other, candidate)| *other != index && block.conflicts_with(candidate))
                .map(|(other, _)| other)
                .collect();
            let row_index = (start / cadence) as usize;
            let last_row = ((end + cadence - 1) / cadence) as usize;

            PositionedBlock {
                block: (*block).clone(),
                top_px: px(start),
                height_px: px(end - start),
                row_index,
                row_span: last_row - row_index,
                lane: lanes[index],
                conflicts_with,
            }
        })
        .collect();

    Ok(ScheduleLayout {
        rows,
        blocks: positioned,
        height_px,
        lane_count,
    })
}

/// Greedy interval colouring over spans sorted by start
fn assign_lanes(spans: &[(i64, i64)]) -> Vec<usize> {
    let mut lane_ends: Vec<i64> = Vec::new();
    spans
        .iter()
        .map(|&(start, end)| {
            match lane_ends.iter().position(|&lane_end| lane_end <= start) {
                Some(lane) => {
                    lane_ends[lane] = end;
                    lane
                }
                None => {
                    lane_ends.push(end);
                    lane_ends.len() - 1
                }
            }
        })
        .collect()
}

/// Service owning the configured time axis and the stored day blocks
#[derive(Clone)]
pub struct ScheduleService {
    storage: Arc<dyn ScheduleStorage>,
    axis: TimeAxisConfig,
    slots: Vec<TimeSlot>,
}

impl ScheduleService {
    /// Build the service, rejecting a malformed axis or any stored day whose
    /// blocks cannot be laid out on it
    pub async fn new(storage: Arc<dyn ScheduleStorage>, axis: TimeAxisConfig) -> Result<Self> {
        axis.validate().context("Invalid schedule time axis")?;

        let slots = time_slots(axis.day_start, axis.day_end, axis.slot_minutes);
        info!(
            "Schedule axis: {} slots of {} minutes starting {}",
            slots.len(),
            axis.slot_minutes,
            axis.day_start
        );
        let service = Self { storage, axis, slots };

        for date in service.storage.scheduled_dates().await? {
            service
                .day_layout(date)
                .await
                .with_context(|| format!("Invalid schedule blocks on {}", date))?;
        }
        Ok(service)
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn slot_minutes(&self) -> u32 {
        self.axis.slot_minutes
    }

    /// Lay out arbitrary blocks over the configured axis
    pub fn layout(&self, blocks: &[ScheduleBlock]) -> Result<ScheduleLayout, ValidationError> {
        render_schedule_grid(
            &self.slots,
            blocks,
            self.axis.slot_minutes,
            self.axis.slot_height_px,
        )
    }

    /// Days with at least one stored block
    pub async fn scheduled_dates(&self) -> Result<Vec<NaiveDate>> {
        self.storage.scheduled_dates().await
    }

    /// Lay out the stored blocks of one day
    pub async fn day_layout(&self, date: NaiveDate) -> Result<ScheduleLayout> {
        let blocks = self.storage.blocks_for_date(date).await?;
        info!("Laying out {} blocks for {}", blocks.len(), date);

        let layout = self.layout(&blocks)?;
        let conflicts = layout
            .blocks
            .iter()
            .filter(|b| !b.conflicts_with.is_empty())
            .count();
        if conflicts > 0 {
            warn!("{} double-booked blocks on {}", conflicts, date);
        }
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::schedule::DatedBlock;
    use crate::backend::storage::InMemoryScheduleRepository;

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn block(title: &str, start: (u32, u32), end: (u32, u32)) -> ScheduleBlock {
        ScheduleBlock {
            title: title.to_string(),
            room: None,
            start: time(start.0, start.1),
            end: time(end.0, end.1),
        }
    }

    fn in_room(title: &str, room: &str, start: (u32, u32), end: (u32, u32)) -> ScheduleBlock {
        ScheduleBlock {
            room: Some(room.to_string()),
            ..block(title, start, end)
        }
    }

    fn default_slots() -> Vec<TimeSlot> {
        time_slots(time(7, 0), time(19, 0), 30)
    }

    #[test]
    fn test_time_slots_labels() {
        let slots = default_slots();
        assert_eq!(slots.len(), 24);
        assert_eq!(slots[0].label, "07:00");
        assert_eq!(slots[1].label, "07:30");
        assert_eq!(slots.last().unwrap().label, "18:30");
    }

    #[test]
    fn test_time_slots_degenerate_ranges() {
        assert!(time_slots(time(9, 0), time(9, 0), 30).is_empty());
        assert!(time_slots(time(10, 0), time(9, 0), 30).is_empty());
        assert!(time_slots(time(9, 0), time(10, 0), 0).is_empty());
        // The partial 10:00-10:15 slot is dropped
        let slots = time_slots(time(9, 0), time(10, 15), 30);
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[1].label, "09:30");
    }

    #[test]
    fn test_rows_follow_slot_order() {
        let slots = default_slots();
        let layout = render_schedule_grid(&slots, &[], 30, 48).unwrap();

        assert_eq!(layout.rows.len(), 24);
        assert_eq!(layout.rows[0].top_px, 0);
        assert_eq!(layout.rows[3].top_px, 144);
        assert!(layout.rows.iter().all(|row| row.height_px == 48));
        assert_eq!(layout.height_px, 24 * 48);
        assert_eq!(layout.lane_count, 0);
    }

    #[test]
    fn test_block_geometry_derived_from_times() {
        let slots = default_slots();
        let blocks = [block("Kickoff", (9, 0), (10, 30))];

        let layout = render_schedule_grid(&slots, &blocks, 30, 48).unwrap();
        let positioned = &layout.blocks[0];

        // 09:00 is four slots after 07:00
        assert_eq!(positioned.row_index, 4);
        assert_eq!(positioned.top_px, layout.rows[4].top_px);
        assert_eq!(positioned.row_span, 3);
        assert_eq!(positioned.height_px, 3 * 48);
        assert_eq!(positioned.lane, 0);
        assert!(positioned.conflicts_with.is_empty());
    }

    #[test]
    fn test_block_between_slot_boundaries() {
        let slots = default_slots();
        let blocks = [block("Standup", (9, 15), (9, 45))];

        let layout = render_schedule_grid(&slots, &blocks, 30, 48).unwrap();
        let positioned = &layout.blocks[0];

        assert_eq!(positioned.top_px, 4 * 48 + 24);
        assert_eq!(positioned.height_px, 48);
        assert_eq!(positioned.row_index, 4);
        assert_eq!(positioned.row_span, 2);
    }

    #[test]
    fn test_overlapping_blocks_get_separate_lanes() {
        let slots = default_slots();
        let blocks = [
            block("Review", (10, 0), (11, 0)),
            block("Kickoff", (9, 0), (10, 30)),
            block("Lunch", (12, 0), (13, 0)),
            block("Retro", (10, 30), (11, 30)),
        ];

        let layout = render_schedule_grid(&slots, &blocks, 30, 48).unwrap();
        let titles: Vec<&str> = layout.blocks.iter().map(|b| b.block.title.as_str()).collect();
        assert_eq!(titles, vec!["Kickoff", "Review", "Retro", "Lunch"]);

        let lanes: Vec<usize> = layout.blocks.iter().map(|b| b.lane).collect();
        assert_eq!(lanes, vec![0, 1, 0, 0]);
        assert_eq!(layout.lane_count, 2);

        assert_eq!(layout.blocks[0].conflicts_with, vec![1]);
        assert_eq!(layout.blocks[1].conflicts_with, vec![0, 2]);
        assert_eq!(layout.blocks[2].conflicts_with, vec![1]);
        assert!(layout.blocks[3].conflicts_with.is_empty());
    }

    #[test]
    fn test_parallel_rooms_share_lanes_without_conflict() {
        let slots = default_slots();
        let blocks = [
            in_room("Kickoff", "Ruby", (10, 0), (11, 0)),
            in_room("Interview", "Sapphire", (10, 0), (11, 0)),
            in_room("Overrun", "Ruby", (10, 30), (11, 30)),
        ];

        let layout = render_schedule_grid(&slots, &blocks, 30, 48).unwrap();
        let titles: Vec<&str> = layout.blocks.iter().map(|b| b.block.title.as_str()).collect();
        assert_eq!(titles, vec!["Kickoff", "Interview", "Overrun"]);

        // Three concurrent blocks still need three columns
        let lanes: Vec<usize> = layout.blocks.iter().map(|b| b.lane).collect();
        assert_eq!(lanes, vec![0, 1, 2]);
        assert_eq!(layout.lane_count, 3);

        // Only the two Ruby bookings clash
        assert_eq!(layout.blocks[0].conflicts_with, vec![2]);
        assert!(layout.blocks[1].conflicts_with.is_empty());
        assert_eq!(layout.blocks[2].conflicts_with, vec![0]);
    }

    #[test]
    fn test_rejects_irregular_slots() {
        let slots = vec![
            TimeSlot::at(time(7, 0)),
            TimeSlot::at(time(7, 30)),
            TimeSlot::at(time(8, 15)),
        ];
        assert_eq!(
            render_schedule_grid(&slots, &[], 30, 48),
            Err(ValidationError::IrregularSlots)
        );

        let descending = vec![TimeSlot::at(time(8, 0)), TimeSlot::at(time(7, 30))];
        assert_eq!(
            render_schedule_grid(&descending, &[], 30, 48),
            Err(ValidationError::IrregularSlots)
        );
    }

    #[test]
    fn test_rejects_invalid_blocks() {
        let slots = default_slots();

        let inverted = [block("Backwards", (10, 0), (9, 0))];
        assert!(matches!(
            render_schedule_grid(&slots, &inverted, 30, 48),
            Err(ValidationError::EmptyInterval { .. })
        ));

        let early = [block("Breakfast", (6, 30), (7, 30))];
        assert_eq!(
            render_schedule_grid(&slots, &early, 30, 48),
            Err(ValidationError::BlockOutsideAxis("Breakfast".to_string()))
        );

        let late = [block("Late", (18, 30), (19, 30))];
        assert!(render_schedule_grid(&slots, &late, 30, 48).is_err());

        let last_slot = [block("Wrap up", (18, 30), (19, 0))];
        assert!(render_schedule_grid(&slots, &last_slot, 30, 48).is_ok());

        assert_eq!(
            render_schedule_grid(&[], &last_slot, 30, 48),
            Err(ValidationError::EmptyAxis)
        );
    }

    #[tokio::test]
    async fn test_day_layout_reads_storage() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 8).unwrap();
        let storage = InMemoryScheduleRepository::new(vec![
            DatedBlock {
                date,
                block: block("Kickoff", (10, 0), (11, 30)),
            },
            DatedBlock {
                date: date.succ_opt().unwrap(),
                block: block("Elsewhere", (9, 0), (10, 0)),
            },
        ]);
        let service = ScheduleService::new(Arc::new(storage), TimeAxisConfig::default())
            .await
            .unwrap();

        let layout = service.day_layout(date).await.unwrap();
        assert_eq!(layout.blocks.len(), 1);
        assert_eq!(layout.blocks[0].block.title, "Kickoff");
        assert_eq!(layout.blocks[0].row_index, 6);

        let empty = service
            .day_layout(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
            .await
            .unwrap();
        assert!(empty.blocks.is_empty());
        assert_eq!(empty.rows.len(), 24);
    }

    #[test]
    fn test_axis_validation() {
        assert!(TimeAxisConfig::default().validate().is_ok());

        let zero_length = TimeAxisConfig {
            slot_minutes: 0,
            ..TimeAxisConfig::default()
        };
        assert_eq!(zero_length.validate(), Err(ValidationError::ZeroSlotLength));

        let zero_height = TimeAxisConfig {
            slot_height_px: 0,
            ..TimeAxisConfig::default()
        };
        assert_eq!(zero_height.validate(), Err(ValidationError::ZeroSlotHeight));

        let inverted = TimeAxisConfig {
            day_start: time(19, 0),
            day_end: time(7, 0),
            ..TimeAxisConfig::default()
        };
        assert!(matches!(
            inverted.validate(),
            Err(ValidationError::InvertedAxis { .. })
        ));

        let misaligned = TimeAxisConfig {
            day_end: time(19, 15),
            ..TimeAxisConfig::default()
        };
        assert!(matches!(
            misaligned.validate(),
            Err(ValidationError::MisalignedAxis { slot_minutes: 30, .. })
        ));
    }

    #[tokio::test]
    async fn test_new_rejects_bad_axis() {
        let storage = InMemoryScheduleRepository::default();
        let axis = TimeAxisConfig {
            slot_minutes: 0,
            ..TimeAxisConfig::default()
        };

        let result = ScheduleService::new(Arc::new(storage), axis).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_new_rejects_blocks_that_cannot_be_laid_out() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 8).unwrap();
        let seeds = [
            block("Late call", (18, 30), (20, 0)),
            block("Backwards", (10, 0), (9, 0)),
        ];

        for seed in seeds {
            let title = seed.title.clone();
            let storage = InMemoryScheduleRepository::new(vec![DatedBlock { date, block: seed }]);
            let result = ScheduleService::new(Arc::new(storage), TimeAxisConfig::default()).await;

            let error = result.err().unwrap();
            assert!(format!("{:#}", error).contains(&title));
            assert!(error.to_string().contains("2025-08-08"));
        }
    }

    #[tokio::test]
    async fn test_new_accepts_double_booking() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 8).unwrap();
        let storage = InMemoryScheduleRepository::new(vec![
            DatedBlock {
                date,
                block: in_room("Kickoff", "Ruby", (10, 0), (11, 0)),
            },
            DatedBlock {
                date,
                block: in_room("Overrun", "Ruby", (10, 30), (11, 30)),
            },
        ]);

        let service = ScheduleService::new(Arc::new(storage), TimeAxisConfig::default())
            .await
            .unwrap();
        let layout = service.day_layout(date).await.unwrap();
        assert_eq!(layout.blocks[0].conflicts_with, vec![1]);
    }
}
