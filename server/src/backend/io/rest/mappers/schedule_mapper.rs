use chrono::NaiveDate;
use shared::{
    PositionedBlockDto, ScheduleBlockDto, ScheduleLayoutResponse, SlotRowDto, TimeSlotDto,
    TimeSlotListResponse,
};

use crate::backend::domain::models::schedule::{
    PositionedBlock, ScheduleBlock, ScheduleLayout, SlotRow, TimeSlot,
};

pub struct ScheduleMapper;

impl ScheduleMapper {
    /// Convert shared ScheduleBlockDto to domain ScheduleBlock
    pub fn block_to_domain(dto: ScheduleBlockDto) -> ScheduleBlock {
        ScheduleBlock {
            title: dto.title,
            room: dto.room,
            start: dto.start,
            end: dto.end,
        }
    }

    pub fn blocks_to_domain(dtos: Vec<ScheduleBlockDto>) -> Vec<ScheduleBlock> {
        dtos.into_iter().map(Self::block_to_domain).collect()
    }

    pub fn slots_to_dto(slots: &[TimeSlot], slot_minutes: u32) -> TimeSlotListResponse {
        TimeSlotListResponse {
            slot_minutes,
            slots: slots
                .iter()
                .map(|slot| TimeSlotDto {
                    label: slot.label.clone(),
                    start: slot.start,
                })
                .collect(),
        }
    }

    fn row_to_dto(row: SlotRow) -> SlotRowDto {
        SlotRowDto {
            label: row.label,
            top_px: row.top_px,
            height_px: row.height_px,
        }
    }

    fn positioned_to_dto(positioned: PositionedBlock) -> PositionedBlockDto {
        PositionedBlockDto {
            title: positioned.block.title,
            room: positioned.block.room,
            start: positioned.block.start,
            end: positioned.block.end,
            top_px: positioned.top_px,
            height_px: positioned.height_px,
            row_index: positioned.row_index,
            row_span: positioned.row_span,
            lane: positioned.lane,
            conflicts_with: positioned.conflicts_with,
        }
    }

    /// Convert a domain layout to the API response, tagged with its day if any
    pub fn layout_to_dto(layout: ScheduleLayout, date: Option<NaiveDate>) -> ScheduleLayoutResponse {
        ScheduleLayoutResponse {
            date,
            rows: layout.rows.into_iter().map(Self::row_to_dto).collect(),
            blocks: layout.blocks.into_iter().map(Self::positioned_to_dto).collect(),
            height_px: layout.height_px,
            lane_count: layout.lane_count,
        }
    }
}
