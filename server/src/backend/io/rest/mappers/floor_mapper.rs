use shared::{FloorDto, FloorListResponse};

use crate::backend::domain::models::floor::FloorSelection;

pub struct FloorMapper;

impl FloorMapper {
    /// Convert the floor selection snapshot to the API response
    pub fn selection_to_dto(selection: FloorSelection) -> FloorListResponse {
        let FloorSelection { floors, selected } = selection;
        FloorListResponse {
            floors: floors
                .into_iter()
                .map(|floor| FloorDto {
                    is_selected: floor.id == selected,
                    id: floor.id,
                    name: floor.name,
                    rooms: floor.rooms,
                })
                .collect(),
            selected_floor: selected,
        }
    }
}
