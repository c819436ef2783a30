use log::{info, warn};
use std::sync::{Arc, Mutex, PoisonError};

use crate::backend::domain::models::errors::ValidationError;
use crate::backend::domain::models::floor::{Floor, FloorSelection};

/// Holds the floor list and which floor the dashboard highlights.
/// The selection is cosmetic: it does not filter the calendar or schedule.
#[derive(Clone)]
pub struct FloorService {
    floors: Arc<Vec<Floor>>,
    selected_floor: Arc<Mutex<String>>,
}

impl FloorService {
    pub fn new(floors: Vec<Floor>) -> Self {
        let selected = floors.first().map(|f| f.id.clone()).unwrap_or_default();
        Self {
            floors: Arc::new(floors),
            selected_floor: Arc::new(Mutex::new(selected)),
        }
    }

    pub fn list_floors(&self) -> FloorSelection {
        FloorSelection {
            floors: self.floors.as_ref().clone(),
            selected: self.selected_floor(),
        }
    }

    pub fn selected_floor(&self) -> String {
        self.selected_floor
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Move the highlight to `floor_id`. Unknown ids leave the selection as is.
    pub fn select_floor(&self, floor_id: &str) -> Result<FloorSelection, ValidationError> {
        if !self.floors.iter().any(|floor| floor.id == floor_id) {
            warn!("Ignoring selection of unknown floor '{}'", floor_id);
            return Err(ValidationError::UnknownFloor(floor_id.to_string()));
        }

        let previous = std::mem::replace(
            &mut *self
                .selected_floor
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
            floor_id.to_string(),
        );
        info!("Floor selection changed: {} -> {}", previous, floor_id);

        Ok(self.list_floors())
    }
}
