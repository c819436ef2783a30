use serde::{Deserialize, Serialize};

/// A building floor shown in the dashboard floor list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub rooms: Vec<String>,
}

impl Floor {
    pub fn new(id: &str, name: &str, rooms: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            rooms: rooms.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// Snapshot of the floor list and the current selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorSelection {
    pub floors: Vec<Floor>,
    pub selected: String,
}
