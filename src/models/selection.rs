//! Outage selection model.
//!
//! Describes which buildings and rooms become unavailable, and from which
//! date onward. A selection is pure input: resolving it against a room
//! directory (every room of a selected building, plus each explicitly
//! selected room) happens per run in the simulation pipeline, so repeated
//! runs never accumulate state from earlier selections.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Buildings and rooms taken out of service from an effective date.
///
/// Building codes are matched case-sensitively against each room's derived
/// building; room codes are taken verbatim. Codes unknown to the directory
/// are inert — they match nothing and raise no error. An empty selection
/// removes no rooms and therefore produces no conflicts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutageSelection {
    /// Building codes to take out of service.
    pub buildings: HashSet<String>,
    /// Individual room codes to take out of service.
    pub rooms: HashSet<String>,
    /// First date (inclusive) on which the selection applies.
    pub effective_date: NaiveDate,
}

impl OutageSelection {
    /// Creates an empty selection effective from the given date.
    pub fn new(effective_date: NaiveDate) -> Self {
        Self {
            buildings: HashSet::new(),
            rooms: HashSet::new(),
            effective_date,
        }
    }

    /// Adds a building.
    pub fn with_building(mut self, building: impl Into<String>) -> Self {
        self.buildings.insert(building.into());
        self
    }

    /// Adds several buildings.
    pub fn with_buildings(mut self, buildings: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for building in buildings {
            self.buildings.insert(building.into());
        }
        self
    }

    /// Adds a room code.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.rooms.insert(room.into());
        self
    }

    /// Adds several room codes.
    pub fn with_rooms(mut self, rooms: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for room in rooms {
            self.rooms.insert(room.into());
        }
        self
    }

    /// Whether the selection names no buildings and no rooms.
    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty() && self.rooms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_selection_builder() {
        let s = OutageSelection::new(date(2024, 9, 1))
            .with_building("A")
            .with_buildings(["B", "C"])
            .with_room("D1.01")
            .with_rooms(["D1.02", "D1.03"]);

        assert_eq!(s.effective_date, date(2024, 9, 1));
        assert_eq!(s.buildings.len(), 3);
        assert_eq!(s.rooms.len(), 3);
        assert!(s.buildings.contains("A"));
        assert!(s.rooms.contains("D1.03"));
    }

    #[test]
    fn test_empty_selection() {
        let s = OutageSelection::new(date(2024, 9, 1));
        assert!(s.is_empty());

        let s2 = s.with_room("A1.01");
        assert!(!s2.is_empty());
    }

    #[test]
    fn test_duplicate_entries_collapse() {
        let s = OutageSelection::new(date(2024, 9, 1))
            .with_building("A")
            .with_building("A");
        assert_eq!(s.buildings.len(), 1);
    }
}
