//! Room directory.
//!
//! Normalized table of rooms, unique by room code. Built once per
//! simulation run from the location table and never mutated afterwards;
//! exposes capacity lookup plus the building and room listings a selection
//! surface needs to offer its choices.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::Room;

/// Normalized room table, unique by room code.
///
/// Source order is preserved for deterministic iteration. When the same
/// code appears more than once in the source, the later record replaces
/// the earlier one in place (the loader reports the duplicate).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDirectory {
    rooms: Vec<Room>,
}

impl RoomDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory from rooms, deduplicating by code (last wins).
    pub fn from_rooms(rooms: impl IntoIterator<Item = Room>) -> Self {
        let mut unique: Vec<Room> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for room in rooms {
            match index.get(&room.code) {
                Some(&at) => unique[at] = room,
                None => {
                    index.insert(room.code.clone(), unique.len());
                    unique.push(room);
                }
            }
        }
        Self { rooms: unique }
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the directory holds no rooms.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// All rooms, in source order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Finds a room by code.
    pub fn get(&self, code: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.code == code)
    }

    /// Whether a code is present.
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Capacity of a room by code.
    ///
    /// `None` when the code is absent from the directory or its capacity
    /// failed to parse — the two cases are deliberately indistinguishable
    /// here, since neither can be proven to host anything.
    pub fn capacity_of(&self, code: &str) -> Option<u32> {
        self.get(code).and_then(|r| r.capacity)
    }

    /// All rooms of a building, in source order.
    pub fn rooms_in_building(&self, building: &str) -> Vec<&Room> {
        self.rooms
            .iter()
            .filter(|r| r.building.as_deref() == Some(building))
            .collect()
    }

    /// Distinct building codes, sorted.
    ///
    /// Rooms without an alphabetic prefix contribute nothing.
    pub fn buildings(&self) -> Vec<String> {
        let mut buildings: Vec<String> = self
            .rooms
            .iter()
            .filter_map(|r| r.building.clone())
            .collect();
        buildings.sort();
        buildings.dedup();
        buildings
    }

    /// All room codes, sorted.
    pub fn room_codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.rooms.iter().map(|r| r.code.clone()).collect();
        codes.sort();
        codes
    }
}
