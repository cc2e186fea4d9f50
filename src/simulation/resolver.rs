//! Selection resolution.
//!
//! Turns an [`OutageSelection`] into the concrete set of removed room
//! codes: every directory room whose derived building code is selected,
//! plus the explicitly selected rooms. Explicit codes are taken verbatim
//! even when the directory does not know them, so a selection can refer
//! to rooms the location table missed; such codes still match schedule
//! references. Selected buildings without any matching room are inert.

use log::debug;
use std::collections::HashSet;

use crate::directory::RoomDirectory;
use crate::models::OutageSelection;

/// Resolves a selection into the set of removed room codes.
///
/// Building comparison is a case-sensitive exact match on the derived
/// building code. An empty selection yields an empty set.
pub fn removed_rooms(directory: &RoomDirectory, selection: &OutageSelection) -> HashSet<String> {
    let mut removed: HashSet<String> = directory
        .rooms()
        .iter()
        .filter(|room| {
            room.building
                .as_ref()
                .is_some_and(|b| selection.buildings.contains(b))
        })
        .map(|room| room.code.clone())
        .collect();
    removed.extend(selection.rooms.iter().cloned());
    debug!(
        "resolved selection ({} buildings, {} rooms) to {} removed rooms",
        selection.buildings.len(),
        selection.rooms.len(),
        removed.len()
    );
    removed
}
