//! Room model.
//!
//! Rooms are the schedulable spaces of a timetable: lecture halls, labs,
//! seminar rooms. Each room has a unique code, a building derived from that
//! code, and a capacity (maximum simultaneous occupancy).
//!
//! # Building Derivation
//!
//! Room codes follow a `<building letters><room number>` convention
//! (e.g. `"A1.01"` is room `1.01` in building `"A"`). The building is the
//! leading run of ASCII alphabetic characters of the code. It is a pure
//! function of the code — a code with no alphabetic prefix (e.g. `"101"`)
//! belongs to no building and can only be taken out of service by selecting
//! its code directly.

use serde::{Deserialize, Serialize};

/// A schedulable room with a capacity limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room code (e.g. `"A1.01"`).
    pub code: String,
    /// Building code derived from `code`; `None` when the code has no
    /// alphabetic prefix.
    pub building: Option<String>,
    /// Maximum simultaneous occupancy. `None` = unknown (blank or
    /// unparsable in the source table).
    pub capacity: Option<u32>,
}

impl Room {
    /// Creates a room, deriving its building from the code.
    pub fn new(code: impl Into<String>) -> Self {
        let code = code.into();
        let building = building_code(&code);
        Self {
            code,
            building,
            capacity: None,
        }
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Whether this room can host a group of the given size.
    ///
    /// A room with unknown capacity cannot be proven sufficient, so it
    /// never hosts — regardless of the group size.
    pub fn can_host(&self, group_size: u32) -> bool {
        self.capacity.map_or(false, |c| c >= group_size)
    }
}

/// Extracts the building code from a room code.
///
/// The building is the leading run of ASCII alphabetic characters:
/// `"A1.01"` → `Some("A")`, `"WN2.05"` → `Some("WN")`, `"101"` → `None`.
/// This is a pure string operation; it consults no directory.
///
/// # Example
/// ```
/// use roster_impact::models::building_code;
///
/// assert_eq!(building_code("A1.01"), Some("A".to_string()));
/// assert_eq!(building_code("101"), None);
/// ```
pub fn building_code(code: &str) -> Option<String> {
    let prefix: String = code
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();
    if prefix.is_empty() {
        None
    } else {
        Some(prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_builder() {
        let r = Room::new("A1.01").with_capacity(30);
        assert_eq!(r.code, "A1.01");
        assert_eq!(r.building.as_deref(), Some("A"));
        assert_eq!(r.capacity, Some(30));
    }

    #[test]
    fn test_building_single_letter() {
        assert_eq!(building_code("A1.01"), Some("A".to_string()));
        assert_eq!(building_code("B12"), Some("B".to_string()));
    }

    #[test]
    fn test_building_multi_letter() {
        assert_eq!(building_code("WN2.05"), Some("WN".to_string()));
        assert_eq!(building_code("Aula"), Some("Aula".to_string()));
    }

    #[test]
    fn test_building_preserves_case() {
        assert_eq!(building_code("aB1"), Some("aB".to_string()));
    }

    #[test]
    fn test_building_no_prefix() {
        // Purely numeric codes belong to no building
        assert_eq!(building_code("101"), None);
        assert_eq!(building_code("1A"), None);
        assert_eq!(building_code(""), None);
    }

    #[test]
    fn test_building_ascii_only() {
        // Non-ASCII letters terminate the prefix, matching `[A-Za-z]+`
        assert_eq!(building_code("É1"), None);
        assert_eq!(building_code("AÉ1"), Some("A".to_string()));
    }

    #[test]
    fn test_room_without_building() {
        let r = Room::new("101").with_capacity(20);
        assert_eq!(r.building, None);
    }

    #[test]
    fn test_can_host_boundary() {
        let r = Room::new("A1").with_capacity(20);
        assert!(r.can_host(19));
        assert!(r.can_host(20));
        assert!(!r.can_host(21));
    }

    #[test]
    fn test_can_host_zero_group() {
        // A zero-size group fits any room with a known capacity, even 0
        assert!(Room::new("A1").with_capacity(0).can_host(0));
    }

    #[test]
    fn test_can_host_unknown_capacity() {
        let r = Room::new("A1");
        assert!(!r.can_host(0));
        assert!(!r.can_host(10));
    }
}
