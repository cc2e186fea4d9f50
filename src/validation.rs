//! Input validation for simulation data.
//!
//! Checks cross-entity integrity of a room directory and a schedule
//! before simulating. Detects:
//! - Schedule rooms absent from the directory
//! - Activities without a room assignment
//! - Rooms without a usable capacity
//! - Activities without a readable start date
//! - Activities without a known group size
//!
//! The simulation itself absorbs all of these (unknowns fall on the
//! conservative side of every comparison); validation exists so a
//! collaborator can surface data quality to its users next to a result.

use crate::directory::RoomDirectory;
use crate::models::ScheduledActivity;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// An activity references a room the directory doesn't know.
    UnknownRoomReference,
    /// An activity has no room assigned at all.
    MissingRoom,
    /// A directory room has no usable capacity.
    UnknownCapacity,
    /// An activity has no readable start date.
    MissingStartDate,
    /// An activity has no known group size.
    UnknownGroupSize,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a simulation run.
///
/// Checks:
/// 1. Every activity has a room, and the directory knows it
/// 2. Every directory room has a known capacity
/// 3. Every activity has a readable start date
/// 4. Every activity has a known group size
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    directory: &RoomDirectory,
    schedule: &[ScheduledActivity],
) -> ValidationResult {
    let mut errors = Vec::new();

    for room in directory.rooms() {
        if room.capacity.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownCapacity,
                format!("Room '{}' has no usable capacity", room.code),
            ));
        }
    }

    for activity in schedule {
        if activity.room.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingRoom,
                format!("Activity '{}' has no room assigned", activity.label),
            ));
        } else if !directory.contains(&activity.room) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownRoomReference,
                format!(
                    "Activity '{}' references unknown room '{}'",
                    activity.label, activity.room
                ),
            ));
        }

        if activity.start_date.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingStartDate,
                format!("Activity '{}' has no readable start date", activity.label),
            ));
        }
        if activity.group_size.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownGroupSize,
                format!("Activity '{}' has no known group size", activity.label),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Room;
    use chrono::NaiveDate;

    fn sample_directory() -> RoomDirectory {
        RoomDirectory::from_rooms([
            Room::new("A1.01").with_capacity(30),
            Room::new("B2.01").with_capacity(20),
        ])
    }

    fn sample_schedule() -> Vec<ScheduledActivity> {
        vec![
            ScheduledActivity::new("Wiskunde B", "A1.01")
                .with_start_date(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap())
                .with_group_size(28),
            ScheduledActivity::new("Geschiedenis", "B2.01")
                .with_start_date(NaiveDate::from_ymd_opt(2025, 9, 2).unwrap())
                .with_group_size(18),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_directory(), &sample_schedule()).is_ok());
    }

    #[test]
    fn test_unknown_room_reference() {
        let mut schedule = sample_schedule();
        schedule.push(
            ScheduledActivity::new("Gym", "SPORTHAL")
                .with_start_date(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap())
                .with_group_size(30),
        );
        let errors = validate_input(&sample_directory(), &schedule).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownRoomReference
                && e.message.contains("SPORTHAL")));
    }

    #[test]
    fn test_missing_room() {
        let schedule = vec![ScheduledActivity::new("Mentoruur", "")
            .with_start_date(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap())
            .with_group_size(25)];
        let errors = validate_input(&sample_directory(), &schedule).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingRoom));
    }

    #[test]
    fn test_unknown_capacity() {
        let directory = RoomDirectory::from_rooms([Room::new("A1.01")]);
        let errors = validate_input(&directory, &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownCapacity));
    }

    #[test]
    fn test_missing_start_date_and_group_size() {
        let schedule = vec![ScheduledActivity::new("Projectweek", "A1.01")];
        let errors = validate_input(&sample_directory(), &schedule).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingStartDate));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownGroupSize));
    }

    #[test]
    fn test_multiple_errors() {
        let directory = RoomDirectory::from_rooms([Room::new("A1.01")]);
        let schedule = vec![ScheduledActivity::new("Les", "Z9.99")];
        let errors = validate_input(&directory, &schedule).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
