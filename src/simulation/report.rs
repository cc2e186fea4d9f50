//! Simulation results.
//!
//! The aggregated outcome of a run: every conflicting activity with its
//! relocation verdict and capacity diagnostics, the headline counts, and
//! the export projection for the rows that need human planning. All
//! result types serialize, so collaborators can move them across a
//! process boundary as JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::directory::RoomDirectory;
use crate::models::ScheduledActivity;
use crate::simulation::relocation::is_relocatable;

/// One conflicting activity with its assessment.
///
/// The activity itself is carried unchanged; the verdict and the
/// capacity diagnostics live alongside it. `room_capacity` is the
/// capacity of the (removed) scheduled room, `fits_current_room` whether
/// the group fits that room — useful for spotting activities that were
/// already overbooked before the outage. Both are `None` when either
/// side of the comparison is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// The conflicting activity, as scheduled.
    pub activity: ScheduledActivity,
    /// Capacity of the removed room it was booked into.
    pub room_capacity: Option<u32>,
    /// Whether the group fit the room it is losing.
    pub fits_current_room: Option<bool>,
    /// Whether some remaining room can hold the group.
    pub relocatable: bool,
}

impl Conflict {
    /// Assesses one conflicting activity against the remaining rooms.
    pub fn assess(
        activity: &ScheduledActivity,
        directory: &RoomDirectory,
        removed: &HashSet<String>,
    ) -> Self {
        let room_capacity = directory.capacity_of(&activity.room);
        let fits_current_room = match (room_capacity, activity.group_size) {
            (Some(capacity), Some(size)) => Some(size <= capacity),
            _ => None,
        };
        Self {
            activity: activity.clone(),
            room_capacity,
            fits_current_room,
            relocatable: is_relocatable(activity, directory, removed),
        }
    }
}

/// Headline counts of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactSummary {
    /// Number of conflicting activities.
    pub affected: usize,
    /// Of those, how many fit some remaining room.
    pub relocatable: usize,
    /// Of those, how many fit no remaining room.
    pub non_relocatable: usize,
}

/// Data-quality counts over the full schedule, reported with every run
/// so that "no conflicts" can be read against how much of the schedule
/// was actually comparable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Activities whose start date could not be read (never conflict).
    pub missing_start_dates: usize,
    /// Activities whose group size could not be read (never relocatable).
    pub unknown_group_sizes: usize,
}

impl ParseStats {
    /// Counts the unknowns across a typed schedule.
    pub fn from_schedule(schedule: &[ScheduledActivity]) -> Self {
        Self {
            missing_start_dates: schedule.iter().filter(|a| a.start_date.is_none()).count(),
            unknown_group_sizes: schedule.iter().filter(|a| a.group_size.is_none()).count(),
        }
    }
}

/// Export projection of one non-relocatable activity.
///
/// Field names serialize to the Dutch column names of the source
/// contract, in the order collaborators render them (see
/// [`SCHEDULE_COLUMNS`](crate::ingest::fields::SCHEDULE_COLUMNS)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactRow {
    /// Activity label.
    #[serde(rename = "activiteit")]
    pub activity: String,
    /// Booked (removed) room code.
    #[serde(rename = "ruimte")]
    pub room: String,
    /// First occurrence date.
    #[serde(rename = "startdatum")]
    pub start_date: Option<NaiveDate>,
    /// Last occurrence date.
    #[serde(rename = "einddatum")]
    pub end_date: Option<NaiveDate>,
    /// Expected number of participants.
    #[serde(rename = "groepgrootte")]
    pub group_size: Option<u32>,
}

impl From<&ScheduledActivity> for ImpactRow {
    fn from(activity: &ScheduledActivity) -> Self {
        Self {
            activity: activity.label.clone(),
            room: activity.room.clone(),
            start_date: activity.start_date,
            end_date: activity.end_date,
            group_size: activity.group_size,
        }
    }
}

/// Complete outcome of one simulation run.
///
/// `conflicts` keeps schedule order; the relocatable and non-relocatable
/// views are order-preserving partitions of it, so their sizes always
/// add up to `conflicts.len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Conflicting activities with their verdicts, in schedule order.
    pub conflicts: Vec<Conflict>,
    /// Data-quality counts over the full schedule.
    pub parse_stats: ParseStats,
}

impl SimulationResult {
    /// Conflicts that fit some remaining room.
    pub fn relocatable(&self) -> Vec<&Conflict> {
        self.conflicts.iter().filter(|c| c.relocatable).collect()
    }

    /// Conflicts that fit no remaining room.
    pub fn non_relocatable(&self) -> Vec<&Conflict> {
        self.conflicts.iter().filter(|c| !c.relocatable).collect()
    }

    /// Headline counts.
    pub fn summary(&self) -> ImpactSummary {
        let relocatable = self.conflicts.iter().filter(|c| c.relocatable).count();
        ImpactSummary {
            affected: self.conflicts.len(),
            relocatable,
            non_relocatable: self.conflicts.len() - relocatable,
        }
    }

    /// Export rows for the activities that need manual planning.
    pub fn non_relocatable_rows(&self) -> Vec<ImpactRow> {
        self.conflicts
            .iter()
            .filter(|c| !c.relocatable)
            .map(|c| ImpactRow::from(&c.activity))
            .collect()
    }
}
