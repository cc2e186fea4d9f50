//! Conflict filter.
//!
//! An activity conflicts with an outage when its room is in the removed
//! set and its start date falls on or after the effective date. Whole
//! calendar dates only; the effective date itself counts. `end_date` is
//! deliberately not consulted: an activity that started before the
//! outage is assumed to have run its scheduled occurrences before the
//! rooms close, so only future starts are impacted.

use chrono::NaiveDate;
use log::debug;
use std::collections::HashSet;

use crate::models::ScheduledActivity;

/// Filters the schedule down to the activities hit by the outage.
///
/// Schedule order is preserved. Activities without a readable start date
/// never conflict: they cannot be placed on the calendar, so claiming
/// impact would be a guess (their number is reported separately via
/// parse statistics).
pub fn find_conflicts<'a>(
    schedule: &'a [ScheduledActivity],
    removed: &HashSet<String>,
    effective_date: NaiveDate,
) -> Vec<&'a ScheduledActivity> {
    let conflicts: Vec<&ScheduledActivity> = schedule
        .iter()
        .filter(|activity| {
            removed.contains(&activity.room) && activity.starts_on_or_after(effective_date)
        })
        .collect();
    debug!(
        "{} of {} activities conflict from {effective_date}",
        conflicts.len(),
        schedule.len()
    );
    conflicts
}
