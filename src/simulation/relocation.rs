//! Relocation feasibility.
//!
//! Answers, per displaced activity, whether any room outside the removed
//! set could hold its group by capacity alone. The check is deliberately
//! coarse: it ignores timing, double bookings and competition between
//! displaced activities for the same candidate room. A `false` here is
//! therefore a strong signal (no room in the whole remaining stock is
//! big enough), while a `true` only means relocation is not ruled out
//! by capacity.

use std::collections::HashSet;

use crate::directory::RoomDirectory;
use crate::models::ScheduledActivity;

/// Whether some remaining room can hold the activity's group.
///
/// Unknown group size means the requirement cannot be verified against
/// any room, so the activity is reported as not relocatable. Rooms with
/// unknown capacity never qualify as candidates for the same reason.
pub fn is_relocatable(
    activity: &ScheduledActivity,
    directory: &RoomDirectory,
    removed: &HashSet<String>,
) -> bool {
    let group_size = match activity.group_size {
        Some(size) => size,
        None => return false,
    };
    directory
        .rooms()
        .iter()
        .filter(|room| !removed.contains(&room.code))
        .any(|room| room.can_host(group_size))
}
