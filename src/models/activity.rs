//! Scheduled activity model.
//!
//! A scheduled activity is one row of the timetable: a named activity
//! booked into a room over a date range, with an expected group size.
//!
//! # Nullable Fields
//!
//! Timetables arrive as tabular exports with unreliable cells. Dates and
//! group sizes that fail to parse are carried as `None` rather than
//! aborting the load. The engine treats unknown values conservatively: an
//! unknown start date never matches the outage date filter, and an unknown
//! group size can never be proven to fit any room.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One timetable row: an activity booked into a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledActivity {
    /// Activity label (course or event name).
    pub label: String,
    /// Booked room code. May reference a code the directory does not
    /// contain; the room's capacity is then unknown.
    pub room: String,
    /// First occurrence date. `None` if the source value was blank or
    /// unparsable.
    pub start_date: Option<NaiveDate>,
    /// Last occurrence date. `None` if blank or unparsable.
    pub end_date: Option<NaiveDate>,
    /// Expected number of participants. `None` if blank or unparsable.
    pub group_size: Option<u32>,
    /// Unrecognized source columns, carried through untouched.
    pub attributes: HashMap<String, String>,
}

impl ScheduledActivity {
    /// Creates an activity booked into a room.
    pub fn new(label: impl Into<String>, room: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            room: room.into(),
            start_date: None,
            end_date: None,
            group_size: None,
            attributes: HashMap::new(),
        }
    }

    /// Sets the first occurrence date.
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Sets the last occurrence date.
    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Sets the expected group size.
    pub fn with_group_size(mut self, group_size: u32) -> Self {
        self.group_size = Some(group_size);
        self
    }

    /// Adds a pass-through source attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Whether the recorded start falls on or after the given date.
    ///
    /// Inclusive comparison on calendar dates. An unknown start date never
    /// matches: it cannot be shown to fall inside the outage window.
    pub fn starts_on_or_after(&self, date: NaiveDate) -> bool {
        self.start_date.map_or(false, |d| d >= date)
    }
}
