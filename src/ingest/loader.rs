//! Loaders from raw records to typed model values.
//!
//! Loading never fails: every malformed field degrades to its unknown
//! form (`None`, or an empty string for textual keys) and is reported as
//! a [`LoadIssue`] next to the typed result. Downstream stages decide
//! what an unknown means; the loader only records that it happened.

use log::{debug, trace};
use std::collections::HashSet;

use crate::directory::RoomDirectory;
use crate::ingest::fields::{
    self, parse_count, parse_date, ACTIVITY, CAPACITY, END_DATE, GROUP_SIZE, ROOM, START_DATE,
};
use crate::ingest::record::Record;
use crate::models::{Room, ScheduledActivity};

/// Classification of an absorbed load problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadIssueKind {
    /// A field was absent or blank.
    MissingField,
    /// A date field held a value no accepted format could read.
    UnparsableDate,
    /// A count field held a value that is not a non-negative integer.
    UnparsableCount,
    /// A room code occurred more than once in the location table.
    DuplicateRoomCode,
}

/// One absorbed problem, pointing at the zero-based source row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadIssue {
    /// Zero-based index of the source record.
    pub row: usize,
    /// Issue category.
    pub kind: LoadIssueKind,
    /// Human-readable description.
    pub message: String,
}

impl LoadIssue {
    pub fn new(row: usize, kind: LoadIssueKind, message: impl Into<String>) -> Self {
        Self {
            row,
            kind,
            message: message.into(),
        }
    }
}

/// A loaded room directory together with the issues absorbed on the way.
#[derive(Debug, Clone, Default)]
pub struct DirectoryLoad {
    /// The deduplicated directory.
    pub directory: RoomDirectory,
    /// Problems absorbed while loading.
    pub issues: Vec<LoadIssue>,
}

/// A loaded schedule together with the issues absorbed on the way.
#[derive(Debug, Clone, Default)]
pub struct ScheduleLoad {
    /// Typed activities, one per source record.
    pub schedule: Vec<ScheduledActivity>,
    /// Problems absorbed while loading.
    pub issues: Vec<LoadIssue>,
}

/// Loads the location table into a [`RoomDirectory`].
///
/// Records without a usable room code are skipped (nothing could ever
/// reference them); a missing or unreadable capacity keeps the room with
/// `capacity: None`. Duplicate codes are reported and the last occurrence
/// wins, matching how a keyed lookup over the source table behaves.
pub fn load_directory(records: &[Record]) -> DirectoryLoad {
    let mut rooms: Vec<Room> = Vec::with_capacity(records.len());
    let mut issues: Vec<LoadIssue> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (row, record) in records.iter().enumerate() {
        let code = match record.get_trimmed(ROOM) {
            Some(code) => code.to_string(),
            None => {
                trace!("location row {row}: no room code, skipping");
                issues.push(LoadIssue::new(
                    row,
                    LoadIssueKind::MissingField,
                    format!("location row {row}: field `{ROOM}` is missing or blank"),
                ));
                continue;
            }
        };
        if !seen.insert(code.clone()) {
            issues.push(LoadIssue::new(
                row,
                LoadIssueKind::DuplicateRoomCode,
                format!("location row {row}: room `{code}` occurs earlier, keeping this one"),
            ));
        }

        let mut room = Room::new(code);
        match record.get_trimmed(CAPACITY) {
            None => issues.push(LoadIssue::new(
                row,
                LoadIssueKind::MissingField,
                format!("location row {row}: field `{CAPACITY}` is missing or blank"),
            )),
            Some(raw) => match parse_count(raw) {
                Some(capacity) => room = room.with_capacity(capacity),
                None => issues.push(LoadIssue::new(
                    row,
                    LoadIssueKind::UnparsableCount,
                    format!("location row {row}: `{CAPACITY}` value `{raw}` is not a count"),
                )),
            },
        }
        rooms.push(room);
    }

    let directory = RoomDirectory::from_rooms(rooms);
    debug!(
        "loaded {} rooms from {} location records ({} issues)",
        directory.len(),
        records.len(),
        issues.len()
    );
    DirectoryLoad { directory, issues }
}

/// Loads the schedule table into typed activities.
///
/// Every record becomes an activity, however incomplete: a row with an
/// unreadable start date still exists in the schedule, it just cannot be
/// placed on the calendar. Columns outside the known five are carried
/// along verbatim as activity attributes.
pub fn load_schedule(records: &[Record]) -> ScheduleLoad {
    let mut schedule: Vec<ScheduledActivity> = Vec::with_capacity(records.len());
    let mut issues: Vec<LoadIssue> = Vec::new();

    for (row, record) in records.iter().enumerate() {
        let label = required_text(record, ACTIVITY, row, &mut issues);
        let room = required_text(record, ROOM, row, &mut issues);
        let mut activity = ScheduledActivity::new(label, room);

        if let Some(date) = date_field(record, START_DATE, row, &mut issues) {
            activity = activity.with_start_date(date);
        }
        if let Some(date) = date_field(record, END_DATE, row, &mut issues) {
            activity = activity.with_end_date(date);
        }
        match record.get_trimmed(GROUP_SIZE) {
            None => issues.push(LoadIssue::new(
                row,
                LoadIssueKind::MissingField,
                format!("schedule row {row}: field `{GROUP_SIZE}` is missing or blank"),
            )),
            Some(raw) => match parse_count(raw) {
                Some(size) => activity = activity.with_group_size(size),
                None => issues.push(LoadIssue::new(
                    row,
                    LoadIssueKind::UnparsableCount,
                    format!("schedule row {row}: `{GROUP_SIZE}` value `{raw}` is not a count"),
                )),
            },
        }

        for (name, value) in record.fields() {
            if !fields::SCHEDULE_COLUMNS.contains(&name) {
                activity = activity.with_attribute(name, value);
            }
        }
        schedule.push(activity);
    }

    debug!(
        "loaded {} activities from {} schedule records ({} issues)",
        schedule.len(),
        records.len(),
        issues.len()
    );
    ScheduleLoad { schedule, issues }
}

/// Reads a textual key field; absence degrades to an empty string.
fn required_text(record: &Record, field: &str, row: usize, issues: &mut Vec<LoadIssue>) -> String {
    match record.get_trimmed(field) {
        Some(value) => value.to_string(),
        None => {
            issues.push(LoadIssue::new(
                row,
                LoadIssueKind::MissingField,
                format!("schedule row {row}: field `{field}` is missing or blank"),
            ));
            String::new()
        }
    }
}

/// Reads a date field; any failure degrades to `None` with an issue.
fn date_field(
    record: &Record,
    field: &str,
    row: usize,
    issues: &mut Vec<LoadIssue>,
) -> Option<chrono::NaiveDate> {
    match record.get_trimmed(field) {
        None => {
            issues.push(LoadIssue::new(
                row,
                LoadIssueKind::MissingField,
                format!("schedule row {row}: field `{field}` is missing or blank"),
            ));
            None
        }
        Some(raw) => match parse_date(raw) {
            Some(date) => Some(date),
            None => {
                trace!("schedule row {row}: `{field}` value `{raw}` not parsable as a date");
                issues.push(LoadIssue::new(
                    row,
                    LoadIssueKind::UnparsableDate,
                    format!("schedule row {row}: `{field}` value `{raw}` is not a date"),
                ));
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn location(code: &str, capacity: &str) -> Record {
        Record::from_pairs([(ROOM, code), (CAPACITY, capacity)])
    }

    fn lesson(label: &str, room: &str, start: &str, end: &str, size: &str) -> Record {
        Record::from_pairs([
            (ACTIVITY, label),
            (ROOM, room),
            (START_DATE, start),
            (END_DATE, end),
            (GROUP_SIZE, size),
        ])
    }

    #[test]
    fn test_load_directory_clean() {
        let load = load_directory(&[location("A1.01", "30"), location("B2.01", "45")]);
        assert!(load.issues.is_empty());
        assert_eq!(load.directory.len(), 2);
        assert_eq!(load.directory.capacity_of("A1.01"), Some(30));
        assert_eq!(load.directory.get("B2.01").unwrap().building.as_deref(), Some("B"));
    }

    #[test]
    fn test_load_directory_degrades_bad_capacity() {
        let load = load_directory(&[location("A1.01", "veel"), location("A1.02", "")]);
        assert_eq!(load.directory.len(), 2);
        assert_eq!(load.directory.capacity_of("A1.01"), None);
        assert_eq!(load.directory.capacity_of("A1.02"), None);
        assert_eq!(load.issues.len(), 2);
        assert_eq!(load.issues[0].kind, LoadIssueKind::UnparsableCount);
        assert_eq!(load.issues[1].kind, LoadIssueKind::MissingField);
    }

    #[test]
    fn test_load_directory_skips_blank_code() {
        let load = load_directory(&[location("", "30"), location("A1.01", "30")]);
        assert_eq!(load.directory.len(), 1);
        assert_eq!(load.issues.len(), 1);
        assert_eq!(load.issues[0].row, 0);
        assert_eq!(load.issues[0].kind, LoadIssueKind::MissingField);
    }

    #[test]
    fn test_load_directory_duplicate_last_wins() {
        let load = load_directory(&[location("A1.01", "30"), location("A1.01", "60")]);
        assert_eq!(load.directory.len(), 1);
        assert_eq!(load.directory.capacity_of("A1.01"), Some(60));
        assert_eq!(load.issues.len(), 1);
        assert_eq!(load.issues[0].kind, LoadIssueKind::DuplicateRoomCode);
        assert_eq!(load.issues[0].row, 1);
    }

    #[test]
    fn test_load_schedule_clean() {
        let load = load_schedule(&[lesson(
            "Wiskunde B",
            "A1.01",
            "2025-09-01",
            "2026-01-20",
            "28",
        )]);
        assert!(load.issues.is_empty());
        let activity = &load.schedule[0];
        assert_eq!(activity.label, "Wiskunde B");
        assert_eq!(activity.room, "A1.01");
        assert_eq!(
            activity.start_date,
            NaiveDate::from_ymd_opt(2025, 9, 1)
        );
        assert_eq!(activity.end_date, NaiveDate::from_ymd_opt(2026, 1, 20));
        assert_eq!(activity.group_size, Some(28));
    }

    #[test]
    fn test_load_schedule_degrades_bad_fields() {
        let load = load_schedule(&[lesson("Scheikunde", "B2.01", "binnenkort", "", "veel")]);
        assert_eq!(load.schedule.len(), 1);
        let activity = &load.schedule[0];
        assert_eq!(activity.start_date, None);
        assert_eq!(activity.end_date, None);
        assert_eq!(activity.group_size, None);
        let kinds: Vec<LoadIssueKind> = load.issues.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LoadIssueKind::UnparsableDate,
                LoadIssueKind::MissingField,
                LoadIssueKind::UnparsableCount,
            ]
        );
    }

    #[test]
    fn test_load_schedule_keeps_incomplete_rows() {
        let load = load_schedule(&[Record::from_pairs([(ACTIVITY, "Mentoruur")])]);
        assert_eq!(load.schedule.len(), 1);
        assert_eq!(load.schedule[0].room, "");
        assert_eq!(load.schedule[0].start_date, None);
        // room, startdatum, einddatum, groepgrootte all reported
        assert_eq!(load.issues.len(), 4);
    }

    #[test]
    fn test_load_schedule_carries_extra_columns() {
        let record = lesson("Biologie", "C1.11", "2025-09-02", "2026-06-30", "24")
            .with_field("Docent", "JNS");
        let load = load_schedule(&[record]);
        assert_eq!(
            load.schedule[0].attributes.get("docent").map(String::as_str),
            Some("JNS")
        );
    }

    #[test]
    fn test_case_insensitive_headers() {
        let record = Record::from_pairs([
            ("Activiteit", "Natuurkunde"),
            ("RUIMTE", "A2.05"),
            ("StartDatum", "2025-09-01"),
            ("EindDatum", "2026-07-01"),
            ("GroepGrootte", "31"),
        ]);
        let load = load_schedule(&[record]);
        assert!(load.issues.is_empty());
        assert_eq!(load.schedule[0].room, "A2.05");
        assert_eq!(load.schedule[0].group_size, Some(31));
    }
}
