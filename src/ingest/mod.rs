//! Ingestion of tabular source data.
//!
//! The engine does not read files; collaborators hand over rows of named
//! string fields ([`Record`]) from whatever tabular source they manage,
//! and the loaders here turn those into typed model values. The column
//! contract (Dutch header names) and the lenient date/count coercions
//! live in [`fields`].

pub mod fields;
mod loader;
mod record;

pub use fields::{parse_count, parse_date};
pub use loader::{
    load_directory, load_schedule, DirectoryLoad, LoadIssue, LoadIssueKind, ScheduleLoad,
};
pub use record::Record;
