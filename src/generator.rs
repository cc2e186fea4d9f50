//! Synthetic roster data.
//!
//! Generates location and schedule records shaped like the real source
//! tables, including their typical defects (blank start dates,
//! unreadable group sizes), for tests and demos. Output is raw
//! [`Record`]s, so generated data exercises the loaders exactly like
//! collaborator data does. Deterministic under a seeded RNG.

use chrono::{Days, NaiveDate};
use rand::Rng;
use std::ops::RangeInclusive;

use crate::ingest::fields::{ACTIVITY, CAPACITY, END_DATE, GROUP_SIZE, ROOM, START_DATE};
use crate::ingest::Record;

const SUBJECTS: [&str; 10] = [
    "Wiskunde",
    "Nederlands",
    "Engels",
    "Biologie",
    "Scheikunde",
    "Natuurkunde",
    "Geschiedenis",
    "Aardrijkskunde",
    "Economie",
    "Frans",
];

/// A generated pair of source tables.
#[derive(Debug, Clone)]
pub struct RosterDataset {
    /// Location records (`ruimte`, `capaciteit`).
    pub locations: Vec<Record>,
    /// Schedule records (`activiteit`, `ruimte`, dates, `groepgrootte`).
    pub schedule: Vec<Record>,
}

/// Configurable generator for synthetic roster tables.
#[derive(Debug, Clone)]
pub struct RosterGenerator {
    /// Building codes; each gets `rooms_per_building` rooms.
    pub buildings: Vec<String>,
    /// Rooms per building, numbered per floor of four.
    pub rooms_per_building: u32,
    /// Capacity drawn uniformly from this range.
    pub capacity_range: RangeInclusive<u32>,
    /// Number of schedule rows.
    pub activities: usize,
    /// Earliest possible start date.
    pub first_date: NaiveDate,
    /// Start dates fall within this many days after `first_date`.
    pub horizon_days: u64,
    /// Group size drawn uniformly from this range.
    pub group_size_range: RangeInclusive<u32>,
    /// Fraction of rows with a blank start date.
    pub blank_date_rate: f64,
    /// Fraction of rows with an unreadable group size.
    pub corrupt_size_rate: f64,
}

impl Default for RosterGenerator {
    fn default() -> Self {
        Self {
            buildings: vec!["A".into(), "B".into(), "C".into()],
            rooms_per_building: 8,
            capacity_range: 10..=40,
            activities: 120,
            first_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap_or_default(),
            horizon_days: 300,
            group_size_range: 8..=45,
            blank_date_rate: 0.05,
            corrupt_size_rate: 0.05,
        }
    }
}

impl RosterGenerator {
    /// Creates a generator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the building codes.
    pub fn with_buildings(mut self, buildings: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.buildings = buildings.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the number of schedule rows.
    pub fn with_activities(mut self, activities: usize) -> Self {
        self.activities = activities;
        self
    }

    /// Sets the capacity range.
    pub fn with_capacity_range(mut self, range: RangeInclusive<u32>) -> Self {
        self.capacity_range = range;
        self
    }

    /// Sets the group size range.
    pub fn with_group_size_range(mut self, range: RangeInclusive<u32>) -> Self {
        self.group_size_range = range;
        self
    }

    /// Sets the defect rates (blank start dates, unreadable group sizes).
    pub fn with_defect_rates(mut self, blank_date: f64, corrupt_size: f64) -> Self {
        self.blank_date_rate = blank_date;
        self.corrupt_size_rate = corrupt_size;
        self
    }

    /// Generates both tables.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> RosterDataset {
        let mut room_codes: Vec<String> = Vec::new();
        let mut locations: Vec<Record> = Vec::new();
        for building in &self.buildings {
            for i in 0..self.rooms_per_building {
                let code = format!("{building}{}.{:02}", 1 + i / 4, 1 + i % 4);
                let capacity = rng.random_range(self.capacity_range.clone());
                locations.push(Record::from_pairs([
                    (ROOM, code.clone()),
                    (CAPACITY, capacity.to_string()),
                ]));
                room_codes.push(code);
            }
        }

        if room_codes.is_empty() {
            return RosterDataset {
                locations,
                schedule: Vec::new(),
            };
        }

        let horizon = self.horizon_days.max(1);
        let blank_date_rate = self.blank_date_rate.clamp(0.0, 1.0);
        let corrupt_size_rate = self.corrupt_size_rate.clamp(0.0, 1.0);

        let mut schedule: Vec<Record> = Vec::with_capacity(self.activities);
        for _ in 0..self.activities {
            let subject = SUBJECTS[rng.random_range(0..SUBJECTS.len())];
            let year = rng.random_range(1..=6u32);
            let class = (b'a' + rng.random_range(0..5u8)) as char;
            let room = &room_codes[rng.random_range(0..room_codes.len())];

            let start = self
                .first_date
                .checked_add_days(Days::new(rng.random_range(0..horizon)))
                .unwrap_or(self.first_date);
            let end = start
                .checked_add_days(Days::new(rng.random_range(30..=200)))
                .unwrap_or(start);

            let start_text = if rng.random_bool(blank_date_rate) {
                String::new()
            } else {
                start.to_string()
            };
            let size_text = if rng.random_bool(corrupt_size_rate) {
                "onbekend".to_string()
            } else {
                rng.random_range(self.group_size_range.clone()).to_string()
            };

            schedule.push(Record::from_pairs([
                (ACTIVITY, format!("{subject} {year}{class}")),
                (ROOM, room.clone()),
                (START_DATE, start_text),
                (END_DATE, end.to_string()),
                (GROUP_SIZE, size_text),
            ]));
        }

        RosterDataset {
            locations,
            schedule,
        }
    }
}
