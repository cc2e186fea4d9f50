//! Outage impact analysis for room rosters.
//!
//! Answers what an announced room or building closure means for an
//! existing activity schedule: which activities lose their room from the
//! effective date onward, and which of those fit no remaining room by
//! capacity, so a planner must intervene by hand.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Room`, `ScheduledActivity`,
//!   `OutageSelection`
//! - **`directory`**: `RoomDirectory` — normalized room table with
//!   capacity lookup and building/room listings
//! - **`ingest`**: Tabular source contract — `Record`, field names,
//!   lenient date/count coercion, absorbing loaders
//! - **`simulation`**: The engine — selection resolution, conflict
//!   filter, relocation feasibility, aggregated `SimulationResult`
//! - **`validation`**: Input integrity checks (unknown room references,
//!   missing dates and sizes)
//! - **`generator`**: Seeded synthetic roster tables for tests and demos
//!
//! # Architecture
//!
//! The crate is a pure computation core. File handling, user selection
//! surfaces and export encoding belong to collaborators; they hand over
//! rows of named fields and receive a structured result back. Malformed
//! input never fails a run — fields degrade to explicit unknowns that
//! fall on the conservative side of every comparison.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Carter & Laporte (1998), "Recent Developments in Practical Course
//!   Timetabling"

pub mod directory;
pub mod generator;
pub mod ingest;
pub mod models;
pub mod simulation;
pub mod validation;
