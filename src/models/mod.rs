//! Roster impact domain models.
//!
//! Core data types for outage impact simulation: the spaces a timetable
//! books (`Room`), the bookings themselves (`ScheduledActivity`), and the
//! outage under consideration (`OutageSelection`).
//!
//! # Source Mapping
//!
//! The models mirror the operational export tables they are loaded from:
//!
//! | Model | Source table | Key columns |
//! |-------|--------------|-------------|
//! | `Room` | locations | `ruimte`, `capaciteit` |
//! | `ScheduledActivity` | schedule | `activiteit`, `ruimte`, `startdatum`, `einddatum`, `groepgrootte` |
//! | `OutageSelection` | user input | — |

mod activity;
mod room;
mod selection;

pub use activity::ScheduledActivity;
pub use room::{building_code, Room};
pub use selection::OutageSelection;
