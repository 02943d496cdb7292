//! Fair shuffle and allocation engine for FatePick.
//!
//! Provides Fisher–Yates shuffling, single uniform draws, team formation,
//! and round-robin topic allocation for individuals and teams. All
//! operations are pure apart from the random source the caller passes in;
//! [`Picker`] bundles a seeded source with a team size ceiling.

pub mod allocate;
pub mod config;
pub mod draw;
pub mod error;
pub mod picker;
pub mod report;
pub mod shuffle;
pub mod team;

pub use allocate::{TeamAllocation, TopicAllocation, allocate_team_topics, allocate_topics};
pub use config::PickConfig;
pub use draw::draw;
pub use error::{PickError, PickResult};
pub use picker::Picker;
pub use report::{Report, ReportKind};
pub use shuffle::{shuffle, shuffle_in_place};
pub use team::{Team, chunk_teams, form_teams};
