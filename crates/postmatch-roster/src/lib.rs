//! Subscriber roster sources.
//!
//! The matcher only needs an ordered slice of [`SubscriberRecord`]s; this
//! crate produces one from a CSV export or from the built-in demo set.

pub mod csv_roster;
pub mod demo;

use std::path::PathBuf;

use postmatch_model::{Result, SubscriberRecord};
use tracing::warn;

pub use csv_roster::{load_roster_csv, read_roster};
pub use demo::demo_roster;

/// Where the roster comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterSource {
    /// The built-in demo subscribers.
    Demo,
    /// A CSV export on disk.
    Csv(PathBuf),
}

impl RosterSource {
    /// Uses the CSV file when given, the demo roster otherwise.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Demo, Self::Csv)
    }

    /// Loads the roster. Read failures are reported, not replaced by demo data.
    pub fn load(&self) -> Result<Vec<SubscriberRecord>> {
        match self {
            Self::Demo => {
                warn!("no roster file given, using demo subscribers");
                Ok(demo_roster())
            }
            Self::Csv(path) => load_roster_csv(path),
        }
    }
}
