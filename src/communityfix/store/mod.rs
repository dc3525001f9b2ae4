//! # Storage Layer
//!
//! Persistence for the report collection, abstracted behind the
//! [`SnapshotStore`] trait so the core can run against different backends:
//!
//! - [`fs::FileStore`]: production storage, one JSON document
//!   (`reports_data.json`) holding every report plus the save timestamp
//! - [`memory::InMemoryStore`]: no persistence, fast isolated tests
//!
//! The whole collection is rewritten on every mutation. That trades write
//! amplification for simplicity and a crash-consistent "last known good"
//! file, which holds up fine at one barangay's report volume.

use crate::error::Result;
use crate::model::Report;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

/// The on-disk snapshot document: the full collection and when it was saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotFile {
    pub reports: Vec<Report>,
    pub last_updated: DateTime<Utc>,
}

/// Abstract interface for snapshot persistence.
///
/// Implementations only need whole-document load and save; there is no
/// incremental write path.
pub trait SnapshotStore {
    /// Overwrite the backing snapshot with the full collection.
    fn save(&mut self, reports: &[Report]) -> Result<()>;

    /// Load the full collection. A missing backing file yields an empty
    /// collection, not an error.
    fn load(&self) -> Result<Vec<Report>>;
}
