use super::SnapshotStore;
use crate::error::Result;
use crate::model::Report;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    snapshot: Vec<Report>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for InMemoryStore {
    fn save(&mut self, reports: &[Report]) -> Result<()> {
        self.snapshot = reports.to_vec();
        Ok(())
    }

    fn load(&self) -> Result<Vec<Report>> {
        Ok(self.snapshot.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::FixError;
    use crate::model::{IssueType, Priority, Submission};
    use crate::session::{Session, DEFAULT_ADMIN_SECRET};

    /// A fresh anonymous session over an empty in-memory store.
    pub fn session() -> Session<InMemoryStore> {
        Session::open(InMemoryStore::new(), DEFAULT_ADMIN_SECRET)
    }

    /// A submission that passes every validation rule.
    pub fn submission(name: &str, location: &str) -> Submission {
        Submission {
            reporter_name: name.to_string(),
            reporter_contact: "0917 555 0199".to_string(),
            issue_type: IssueType::Pothole,
            location: location.to_string(),
            description: "Deep pothole blocking the outer lane".to_string(),
            priority: Priority::Medium,
            photo: None,
        }
    }

    /// A store whose loads and saves always fail, for exercising the
    /// warning-downgrade paths.
    pub struct FailingStore;

    impl SnapshotStore for FailingStore {
        fn save(&mut self, _reports: &[Report]) -> Result<()> {
            Err(FixError::Store("backing file unavailable".to_string()))
        }

        fn load(&self) -> Result<Vec<Report>> {
            Err(FixError::Store("backing file unavailable".to_string()))
        }
    }
}
