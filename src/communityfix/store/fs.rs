use super::{SnapshotFile, SnapshotStore};
use crate::error::{FixError, Result};
use crate::model::Report;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// Default backing file name, matching the conventional data layout.
pub const DATA_FILENAME: &str = "reports_data.json";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(FixError::Io)?;
            }
        }
        Ok(())
    }
}

impl SnapshotStore for FileStore {
    fn save(&mut self, reports: &[Report]) -> Result<()> {
        self.ensure_parent_dir()?;

        let snapshot = SnapshotFile {
            reports: reports.to_vec(),
            last_updated: Utc::now(),
        };
        let content = serde_json::to_string_pretty(&snapshot).map_err(FixError::Serialization)?;
        fs::write(&self.path, content).map_err(FixError::Io)?;
        Ok(())
    }

    fn load(&self) -> Result<Vec<Report>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(FixError::Io)?;
        let snapshot: SnapshotFile =
            serde_json::from_str(&content).map_err(FixError::Serialization)?;
        Ok(snapshot.reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Comment, Photo, Report, Submission};
    use crate::model::{IssueType, Priority};

    fn report(id: u64, location: &str) -> Report {
        Report::new(
            id,
            Submission {
                reporter_name: "Juan dela Cruz".to_string(),
                reporter_contact: "0917 555 0199".to_string(),
                issue_type: IssueType::Pothole,
                location: location.to_string(),
                description: "Deep pothole blocking the outer lane".to_string(),
                priority: Priority::Medium,
                photo: None,
            },
        )
    }

    #[test]
    fn missing_file_loads_empty() {
        let temp = tempfile::tempdir().unwrap();
        let store = FileStore::new(temp.path().join(DATA_FILENAME));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn round_trip_preserves_reports() {
        let temp = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(temp.path().join(DATA_FILENAME));

        let no_comments = report(1, "Main Street");

        let mut commented = report(2, "Rizal Avenue");
        commented.add_comment(Comment::new("Admin", "Crew dispatched"));
        commented.add_comment(Comment::new("Engineer", "Repair scheduled Friday"));

        let mut with_photo = report(3, "Purok 5 basketball court");
        with_photo.photo = Some(Photo::new(vec![0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10]));

        let reports = vec![no_comments, commented, with_photo];
        store.save(&reports).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, reports);
        assert_eq!(loaded[1].comments[0].text, "Crew dispatched");
        assert_eq!(
            loaded[2].photo.as_ref().unwrap().as_bytes(),
            &[0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10]
        );
    }

    #[test]
    fn save_overwrites_prior_snapshot() {
        let temp = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(temp.path().join(DATA_FILENAME));

        store.save(&[report(1, "Main Street"), report(2, "Side street")])
            .unwrap();
        store.save(&[report(1, "Main Street")]).unwrap();

        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn save_creates_parent_dirs() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("data").join("communityfix");
        let mut store = FileStore::new(nested.join(DATA_FILENAME));

        store.save(&[report(1, "Main Street")]).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join(DATA_FILENAME);
        std::fs::write(&path, "{ not json").unwrap();

        let store = FileStore::new(path);
        assert!(matches!(
            store.load(),
            Err(FixError::Serialization(_))
        ));
    }
}
