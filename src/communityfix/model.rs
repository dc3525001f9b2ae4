use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Assignee placeholder for freshly submitted reports.
pub const NOT_ASSIGNED: &str = "Not assigned";

/// Timestamp rendering used for terminal display and CSV rows. The snapshot
/// file itself stores full ISO-8601 timestamps.
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Received,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Received, Status::InProgress, Status::Resolved];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Received => "Received",
            Status::InProgress => "In Progress",
            Status::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| s.trim().eq_ignore_ascii_case(v.as_str()))
            .ok_or_else(|| format!("unknown status: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Emergency,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Emergency,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Emergency => "Emergency",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| s.trim().eq_ignore_ascii_case(v.as_str()))
            .ok_or_else(|| format!("unknown priority: {}", s))
    }
}

/// The fixed issue catalogue from the submission form, plus `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueType {
    Pothole,
    #[serde(rename = "Garbage Accumulation")]
    GarbageAccumulation,
    #[serde(rename = "Broken Streetlight")]
    BrokenStreetlight,
    #[serde(rename = "Clogged Drainage")]
    CloggedDrainage,
    Graffiti,
    #[serde(rename = "Damaged Road")]
    DamagedRoad,
    #[serde(rename = "Water Leak")]
    WaterLeak,
    #[serde(rename = "Noise Complaint")]
    NoiseComplaint,
    #[serde(rename = "Safety Hazard")]
    SafetyHazard,
    Other,
}

impl IssueType {
    pub const ALL: [IssueType; 10] = [
        IssueType::Pothole,
        IssueType::GarbageAccumulation,
        IssueType::BrokenStreetlight,
        IssueType::CloggedDrainage,
        IssueType::Graffiti,
        IssueType::DamagedRoad,
        IssueType::WaterLeak,
        IssueType::NoiseComplaint,
        IssueType::SafetyHazard,
        IssueType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IssueType::Pothole => "Pothole",
            IssueType::GarbageAccumulation => "Garbage Accumulation",
            IssueType::BrokenStreetlight => "Broken Streetlight",
            IssueType::CloggedDrainage => "Clogged Drainage",
            IssueType::Graffiti => "Graffiti",
            IssueType::DamagedRoad => "Damaged Road",
            IssueType::WaterLeak => "Water Leak",
            IssueType::NoiseComplaint => "Noise Complaint",
            IssueType::SafetyHazard => "Safety Hazard",
            IssueType::Other => "Other",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| s.trim().eq_ignore_ascii_case(v.as_str()))
            .ok_or_else(|| format!("unknown issue type: {}", s))
    }
}

/// Uploaded photo payload. Serialized as a base64 string so the snapshot
/// stays a single text document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo(Vec<u8>);

impl Photo {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }

    pub fn from_base64(encoded: &str) -> Result<Self, base64::DecodeError> {
        STANDARD.decode(encoded).map(Self)
    }
}

impl Serialize for Photo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for Photo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        Photo::from_base64(&encoded).map_err(D::Error::custom)
    }
}

/// A timestamped admin note on a report. Append-only; storage order is
/// append order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Resident input for a new report, before validation.
#[derive(Debug, Clone)]
pub struct Submission {
    pub reporter_name: String,
    pub reporter_contact: String,
    pub issue_type: IssueType,
    pub location: String,
    pub description: String,
    pub priority: Priority,
    pub photo: Option<Photo>,
}

/// One user-submitted community issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: u64,
    pub reporter_name: String,
    pub reporter_contact: String,
    pub issue_type: IssueType,
    pub location: String,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    pub assigned_to: String,
    pub date_reported: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<Photo>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Report {
    pub fn new(id: u64, submission: Submission) -> Self {
        Self {
            id,
            reporter_name: submission.reporter_name,
            reporter_contact: submission.reporter_contact,
            issue_type: submission.issue_type,
            location: submission.location,
            description: submission.description,
            priority: submission.priority,
            status: Status::Received,
            assigned_to: NOT_ASSIGNED.to_string(),
            date_reported: Utc::now(),
            photo: submission.photo,
            comments: Vec::new(),
        }
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_strings_round_trip() {
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
        assert_eq!("in progress".parse::<Status>().unwrap(), Status::InProgress);
        assert!("Open".parse::<Status>().is_err());
    }

    #[test]
    fn issue_type_strings_round_trip() {
        for issue_type in IssueType::ALL {
            assert_eq!(
                issue_type.as_str().parse::<IssueType>().unwrap(),
                issue_type
            );
        }
        assert_eq!(
            "water leak".parse::<IssueType>().unwrap(),
            IssueType::WaterLeak
        );
    }

    #[test]
    fn priority_defaults_to_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn status_serializes_as_display_string() {
        assert_eq!(
            serde_json::to_string(&Status::InProgress).unwrap(),
            "\"In Progress\""
        );
    }

    #[test]
    fn photo_base64_round_trip() {
        let bytes = vec![0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00];
        let photo = Photo::new(bytes.clone());
        let decoded = Photo::from_base64(&photo.to_base64()).unwrap();
        assert_eq!(decoded.as_bytes(), bytes.as_slice());
    }

    #[test]
    fn photo_serializes_as_string() {
        let photo = Photo::new(vec![1, 2, 3]);
        let json = serde_json::to_string(&photo).unwrap();
        assert_eq!(json, "\"AQID\"");
        let parsed: Photo = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, photo);
    }

    #[test]
    fn new_report_has_received_defaults() {
        let submission = Submission {
            reporter_name: "Maria Santos".to_string(),
            reporter_contact: "0917 555 0123".to_string(),
            issue_type: IssueType::BrokenStreetlight,
            location: "Purok 3, near the chapel".to_string(),
            description: "Streetlight has been out for a week".to_string(),
            priority: Priority::default(),
            photo: None,
        };
        let report = Report::new(1, submission);
        assert_eq!(report.id, 1);
        assert_eq!(report.status, Status::Received);
        assert_eq!(report.assigned_to, NOT_ASSIGNED);
        assert!(report.comments.is_empty());
    }
}
