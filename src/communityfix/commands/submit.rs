use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FixError, Result};
use crate::model::{Report, Submission};
use crate::session::Session;
use crate::store::SnapshotStore;

const MIN_NAME_CHARS: usize = 2;
const MIN_CONTACT_CHARS: usize = 10;
const MIN_LOCATION_CHARS: usize = 5;
const MIN_DESCRIPTION_CHARS: usize = 10;

pub fn run<S: SnapshotStore>(
    session: &mut Session<S>,
    submission: Submission,
) -> Result<CmdResult> {
    let violations = validate(&submission);
    if !violations.is_empty() {
        return Err(FixError::Validation(violations));
    }

    let report = Report::new(session.next_id(), submission);
    session.push(report.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Report submitted: #{}",
        report.id
    )));
    if let Some(warning) = session.persist() {
        result.add_message(warning);
    }
    Ok(result.with_affected_reports(vec![report]))
}

// Every violated rule is reported, not just the first.
fn validate(submission: &Submission) -> Vec<String> {
    let mut violations = Vec::new();
    if submission.reporter_name.trim().chars().count() < MIN_NAME_CHARS {
        violations.push("Please enter a valid name (at least 2 characters)".to_string());
    }
    if submission.reporter_contact.trim().chars().count() < MIN_CONTACT_CHARS {
        violations.push("Please enter a valid contact number (at least 10 digits)".to_string());
    }
    if submission.location.trim().chars().count() < MIN_LOCATION_CHARS {
        violations.push("Please provide a more specific location".to_string());
    }
    if submission.description.trim().chars().count() < MIN_DESCRIPTION_CHARS {
        violations.push(
            "Please provide a more detailed description (at least 10 characters)".to_string(),
        );
    }
    violations
}
