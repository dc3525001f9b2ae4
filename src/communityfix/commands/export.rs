use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Report, DISPLAY_TIME_FORMAT};
use crate::session::Session;
use crate::store::SnapshotStore;

const HEADER: &str = "id,reporter_name,reporter_contact,issue_type,location,description,\
priority,status,assigned_to,date_reported,comments,photo";

pub fn run<S: SnapshotStore>(session: &Session<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_rendered(to_csv(session.reports())))
}

// Comments flatten to a count, photos to a yes/no flag; everything else is a
// scalar column.
fn to_csv(reports: &[Report]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for report in reports {
        let row = [
            report.id.to_string(),
            field(&report.reporter_name),
            field(&report.reporter_contact),
            field(report.issue_type.as_str()),
            field(&report.location),
            field(&report.description),
            report.priority.as_str().to_string(),
            report.status.as_str().to_string(),
            field(&report.assigned_to),
            report.date_reported.format(DISPLAY_TIME_FORMAT).to_string(),
            report.comments.len().to_string(),
            if report.photo.is_some() { "yes" } else { "no" }.to_string(),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// Quote a field when it contains a delimiter, quote, or line break.
fn field(raw: &str) -> String {
    if raw.contains(|c| matches!(c, ',' | '"' | '\n' | '\r')) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}
