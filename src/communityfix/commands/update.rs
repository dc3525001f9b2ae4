use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FixError, Result};
use crate::model::{Priority, Status};
use crate::session::Session;
use crate::store::SnapshotStore;

/// Partial update applied by an administrator. Unset fields are left alone.
#[derive(Debug, Clone, Default)]
pub struct ReportPatch {
    pub status: Option<Status>,
    pub assigned_to: Option<String>,
    pub priority: Option<Priority>,
}

impl ReportPatch {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.assigned_to.is_none() && self.priority.is_none()
    }
}

pub fn run<S: SnapshotStore>(
    session: &mut Session<S>,
    id: u64,
    patch: &ReportPatch,
) -> Result<CmdResult> {
    let report = session.find_mut(id).ok_or(FixError::ReportNotFound(id))?;

    if let Some(status) = patch.status {
        report.status = status;
    }
    if let Some(assigned_to) = &patch.assigned_to {
        report.assigned_to = assigned_to.clone();
    }
    if let Some(priority) = patch.priority {
        report.priority = priority;
    }
    let updated = report.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Report #{} updated", id)));
    if let Some(warning) = session.persist() {
        result.add_message(warning);
    }
    Ok(result.with_affected_reports(vec![updated]))
}
