use crate::commands::CmdResult;
use crate::error::{FixError, Result};
use crate::session::Session;
use crate::store::SnapshotStore;

pub fn run<S: SnapshotStore>(session: &Session<S>, id: u64) -> Result<CmdResult> {
    let report = session.find(id).ok_or(FixError::ReportNotFound(id))?;
    Ok(CmdResult::default().with_listed_reports(vec![report.clone()]))
}
