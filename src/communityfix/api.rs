//! # API Facade
//!
//! The single entry point for all communityfix operations, regardless of the
//! UI driving them. The facade dispatches to the command layer, owns the
//! [`Session`], and enforces the one access rule the system has: report
//! mutations made from the dashboard (updates, comments) and the dashboard's
//! export/backup actions require a successful admin login first. Submission
//! and read queries stay open, as they are on the public form.
//!
//! No business logic lives here, and nothing here touches stdout or the
//! filesystem directly.

use crate::commands;
use crate::error::{FixError, Result};
use crate::model::{Report, Submission};
use crate::session::Session;
use crate::store::SnapshotStore;
use std::path::Path;

/// The main API facade.
///
/// Generic over [`SnapshotStore`] to allow different storage backends:
/// `CommunityFixApi<FileStore>` in production, `CommunityFixApi<InMemoryStore>`
/// in tests.
pub struct CommunityFixApi<S: SnapshotStore> {
    session: Session<S>,
}

impl<S: SnapshotStore> CommunityFixApi<S> {
    pub fn new(session: Session<S>) -> Self {
        Self { session }
    }

    /// Open a session over the given store, loading the collection once.
    pub fn open(store: S, admin_secret: impl Into<String>) -> Self {
        Self::new(Session::open(store, admin_secret))
    }

    /// Warning produced if the startup load failed; the caller decides how
    /// to surface it.
    pub fn take_load_warning(&mut self) -> Option<CmdMessage> {
        self.session.take_load_warning()
    }

    pub fn submit_report(&mut self, submission: Submission) -> Result<CmdResult> {
        commands::submit::run(&mut self.session, submission)
    }

    pub fn list_reports(&self, filter: &ReportFilter) -> Result<CmdResult> {
        commands::list::run(&self.session, filter)
    }

    pub fn get_report(&self, id: u64) -> Option<&Report> {
        self.session.find(id)
    }

    pub fn view_report(&self, id: u64) -> Result<CmdResult> {
        commands::view::run(&self.session, id)
    }

    pub fn report_count(&self) -> usize {
        self.session.reports().len()
    }

    pub fn update_report(&mut self, id: u64, patch: &ReportPatch) -> Result<CmdResult> {
        self.require_admin()?;
        commands::update::run(&mut self.session, id, patch)
    }

    pub fn add_comment(&mut self, id: u64, text: &str, author: Option<&str>) -> Result<CmdResult> {
        self.require_admin()?;
        commands::comment::run(
            &mut self.session,
            id,
            text,
            author.unwrap_or(DEFAULT_AUTHOR),
        )
    }

    pub fn statistics(&self) -> Result<CmdResult> {
        commands::stats::run(&self.session)
    }

    pub fn export_csv(&self) -> Result<CmdResult> {
        self.require_admin()?;
        commands::export::run(&self.session)
    }

    pub fn backup(&self, dir: &Path) -> Result<CmdResult> {
        self.require_admin()?;
        commands::backup::run(&self.session, dir)
    }

    pub fn authenticate(&mut self, password: &str) -> bool {
        self.session.authenticate(password)
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_authenticated()
    }

    fn require_admin(&self) -> Result<()> {
        if self.session.is_authenticated() {
            Ok(())
        } else {
            Err(FixError::Unauthorized)
        }
    }
}

pub use crate::commands::comment::DEFAULT_AUTHOR;
pub use crate::commands::list::{IssueTypeFilter, ReportFilter, StatusFilter};
pub use crate::commands::stats::Stats;
pub use crate::commands::update::ReportPatch;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;
    use crate::session::DEFAULT_ADMIN_SECRET;
    use crate::store::memory::fixtures::submission;
    use crate::store::memory::InMemoryStore;

    fn api() -> CommunityFixApi<InMemoryStore> {
        CommunityFixApi::open(InMemoryStore::new(), DEFAULT_ADMIN_SECRET)
    }

    #[test]
    fn anonymous_mutations_are_rejected() {
        let mut api = api();
        api.submit_report(submission("Juan dela Cruz", "Main Street"))
            .unwrap();

        let patch = ReportPatch {
            status: Some(Status::Resolved),
            ..ReportPatch::default()
        };
        assert!(matches!(
            api.update_report(1, &patch),
            Err(FixError::Unauthorized)
        ));
        assert!(matches!(
            api.add_comment(1, "Noted", None),
            Err(FixError::Unauthorized)
        ));
        assert!(matches!(api.export_csv(), Err(FixError::Unauthorized)));
    }

    #[test]
    fn login_unlocks_admin_operations() {
        let mut api = api();
        api.submit_report(submission("Juan dela Cruz", "Main Street"))
            .unwrap();

        assert!(!api.authenticate("wrong"));
        assert!(api.authenticate(DEFAULT_ADMIN_SECRET));
        assert!(api.is_admin());

        let patch = ReportPatch {
            status: Some(Status::Resolved),
            ..ReportPatch::default()
        };
        api.update_report(1, &patch).unwrap();
        api.add_comment(1, "Fixed by road crew", None).unwrap();

        let stats = api.statistics().unwrap().stats.unwrap();
        assert_eq!(stats.resolved, 1);

        api.logout();
        assert!(!api.is_admin());
        assert!(matches!(
            api.update_report(1, &patch),
            Err(FixError::Unauthorized)
        ));
    }

    #[test]
    fn get_report_is_quiet_on_absence() {
        let api = api();
        assert!(api.get_report(99).is_none());
    }
}
