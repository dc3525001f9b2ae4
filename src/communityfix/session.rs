use crate::commands::CmdMessage;
use crate::model::Report;
use crate::store::SnapshotStore;

/// Default shared admin secret. Override per session, or with
/// `COMMUNITYFIX_ADMIN_SECRET` when using the CLI.
pub const DEFAULT_ADMIN_SECRET: &str = "admin123";

/// State for one interactive session: the live report collection and the
/// admin-authentication flag.
///
/// Constructed at session start, passed by reference, discarded at session
/// end. The collection is loaded exactly once from the store; every mutation
/// snapshots it back in full. The authentication flag is never persisted.
pub struct Session<S: SnapshotStore> {
    store: S,
    reports: Vec<Report>,
    authenticated: bool,
    admin_secret: String,
    load_warning: Option<CmdMessage>,
}

impl<S: SnapshotStore> Session<S> {
    /// Load the collection from the store. A failed load starts the session
    /// with an empty collection and a warning for the caller to surface; it
    /// never aborts startup.
    pub fn open(store: S, admin_secret: impl Into<String>) -> Self {
        let (reports, load_warning) = match store.load() {
            Ok(reports) => (reports, None),
            Err(e) => (
                Vec::new(),
                Some(CmdMessage::warning(format!(
                    "Could not load saved reports ({}); starting with an empty collection",
                    e
                ))),
            ),
        };
        Self {
            store,
            reports,
            authenticated: false,
            admin_secret: admin_secret.into(),
            load_warning,
        }
    }

    pub fn take_load_warning(&mut self) -> Option<CmdMessage> {
        self.load_warning.take()
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn find(&self, id: u64) -> Option<&Report> {
        self.reports.iter().find(|r| r.id == id)
    }

    pub(crate) fn find_mut(&mut self, id: u64) -> Option<&mut Report> {
        self.reports.iter_mut().find(|r| r.id == id)
    }

    // Ids are dense and never reused (reports are never deleted), so the
    // count + 1 is always fresh.
    pub(crate) fn next_id(&self) -> u64 {
        self.reports.len() as u64 + 1
    }

    pub(crate) fn push(&mut self, report: Report) {
        self.reports.push(report);
    }

    /// Snapshot the full collection. A failed save is downgraded to a
    /// warning; the in-memory mutation that triggered it stays applied, so
    /// memory and disk may diverge until the next successful save.
    pub(crate) fn persist(&mut self) -> Option<CmdMessage> {
        match self.store.save(&self.reports) {
            Ok(()) => None,
            Err(e) => Some(CmdMessage::warning(format!(
                "Could not save reports: {}",
                e
            ))),
        }
    }

    pub fn authenticate(&mut self, password: &str) -> bool {
        if password == self.admin_secret {
            self.authenticated = true;
            true
        } else {
            false
        }
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}
