use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Status;
use crate::session::Session;
use crate::store::SnapshotStore;

/// Dashboard counters, derived by scanning the collection at call time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub total: usize,
    pub received: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub resolution_rate: f64,
}

pub fn run<S: SnapshotStore>(session: &Session<S>) -> Result<CmdResult> {
    let reports = session.reports();
    let total = reports.len();
    let received = reports
        .iter()
        .filter(|r| r.status == Status::Received)
        .count();
    let in_progress = reports
        .iter()
        .filter(|r| r.status == Status::InProgress)
        .count();
    let resolved = reports
        .iter()
        .filter(|r| r.status == Status::Resolved)
        .count();
    let resolution_rate = if total == 0 {
        0.0
    } else {
        resolved as f64 / total as f64 * 100.0
    };

    Ok(CmdResult::default().with_stats(Stats {
        total,
        received,
        in_progress,
        resolved,
        resolution_rate,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::update::ReportPatch;
    use crate::commands::{submit, update};
    use crate::store::memory::fixtures::{session, submission};

    #[test]
    fn empty_collection_has_zero_rate() {
        let session = session();
        let stats = run(&session).unwrap().stats.unwrap();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.resolution_rate, 0.0);
    }

    #[test]
    fn resolving_a_report_moves_buckets() {
        let mut session = session();
        submit::run(&mut session, submission("Juan dela Cruz", "Main Street")).unwrap();
        submit::run(&mut session, submission("Maria Santos", "Rizal Avenue")).unwrap();

        let before = run(&session).unwrap().stats.unwrap();
        assert_eq!(before.received, 2);
        assert_eq!(before.resolved, 0);

        update::run(
            &mut session,
            1,
            &ReportPatch {
                status: Some(Status::Resolved),
                ..ReportPatch::default()
            },
        )
        .unwrap();

        let after = run(&session).unwrap().stats.unwrap();
        assert_eq!(after.received, before.received - 1);
        assert_eq!(after.resolved, before.resolved + 1);
        assert_eq!(after.total, 2);
        assert!((after.resolution_rate - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn all_resolved_is_one_hundred_percent() {
        let mut session = session();
        submit::run(&mut session, submission("Juan dela Cruz", "Main Street")).unwrap();
        update::run(
            &mut session,
            1,
            &ReportPatch {
                status: Some(Status::Resolved),
                ..ReportPatch::default()
            },
        )
        .unwrap();

        let stats = run(&session).unwrap().stats.unwrap();
        assert!((stats.resolution_rate - 100.0).abs() < f64::EPSILON);
    }
}
