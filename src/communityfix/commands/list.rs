use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{IssueType, Report, Status};
use crate::session::Session;
use crate::store::SnapshotStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IssueTypeFilter {
    #[default]
    All,
    Only(IssueType),
}

/// Dashboard filters. All active filters must match (logical AND); the
/// search term is a case-insensitive substring OR'd across location, issue
/// type, and reporter name.
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    pub search_term: Option<String>,
    pub status: StatusFilter,
    pub issue_type: IssueTypeFilter,
}

pub fn run<S: SnapshotStore>(session: &Session<S>, filter: &ReportFilter) -> Result<CmdResult> {
    let mut listed: Vec<Report> = session.reports().to_vec();

    if let Some(term) = &filter.search_term {
        let term = term.to_lowercase();
        listed.retain(|r| {
            r.location.to_lowercase().contains(&term)
                || r.issue_type.as_str().to_lowercase().contains(&term)
                || r.reporter_name.to_lowercase().contains(&term)
        });
    }
    if let StatusFilter::Only(status) = filter.status {
        listed.retain(|r| r.status == status);
    }
    if let IssueTypeFilter::Only(issue_type) = filter.issue_type {
        listed.retain(|r| r.issue_type == issue_type);
    }

    // Matches keep original insertion order.
    Ok(CmdResult::default().with_listed_reports(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{submit, update};
    use crate::commands::update::ReportPatch;
    use crate::store::memory::fixtures::{session, submission};

    #[test]
    fn search_matches_location_issue_and_name_case_insensitively() {
        let mut session = session();
        submit::run(&mut session, submission("Juan dela Cruz", "Main Street")).unwrap();

        let mut leak = submission("Maria Santos", "Rizal Avenue corner");
        leak.issue_type = IssueType::WaterLeak;
        submit::run(&mut session, leak).unwrap();

        submit::run(&mut session, submission("Pedro Leakey", "Purok 5 court")).unwrap();

        let filter = ReportFilter {
            search_term: Some("LEAK".to_string()),
            ..ReportFilter::default()
        };
        let listed = run(&session, &filter).unwrap().listed_reports;

        // #2 matches on issue type, #3 on reporter name; insertion order kept.
        assert_eq!(
            listed.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![2, 3]
        );
    }

    #[test]
    fn filters_compose_with_and() {
        let mut session = session();
        submit::run(&mut session, submission("Juan dela Cruz", "Main Street")).unwrap();

        let mut leak = submission("Maria Santos", "Main Street extension");
        leak.issue_type = IssueType::WaterLeak;
        submit::run(&mut session, leak).unwrap();

        update::run(
            &mut session,
            2,
            &ReportPatch {
                status: Some(Status::Resolved),
                ..ReportPatch::default()
            },
        )
        .unwrap();

        let filter = ReportFilter {
            search_term: Some("main street".to_string()),
            status: StatusFilter::Only(Status::Resolved),
            issue_type: IssueTypeFilter::Only(IssueType::WaterLeak),
        };
        let listed = run(&session, &filter).unwrap().listed_reports;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, 2);

        // Tightening any one filter to a non-matching value empties the result.
        let filter = ReportFilter {
            issue_type: IssueTypeFilter::Only(IssueType::Graffiti),
            ..filter
        };
        assert!(run(&session, &filter).unwrap().listed_reports.is_empty());
    }

    #[test]
    fn no_filters_lists_everything_in_insertion_order() {
        let mut session = session();
        for name in ["Ana Reyes", "Ben Ocampo", "Carla Lim"] {
            submit::run(&mut session, submission(name, "Somewhere specific")).unwrap();
        }

        let listed = run(&session, &ReportFilter::default())
            .unwrap()
            .listed_reports;
        assert_eq!(
            listed.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn listing_does_not_mutate_the_collection() {
        let mut session = session();
        submit::run(&mut session, submission("Juan dela Cruz", "Main Street")).unwrap();

        let filter = ReportFilter {
            search_term: Some("nothing matches this".to_string()),
            ..ReportFilter::default()
        };
        assert!(run(&session, &filter).unwrap().listed_reports.is_empty());
        assert_eq!(session.reports().len(), 1);
    }
}
