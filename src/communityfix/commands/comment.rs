use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FixError, Result};
use crate::model::Comment;
use crate::session::Session;
use crate::store::SnapshotStore;

/// Author recorded when none is given.
pub const DEFAULT_AUTHOR: &str = "Admin";

pub fn run<S: SnapshotStore>(
    session: &mut Session<S>,
    id: u64,
    text: &str,
    author: &str,
) -> Result<CmdResult> {
    let text = text.trim();
    if text.is_empty() {
        return Err(FixError::Validation(vec![
            "Please enter a comment".to_string(),
        ]));
    }

    let report = session.find_mut(id).ok_or(FixError::ReportNotFound(id))?;
    report.add_comment(Comment::new(author, text));
    let updated = report.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Comment added to report #{}",
        id
    )));
    if let Some(warning) = session.persist() {
        result.add_message(warning);
    }
    Ok(result.with_affected_reports(vec![updated]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::submit;
    use crate::store::memory::fixtures::{session, submission};

    #[test]
    fn appends_comments_in_order() {
        let mut session = session();
        submit::run(&mut session, submission("Juan dela Cruz", "Main Street")).unwrap();

        run(&mut session, 1, "Crew dispatched", DEFAULT_AUTHOR).unwrap();
        run(&mut session, 1, "Repair scheduled Friday", "Engineer").unwrap();

        let comments = &session.find(1).unwrap().comments;
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].text, "Crew dispatched");
        assert_eq!(comments[0].author, "Admin");
        assert_eq!(comments[1].author, "Engineer");
    }

    #[test]
    fn empty_comment_is_rejected() {
        let mut session = session();
        submit::run(&mut session, submission("Juan dela Cruz", "Main Street")).unwrap();

        assert!(matches!(
            run(&mut session, 1, "   ", DEFAULT_AUTHOR),
            Err(FixError::Validation(_))
        ));
        assert!(session.find(1).unwrap().comments.is_empty());
    }

    #[test]
    fn unknown_id_leaves_reports_unchanged() {
        let mut session = session();
        submit::run(&mut session, submission("Juan dela Cruz", "Main Street")).unwrap();

        assert!(matches!(
            run(&mut session, 9, "Noted", DEFAULT_AUTHOR),
            Err(FixError::ReportNotFound(9))
        ));
        assert_eq!(session.reports().len(), 1);
        assert!(session.find(1).unwrap().comments.is_empty());
    }
}
