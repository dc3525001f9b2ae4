use crate::model::Report;

pub mod backup;
pub mod comment;
pub mod export;
pub mod list;
pub mod stats;
pub mod submit;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_reports: Vec<Report>,
    pub listed_reports: Vec<Report>,
    pub stats: Option<stats::Stats>,
    pub rendered: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_reports(mut self, reports: Vec<Report>) -> Self {
        self.affected_reports = reports;
        self
    }

    pub fn with_listed_reports(mut self, reports: Vec<Report>) -> Self {
        self.listed_reports = reports;
        self
    }

    pub fn with_stats(mut self, stats: stats::Stats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_rendered(mut self, text: String) -> Self {
        self.rendered = Some(text);
        self
    }
}
