use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("GIT_COMMIT_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "communityfix")]
#[command(about = "Community issue reporting and triage for Barangay Union", long_about = None)]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the reports data file
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Admin password for dashboard commands
    #[arg(short, long, global = true)]
    pub password: Option<String>,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Your full name
    #[arg(long)]
    pub name: String,

    /// Contact number
    #[arg(long)]
    pub contact: String,

    /// Issue type (e.g. "Pothole", "Water Leak", "Other")
    #[arg(long)]
    pub issue: String,

    /// Where the issue is (street names, landmarks, house numbers)
    #[arg(long)]
    pub location: String,

    /// What is wrong, in detail
    #[arg(long)]
    pub description: String,

    /// Priority level (Low, Medium, High, Emergency)
    #[arg(long)]
    pub priority: Option<String>,

    /// Path to a photo of the issue
    #[arg(long)]
    pub photo: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a new issue report
    #[command(alias = "r")]
    Report(ReportArgs),

    /// List reports, with optional search and filters
    #[command(alias = "ls")]
    List {
        /// Search by location, issue type, or reporter name
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by status (Received, "In Progress", Resolved)
        #[arg(long)]
        status: Option<String>,

        /// Filter by issue type
        #[arg(long)]
        issue: Option<String>,
    },

    /// View one report in full
    #[command(alias = "v")]
    View {
        /// Report id
        id: u64,
    },

    /// Update a report's status, assignee, or priority
    Update {
        /// Report id
        id: u64,

        /// New status (Received, "In Progress", Resolved)
        #[arg(long)]
        status: Option<String>,

        /// Assign the report to someone
        #[arg(long)]
        assign: Option<String>,

        /// New priority (Low, Medium, High, Emergency)
        #[arg(long)]
        priority: Option<String>,
    },

    /// Add an admin comment to a report
    Comment {
        /// Report id
        id: u64,

        /// Comment text
        text: String,

        /// Comment author (defaults to Admin)
        #[arg(long)]
        author: Option<String>,
    },

    /// Show dashboard statistics
    Stats,

    /// Export all reports as CSV
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a gzipped backup of the report snapshot
    Backup {
        /// Directory to write the backup into (defaults to the current directory)
        dir: Option<PathBuf>,
    },

    /// Show emergency contacts and tips for minor problems
    Contacts,
}
