use clap::Parser;
use colored::*;
use communityfix::api::{
    CmdMessage, CommunityFixApi, IssueTypeFilter, MessageLevel, ReportFilter, ReportPatch, Stats,
    StatusFilter,
};
use communityfix::contacts::{EMERGENCY_CONTACTS, TIPS};
use communityfix::error::{FixError, Result};
use communityfix::model::{
    IssueType, Photo, Priority, Report, Status, Submission, DISPLAY_TIME_FORMAT,
};
use communityfix::session::DEFAULT_ADMIN_SECRET;
use communityfix::store::fs::{FileStore, DATA_FILENAME};
use directories::ProjectDirs;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, ReportArgs};

fn main() {
    if let Err(e) = run() {
        match &e {
            FixError::Validation(violations) => {
                for violation in violations {
                    eprintln!("Error: {}", violation);
                }
            }
            _ => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}

struct AppContext {
    api: CommunityFixApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Report(report_args) => handle_report(&mut ctx, report_args),
        Commands::List {
            search,
            status,
            issue,
        } => handle_list(&ctx, search, status, issue),
        Commands::View { id } => handle_view(&ctx, id),
        Commands::Update {
            id,
            status,
            assign,
            priority,
        } => handle_update(&mut ctx, id, status, assign, priority),
        Commands::Comment { id, text, author } => handle_comment(&mut ctx, id, text, author),
        Commands::Stats => handle_stats(&ctx),
        Commands::Export { output } => handle_export(&ctx, output),
        Commands::Backup { dir } => handle_backup(&ctx, dir),
        Commands::Contacts => handle_contacts(),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_path = resolve_data_path(cli)?;
    let admin_secret = std::env::var("COMMUNITYFIX_ADMIN_SECRET")
        .unwrap_or_else(|_| DEFAULT_ADMIN_SECRET.to_string());

    let store = FileStore::new(data_path);
    let mut api = CommunityFixApi::open(store, admin_secret);
    if let Some(warning) = api.take_load_warning() {
        print_messages(&[warning]);
    }

    let password = cli
        .password
        .clone()
        .or_else(|| std::env::var("COMMUNITYFIX_ADMIN_PASSWORD").ok());
    if let Some(password) = password {
        if !api.authenticate(&password) {
            return Err(FixError::Api("Incorrect password".to_string()));
        }
    }

    Ok(AppContext { api })
}

fn resolve_data_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.data_file {
        return Ok(path.clone());
    }
    if let Ok(path) = std::env::var("COMMUNITYFIX_DATA") {
        return Ok(PathBuf::from(path));
    }
    let proj_dirs = ProjectDirs::from("com", "communityfix", "communityfix")
        .ok_or_else(|| FixError::Store("Could not determine data dir".to_string()))?;
    Ok(proj_dirs.data_dir().join(DATA_FILENAME))
}

fn handle_report(ctx: &mut AppContext, report_args: ReportArgs) -> Result<()> {
    let issue_type = report_args
        .issue
        .parse::<IssueType>()
        .map_err(FixError::Api)?;
    let priority = match &report_args.priority {
        Some(raw) => raw.parse::<Priority>().map_err(FixError::Api)?,
        None => Priority::default(),
    };
    let photo = match &report_args.photo {
        Some(path) => Some(Photo::new(std::fs::read(path).map_err(FixError::Io)?)),
        None => None,
    };

    let submission = Submission {
        reporter_name: report_args.name,
        reporter_contact: report_args.contact,
        issue_type,
        location: report_args.location,
        description: report_args.description,
        priority,
        photo,
    };

    let result = ctx.api.submit_report(submission)?;
    print_messages(&result.messages);
    println!("Thank you for helping improve our community!");
    Ok(())
}

fn handle_list(
    ctx: &AppContext,
    search: Option<String>,
    status: Option<String>,
    issue: Option<String>,
) -> Result<()> {
    let filter = ReportFilter {
        search_term: search,
        status: parse_status_filter(status.as_deref())?,
        issue_type: parse_issue_filter(issue.as_deref())?,
    };
    let filtered = filter.search_term.is_some()
        || filter.status != StatusFilter::All
        || filter.issue_type != IssueTypeFilter::All;

    let result = ctx.api.list_reports(&filter)?;
    print_report_table(&result.listed_reports);

    if filtered {
        println!(
            "{}",
            format!(
                "Showing {} of {} reports",
                result.listed_reports.len(),
                ctx.api.report_count()
            )
            .dimmed()
        );
    }
    Ok(())
}

fn handle_view(ctx: &AppContext, id: u64) -> Result<()> {
    let result = ctx.api.view_report(id)?;
    print_full_report(&result.listed_reports[0]);
    Ok(())
}

fn handle_update(
    ctx: &mut AppContext,
    id: u64,
    status: Option<String>,
    assign: Option<String>,
    priority: Option<String>,
) -> Result<()> {
    let patch = ReportPatch {
        status: match status.as_deref() {
            Some(raw) => Some(raw.parse::<Status>().map_err(FixError::Api)?),
            None => None,
        },
        assigned_to: assign,
        priority: match priority.as_deref() {
            Some(raw) => Some(raw.parse::<Priority>().map_err(FixError::Api)?),
            None => None,
        },
    };
    if patch.is_empty() {
        println!("Nothing to update.");
        return Ok(());
    }

    let result = ctx.api.update_report(id, &patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_comment(
    ctx: &mut AppContext,
    id: u64,
    text: String,
    author: Option<String>,
) -> Result<()> {
    let result = ctx.api.add_comment(id, &text, author.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.statistics()?;
    if let Some(stats) = &result.stats {
        print_stats(stats);
    }
    Ok(())
}

fn handle_export(ctx: &AppContext, output: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export_csv()?;
    let csv = result.rendered.unwrap_or_default();

    match output {
        Some(path) => {
            std::fs::write(&path, csv).map_err(FixError::Io)?;
            println!("{}", format!("Exported to {}", path.display()).green());
        }
        None => print!("{}", csv),
    }
    Ok(())
}

fn handle_backup(ctx: &AppContext, dir: Option<PathBuf>) -> Result<()> {
    let dir = dir.unwrap_or_else(|| PathBuf::from("."));
    let result = ctx.api.backup(&dir)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_contacts() -> Result<()> {
    println!("{}", "Emergency Contacts".bold());
    for (service, number) in EMERGENCY_CONTACTS {
        println!("  {:<20} {}", service, number.bold());
    }

    println!();
    println!("{}", "Tips for Minor Problems".bold());
    for (i, tip) in TIPS.iter().enumerate() {
        println!("  {}. {}", i + 1, tip);
    }
    Ok(())
}

fn parse_status_filter(raw: Option<&str>) -> Result<StatusFilter> {
    match raw {
        None => Ok(StatusFilter::All),
        Some(s) if s.eq_ignore_ascii_case("all") => Ok(StatusFilter::All),
        Some(s) => Ok(StatusFilter::Only(
            s.parse::<Status>().map_err(FixError::Api)?,
        )),
    }
}

fn parse_issue_filter(raw: Option<&str>) -> Result<IssueTypeFilter> {
    match raw {
        None => Ok(IssueTypeFilter::All),
        Some(s) if s.eq_ignore_ascii_case("all") => Ok(IssueTypeFilter::All),
        Some(s) => Ok(IssueTypeFilter::Only(
            s.parse::<IssueType>().map_err(FixError::Api)?,
        )),
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const ID_WIDTH: usize = 5;
const ISSUE_WIDTH: usize = 20;
const LOCATION_WIDTH: usize = 26;
const STATUS_WIDTH: usize = 12;
const PRIORITY_WIDTH: usize = 10;
const ASSIGNED_WIDTH: usize = 16;
const TIME_WIDTH: usize = 14;

fn print_report_table(reports: &[Report]) {
    if reports.is_empty() {
        println!("No reports found.");
        return;
    }

    let header = format!(
        "{:<id$} {:<issue$} {:<loc$} {:<status$} {:<prio$} {:<assigned$} {:>time$}",
        "ID",
        "Issue",
        "Location",
        "Status",
        "Priority",
        "Assigned to",
        "Reported",
        id = ID_WIDTH,
        issue = ISSUE_WIDTH,
        loc = LOCATION_WIDTH,
        status = STATUS_WIDTH,
        prio = PRIORITY_WIDTH,
        assigned = ASSIGNED_WIDTH,
        time = TIME_WIDTH,
    );
    println!("{}", header.dimmed());

    for report in reports {
        let id_str = pad_to_width(&format!("#{}", report.id), ID_WIDTH);
        let issue = pad_to_width(report.issue_type.as_str(), ISSUE_WIDTH);
        let location = pad_to_width(&report.location, LOCATION_WIDTH);
        let status = pad_to_width(report.status.as_str(), STATUS_WIDTH);
        let priority = pad_to_width(report.priority.as_str(), PRIORITY_WIDTH);
        let assigned = pad_to_width(&report.assigned_to, ASSIGNED_WIDTH);
        let time = format_time_ago(report.date_reported);

        println!(
            "{} {} {} {} {} {} {}",
            id_str.yellow(),
            issue,
            location,
            style_status(&status, report.status),
            style_priority(&priority, report.priority),
            assigned.dimmed(),
            time.dimmed(),
        );
    }
}

fn print_full_report(report: &Report) {
    println!(
        "{} {}",
        format!("#{}", report.id).yellow(),
        report.issue_type.as_str().bold()
    );
    println!("--------------------------------");
    println!(
        "Reporter:    {} ({})",
        report.reporter_name, report.reporter_contact
    );
    println!("Location:    {}", report.location);
    println!(
        "Status:      {}",
        style_status(report.status.as_str(), report.status)
    );
    println!(
        "Priority:    {}",
        style_priority(report.priority.as_str(), report.priority)
    );
    println!("Assigned to: {}", report.assigned_to);
    println!(
        "Reported:    {}",
        report.date_reported.format(DISPLAY_TIME_FORMAT)
    );
    if report.photo.is_some() {
        println!("Photo:       attached");
    }
    println!();
    println!("{}", report.description);

    if !report.comments.is_empty() {
        println!();
        println!("{}", "Comments & updates".bold());
        // Newest first for display; storage order stays append order.
        for comment in report.comments.iter().rev() {
            println!(
                "  {} - {}",
                comment.author.bold(),
                comment
                    .timestamp
                    .format(DISPLAY_TIME_FORMAT)
                    .to_string()
                    .dimmed()
            );
            println!("    {}", comment.text);
        }
    }
}

fn print_stats(stats: &Stats) {
    println!("{}", "Dashboard".bold());
    println!("  Total reports:   {}", stats.total);
    println!("  Received:        {}", stats.received);
    println!("  In progress:     {}", stats.in_progress);
    println!("  Resolved:        {}", stats.resolved);
    println!("  Resolution rate: {:.1}%", stats.resolution_rate);
}

fn style_status(text: &str, status: Status) -> ColoredString {
    match status {
        Status::Received => text.yellow(),
        Status::InProgress => text.cyan(),
        Status::Resolved => text.green(),
    }
}

fn style_priority(text: &str, priority: Priority) -> ColoredString {
    match priority {
        Priority::Emergency => text.red().bold(),
        Priority::High => text.red(),
        Priority::Medium => text.normal(),
        Priority::Low => text.dimmed(),
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<chrono::Utc>) -> String {
    let now = chrono::Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
