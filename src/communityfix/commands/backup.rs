use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FixError, Result};
use crate::model::Report;
use crate::session::Session;
use crate::store::{SnapshotFile, SnapshotStore};
use chrono::Utc;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn run<S: SnapshotStore>(session: &Session<S>, dir: &Path) -> Result<CmdResult> {
    let now = Utc::now();
    let filename = format!("communityfix-{}.tar.gz", now.format("%Y%m%d_%H%M%S"));
    let path = dir.join(&filename);
    let file = File::create(&path).map_err(FixError::Io)?;

    write_archive(file, session.reports())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Backup written to {}",
        path.display()
    )));
    Ok(result)
}

fn write_archive<W: Write>(writer: W, reports: &[Report]) -> Result<()> {
    let snapshot = SnapshotFile {
        reports: reports.to_vec(),
        last_updated: Utc::now(),
    };
    let content = serde_json::to_string_pretty(&snapshot).map_err(FixError::Serialization)?;

    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    let mut header = tar::Header::new_gnu();
    header.set_size(content.len() as u64);
    header.set_mode(0o644);
    header.set_cksum();
    tar.append_data(&mut header, "communityfix/reports_data.json", content.as_bytes())
        .map_err(FixError::Io)?;

    tar.finish().map_err(FixError::Io)?;
    Ok(())
}
