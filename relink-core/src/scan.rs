use std::io;
use std::path::Path;

use tracing::{debug, error, info};

use crate::config::ScanOptions;
use crate::domain::TransferRecord;
use crate::error::Result;
use crate::link::create_link;
use crate::report::{ScanReport, StopReason};
use crate::repo::{HistoryRepo, PageQuery};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    MissingPath,
    DestMissing,
    SourceExists,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Handled {
    Recovered,
    Simulated,
    Failed(String),
}

/// Result of looking at one record. Only `Handled` spends the budget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Skipped(SkipReason),
    Handled(Handled),
}

impl Outcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, Outcome::Handled(_))
    }
}

fn budget_spent(handled: u64, limit: u64) -> bool {
    limit > 0 && handled >= limit
}

/// Walks the history page by page, restoring missing sources as hard links to
/// their organized copies, until `opts.limit` records were handled or the
/// history runs out.
///
/// Per-record failures are logged and counted; only a failed page read ends
/// the scan with an error.
pub fn recover<R: HistoryRepo + ?Sized>(repo: &R, opts: &ScanOptions) -> Result<ScanReport> {
    info!(limit = opts.limit, "starting source recovery");
    if opts.dry_run {
        info!("dry run: only logging, no links are created");
    }

    let count = opts.page_size.max(1);
    let mut report = ScanReport::default();
    let mut page = 1u32;

    'pages: loop {
        if opts.max_pages.is_some_and(|cap| report.pages >= cap) {
            report.stop = StopReason::PageCap;
            break;
        }
        let records = repo.list_page(&PageQuery {
            page,
            count,
            status: opts.status,
        })?;
        report.pages += 1;
        if records.is_empty() {
            report.stop = StopReason::Exhausted;
            break;
        }
        debug!(page, records = records.len(), "read history page");

        for rec in &records {
            if budget_spent(report.handled, opts.limit) {
                report.stop = StopReason::LimitReached;
                break 'pages;
            }
            let outcome = classify(rec, opts.dry_run);
            report.record(&outcome);
        }
        if budget_spent(report.handled, opts.limit) {
            report.stop = StopReason::LimitReached;
            break;
        }
        page = page.saturating_add(1);
    }

    info!(
        pages = report.pages,
        scanned = report.scanned,
        handled = report.handled,
        recovered = report.recovered,
        simulated = report.simulated,
        failed = report.failed,
        skipped = report.skipped(),
        stop = ?report.stop,
        "source recovery finished"
    );
    Ok(report)
}

/// Decides what to do with one record and does it.
pub fn classify(rec: &TransferRecord, dry_run: bool) -> Outcome {
    let show = |p: &Option<String>| p.clone().unwrap_or_default();
    info!(id = rec.id, "preparing to recover {} => {}", show(&rec.dest), show(&rec.src));

    let Some((src, dest)) = rec.paths() else {
        error!(
            id = rec.id,
            "missing path. source: {:?}, organized: {:?}", rec.src, rec.dest
        );
        return Outcome::Skipped(SkipReason::MissingPath);
    };

    match try_recover(Path::new(src), Path::new(dest), dry_run) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(id = rec.id, src, dest, "error while recovering source file: {e:?}");
            Outcome::Handled(Handled::Failed(e.to_string()))
        }
    }
}

/// `try_exists`, except a non-directory or looping path component reads as absent.
fn exists(path: &Path) -> io::Result<bool> {
    match path.try_exists() {
        // `ErrorKind::FilesystemLoop` is unstable (`io_error_more`); match it by name.
        Err(e)
            if e.kind() == io::ErrorKind::NotADirectory
                || format!("{:?}", e.kind()) == "FilesystemLoop" =>
        {
            Ok(false)
        }
        other => other,
    }
}

fn try_recover(src: &Path, dest: &Path, dry_run: bool) -> io::Result<Outcome> {
    if !exists(dest)? {
        info!(dest = %dest.display(), "organized file missing, skip");
        return Ok(Outcome::Skipped(SkipReason::DestMissing));
    }
    if exists(src)? {
        info!(src = %src.display(), "source file already exists, skip");
        return Ok(Outcome::Skipped(SkipReason::SourceExists));
    }

    if dry_run {
        info!(src = %src.display(), "simulated recovery success");
        return Ok(Outcome::Handled(Handled::Simulated));
    }

    // create_link logs its own failures
    Ok(match create_link(dest, src) {
        Ok(()) => Outcome::Handled(Handled::Recovered),
        Err(e) => Outcome::Handled(Handled::Failed(e.to_string())),
    })
}
