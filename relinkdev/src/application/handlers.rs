use std::path::PathBuf;

use relink_core::config::{ConfigStore, JsonFileStore, ScanOptions};
use relink_core::error::Result;
use relink_core::plugin::RecoverPlugin;
use relink_core::repo::{HistoryRepo, OpenParams, PageQuery};
use relink_core::repo_factory::{Backend, open_repo};
use relink_core::{ScanReport, create_link, recover};

fn status_filter(all_statuses: bool) -> Option<bool> {
    if all_statuses { None } else { Some(true) }
}

fn print_report(report: &ScanReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

pub fn handle_scan(
    db: PathBuf,
    limit: u64,
    dry_run: bool,
    page_size: u32,
    all_statuses: bool,
    max_pages: Option<u32>,
) -> Result<()> {
    let opts = ScanOptions {
        limit,
        dry_run,
        page_size,
        status: status_filter(all_statuses),
        max_pages,
    };
    let report = {
        let repo = open_repo(Backend::Sqlite(OpenParams { db_path: db }))?;
        recover(&*repo, &opts)?
    };
    print_report(&report)
}

pub fn handle_run(db: PathBuf, config: PathBuf) -> Result<()> {
    let plugin = RecoverPlugin::init(JsonFileStore::new(config), OpenParams { db_path: db })?;
    match plugin.last_report() {
        Some(report) => print_report(report),
        None => {
            eprintln!(
                "run: run-once switch not set (enabled={}), nothing to do",
                plugin.state()
            );
            Ok(())
        }
    }
}

pub fn handle_config_show(config: PathBuf) -> Result<()> {
    let cfg = JsonFileStore::new(config).load()?;
    println!("{}", serde_json::to_string_pretty(&cfg)?);
    Ok(())
}

pub fn handle_config_set(
    config: PathBuf,
    enabled: Option<bool>,
    dry_run: Option<bool>,
    once: Option<bool>,
    limit: Option<u64>,
) -> Result<()> {
    let store = JsonFileStore::new(config);
    let mut cfg = store.load()?;
    if let Some(v) = enabled {
        cfg.enabled = v;
    }
    if let Some(v) = dry_run {
        cfg.only_print = v;
    }
    if let Some(v) = once {
        cfg.onlyonce = v;
    }
    if let Some(v) = limit {
        cfg.recover_number = v;
    }
    store.save(&cfg)?;
    eprintln!("config: saved {}", store.path().display());
    Ok(())
}

pub fn handle_link(existing: PathBuf, new_link: PathBuf) -> Result<()> {
    create_link(&existing, &new_link)?;
    eprintln!("link: {} -> {}", new_link.display(), existing.display());
    Ok(())
}

pub fn handle_history(db: PathBuf, page: u32, page_size: u32, all_statuses: bool) -> Result<()> {
    let repo = open_repo(Backend::Sqlite(OpenParams { db_path: db }))?;
    let rows = repo.list_page(&PageQuery {
        page,
        count: page_size,
        status: status_filter(all_statuses),
    })?;
    for r in rows {
        println!(
            "#{:<6} {:<5} {} => {}  [{}]",
            r.id,
            if r.status { "ok" } else { "fail" },
            r.dest.as_deref().unwrap_or("-"),
            r.src.as_deref().unwrap_or("-"),
            r.date.as_deref().unwrap_or("")
        );
    }
    Ok(())
}
