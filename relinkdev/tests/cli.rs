use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn relinkdev(args: &[&str]) -> Output {
    let out = Command::new(env!("CARGO_BIN_EXE_relinkdev"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .unwrap();
    assert!(
        out.status.success(),
        "relinkdev {args:?} failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    out
}

fn json(out: &Output) -> serde_json::Value {
    serde_json::from_slice(&out.stdout).unwrap()
}

fn arg(p: &Path) -> &str {
    p.to_str().unwrap()
}

/// History with one eligible record and one whose organized file is gone.
fn seed(dir: &Path) -> std::path::PathBuf {
    let db = dir.join("user.db");
    let lib = dir.join("library");
    fs::create_dir_all(&lib).unwrap();
    fs::write(lib.join("a.mkv"), b"a").unwrap();

    let conn = rusqlite::Connection::open(&db).unwrap();
    conn.execute_batch(&format!(
        "CREATE TABLE transferhistory (
            id INTEGER PRIMARY KEY, src TEXT, dest TEXT, title TEXT, status BOOLEAN, date TEXT
        );
        INSERT INTO transferhistory VALUES
            (1, '{d}/downloads/a.mkv', '{d}/library/a.mkv', 'A', 1, '2024-02-01 00:00:00'),
            (2, '{d}/downloads/b.mkv', '{d}/library/b.mkv', 'B', 1, '2024-02-02 00:00:00');",
        d = dir.display()
    ))
    .unwrap();
    db
}

#[test]
fn scan_dry_run_reports_without_linking() {
    let dir = tempdir().unwrap();
    let db = seed(dir.path());

    let out = relinkdev(&["scan", arg(&db), "--dry-run", "--limit", "0"]);
    let report = json(&out);
    assert_eq!(report["simulated"], 1);
    assert_eq!(report["skipped_dest_missing"], 1);
    assert_eq!(report["stop"], "exhausted");
    assert!(!dir.path().join("downloads").exists());
}

#[test]
fn scan_links_missing_source() {
    let dir = tempdir().unwrap();
    let db = seed(dir.path());

    let report = json(&relinkdev(&["scan", arg(&db)]));
    assert_eq!(report["recovered"], 1);
    assert_eq!(fs::read(dir.path().join("downloads/a.mkv")).unwrap(), b"a");
}

#[test]
fn run_honors_once_switch_then_clears_it() {
    let dir = tempdir().unwrap();
    let db = seed(dir.path());
    let cfg = dir.path().join("recover.json");

    relinkdev(&["config", "set", "--config", arg(&cfg), "--once", "true", "--limit", "5"]);
    let shown = json(&relinkdev(&["config", "show", "--config", arg(&cfg)]));
    assert_eq!(shown["onlyonce"], true);
    assert_eq!(shown["recover_number"], 5);

    let report = json(&relinkdev(&["run", arg(&db), "--config", arg(&cfg)]));
    assert_eq!(report["recovered"], 1);

    let shown = json(&relinkdev(&["config", "show", "--config", arg(&cfg)]));
    assert_eq!(shown["onlyonce"], false);

    // switch cleared: second run prints no report
    let out = relinkdev(&["run", arg(&db), "--config", arg(&cfg)]);
    assert!(out.stdout.is_empty());
}

#[test]
fn link_command_creates_parents() {
    let dir = tempdir().unwrap();
    let existing = dir.path().join("movie.mkv");
    fs::write(&existing, b"m").unwrap();
    let link = dir.path().join("x/y/movie.mkv");

    relinkdev(&["link", arg(&existing), arg(&link)]);
    assert_eq!(fs::read(&link).unwrap(), b"m");
}

#[test]
fn history_lists_newest_first() {
    let dir = tempdir().unwrap();
    let db = seed(dir.path());

    let out = relinkdev(&["history", arg(&db)]);
    let text = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("#2"));
    assert!(lines[1].contains("library/a.mkv"));
}
