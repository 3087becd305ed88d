use std::path::Path;

use rusqlite::{Connection, OpenFlags, params};
use tracing::debug;

use crate::domain::TransferRecord;
use crate::error::Result;
use crate::repo::{HistoryRepo, OpenParams, PageQuery};

const PAGE_SQL: &str = "SELECT id, src, dest, title, status, date
     FROM transferhistory
     WHERE (?1 IS NULL OR status = ?1)
     ORDER BY date DESC, id DESC
     LIMIT ?2 OFFSET ?3";

/// Reads the host's `transferhistory` table. The connection is the session; it
/// closes when the repo is dropped.
pub struct SqliteHistoryRepo {
    conn: Connection,
}

impl SqliteHistoryRepo {
    pub fn new(params: OpenParams) -> Result<Self> {
        Self::open(&params.db_path)
    }

    /// Opens the database read-only; the scan never writes history.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        debug!(db = %path.display(), "opened history session");
        Ok(Self { conn })
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }
}

impl HistoryRepo for SqliteHistoryRepo {
    fn list_page(&self, query: &PageQuery) -> Result<Vec<TransferRecord>> {
        let mut stmt = self.conn.prepare_cached(PAGE_SQL)?;
        let rows = stmt.query_map(
            params![query.status, query.count, query.offset() as i64],
            |row| {
                Ok(TransferRecord {
                    id: row.get(0)?,
                    src: row.get(1)?,
                    dest: row.get(2)?,
                    title: row.get(3)?,
                    status: row.get::<_, Option<bool>>(4)?.unwrap_or(false),
                    date: row.get(5)?,
                })
            },
        )?;
        let mut out = Vec::with_capacity(query.count as usize);
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }
}
