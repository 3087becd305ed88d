use crate::domain::TransferRecord;
use crate::error::Result;
use crate::index::inmem::InMemHistory;
use crate::repo::{HistoryRepo, OpenParams};
use crate::repo_sqlite::SqliteHistoryRepo;

pub enum Backend {
    Sqlite(OpenParams),
    Memory(Vec<TransferRecord>),
}

pub fn open_repo(backend: Backend) -> Result<Box<dyn HistoryRepo>> {
    match backend {
        Backend::Sqlite(p) => Ok(Box::new(SqliteHistoryRepo::new(p)?)),
        Backend::Memory(records) => Ok(Box::new(InMemHistory::new(records))),
    }
}

/// Hands out one history session per scan.
pub trait SessionFactory {
    fn session(&self) -> Result<Box<dyn HistoryRepo>>;
}

impl SessionFactory for OpenParams {
    fn session(&self) -> Result<Box<dyn HistoryRepo>> {
        open_repo(Backend::Sqlite(self.clone()))
    }
}
