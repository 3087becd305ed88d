// relink_core/src/repo.rs
use crate::domain::TransferRecord;
use crate::error::Result;

#[derive(Clone, Debug)]
pub struct OpenParams {
    pub db_path: std::path::PathBuf,
}

/// One page of history, newest first. `page` is 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub count: u32,
    /// Only rows with this transfer status; `None` reads every row.
    pub status: Option<bool>,
}

impl PageQuery {
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.count)
    }
}

/// Read side of the transfer history. An empty page means the history is exhausted.
///
/// A repo value is one session: dropping it releases the underlying connection.
pub trait HistoryRepo {
    fn list_page(&self, query: &PageQuery) -> Result<Vec<TransferRecord>>;
}

impl<T: HistoryRepo + ?Sized> HistoryRepo for Box<T> {
    fn list_page(&self, query: &PageQuery) -> Result<Vec<TransferRecord>> {
        (**self).list_page(query)
    }
}

#[cfg(test)]
mod tests {
    use super::PageQuery;

    #[test]
    fn offset_is_one_based() {
        let q = |page| PageQuery {
            page,
            count: 10,
            status: None,
        };
        assert_eq!(q(1).offset(), 0);
        assert_eq!(q(3).offset(), 20);
        // page 0 is treated like page 1
        assert_eq!(q(0).offset(), 0);
    }
}
