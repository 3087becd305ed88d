use std::cell::Cell;

use crate::domain::TransferRecord;
use crate::error::Result;
use crate::repo::{HistoryRepo, PageQuery};

/// History held in memory, in the order `list_page` serves it.
#[derive(Debug, Default)]
pub struct InMemHistory {
    records: Vec<TransferRecord>,
    pages_served: Cell<u32>,
}

impl InMemHistory {
    pub fn new(records: Vec<TransferRecord>) -> Self {
        Self {
            records,
            pages_served: Cell::new(0),
        }
    }

    /// Number of `list_page` calls answered so far.
    pub fn pages_served(&self) -> u32 {
        self.pages_served.get()
    }
}

impl HistoryRepo for InMemHistory {
    fn list_page(&self, query: &PageQuery) -> Result<Vec<TransferRecord>> {
        self.pages_served.set(self.pages_served.get() + 1);
        let page = self
            .records
            .iter()
            .filter(|r| query.status.is_none_or(|s| r.status == s))
            .skip(query.offset() as usize)
            .take(query.count as usize)
            .cloned()
            .collect();
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: i64, status: bool) -> TransferRecord {
        TransferRecord {
            status,
            ..TransferRecord::new(id, format!("/s/{id}"), format!("/d/{id}"))
        }
    }

    #[test]
    fn pages_then_exhausts() {
        let h = InMemHistory::new((1..=5).map(|i| rec(i, true)).collect());
        let q = |page| PageQuery {
            page,
            count: 2,
            status: None,
        };
        let ids = |v: Vec<TransferRecord>| v.into_iter().map(|r| r.id).collect::<Vec<_>>();
        assert_eq!(ids(h.list_page(&q(1)).unwrap()), vec![1, 2]);
        assert_eq!(ids(h.list_page(&q(3)).unwrap()), vec![5]);
        assert!(h.list_page(&q(4)).unwrap().is_empty());
        assert_eq!(h.pages_served(), 3);
    }

    #[test]
    fn status_filter_applies_before_paging() {
        let h = InMemHistory::new(vec![rec(1, false), rec(2, true), rec(3, true)]);
        let page = h
            .list_page(&PageQuery {
                page: 1,
                count: 1,
                status: Some(true),
            })
            .unwrap();
        assert_eq!(page[0].id, 2);
    }
}
