// relink_core/src/domain.rs
use serde::Serialize;

/// One row of the host's transfer history: `src` was organized into `dest`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TransferRecord {
    pub id: i64,
    pub src: Option<String>,
    pub dest: Option<String>,
    pub title: Option<String>,
    pub status: bool,
    pub date: Option<String>,
}

impl TransferRecord {
    pub fn new(id: i64, src: impl Into<String>, dest: impl Into<String>) -> Self {
        Self {
            id,
            src: Some(src.into()),
            dest: Some(dest.into()),
            status: true,
            ..Default::default()
        }
    }

    /// Both paths, when neither is absent or empty.
    pub fn paths(&self) -> Option<(&str, &str)> {
        let src = self.src.as_deref().filter(|s| !s.is_empty())?;
        let dest = self.dest.as_deref().filter(|s| !s.is_empty())?;
        Some((src, dest))
    }
}
