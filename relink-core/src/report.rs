use serde::Serialize;

use crate::scan::{Handled, Outcome, SkipReason};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// A page came back empty.
    #[default]
    Exhausted,
    /// The handled-record budget was spent.
    LimitReached,
    /// `max_pages` pages were read.
    PageCap,
}

/// Tally of one scan.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub pages: u32,
    pub scanned: u64,
    /// Budget-consuming records: recovered + simulated + failed.
    pub handled: u64,
    pub recovered: u64,
    pub simulated: u64,
    pub failed: u64,
    pub skipped_missing_path: u64,
    pub skipped_dest_missing: u64,
    pub skipped_source_exists: u64,
    pub stop: StopReason,
}

impl ScanReport {
    pub fn record(&mut self, outcome: &Outcome) {
        self.scanned += 1;
        match outcome {
            Outcome::Skipped(SkipReason::MissingPath) => self.skipped_missing_path += 1,
            Outcome::Skipped(SkipReason::DestMissing) => self.skipped_dest_missing += 1,
            Outcome::Skipped(SkipReason::SourceExists) => self.skipped_source_exists += 1,
            Outcome::Handled(h) => {
                self.handled += 1;
                match h {
                    Handled::Recovered => self.recovered += 1,
                    Handled::Simulated => self.simulated += 1,
                    Handled::Failed(_) => self.failed += 1,
                }
            }
        }
    }

    pub fn skipped(&self) -> u64 {
        self.skipped_missing_path + self.skipped_dest_missing + self.skipped_source_exists
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_never_count_as_handled() {
        let mut r = ScanReport::default();
        r.record(&Outcome::Skipped(SkipReason::MissingPath));
        r.record(&Outcome::Skipped(SkipReason::DestMissing));
        r.record(&Outcome::Skipped(SkipReason::SourceExists));
        r.record(&Outcome::Handled(Handled::Failed("EXDEV".into())));
        r.record(&Outcome::Handled(Handled::Simulated));
        assert_eq!(r.scanned, 5);
        assert_eq!(r.skipped(), 3);
        assert_eq!(r.handled, 2);
        assert_eq!((r.failed, r.simulated, r.recovered), (1, 1, 0));
    }
}
