use serde::{Deserialize, Serialize};

use crate::domain::{Verdict, VerdictLabel};

/// Minutes of manual review saved per document, whatever the verdict.
pub const MINUTES_SAVED_PER_DOC: u64 = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    pub total: u64,
    pub verified: u64,
    pub suspicious: u64,
    /// Minutes.
    pub time_saved: u64,
}

/// Running dashboard totals. Only grows; there is no reset.
#[derive(Clone, Debug, Default)]
pub struct CounterStore {
    counters: Counters,
}

impl CounterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, verdict: &Verdict) {
        let c = &mut self.counters;
        c.total += 1;
        match verdict.label() {
            VerdictLabel::Verified => c.verified += 1,
            VerdictLabel::Suspicious => c.suspicious += 1,
        }
        c.time_saved += MINUTES_SAVED_PER_DOC;
        tracing::debug!(
            total = c.total,
            verified = c.verified,
            suspicious = c.suspicious,
            "counters updated"
        );
    }

    pub fn snapshot(&self) -> Counters {
        self.counters
    }
}
