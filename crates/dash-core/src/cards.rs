// File: crates/dash-core/src/cards.rs
// Summary: Derived figures for the non-chart dashboard cards (level rank, audit stats, notable transactions).

use crate::record::Record;

/// Rank titles by level decade: levels 0-9 map to the first entry, 10-19 to the second, ...
pub const RANKS: [&str; 7] = [
    "Aspiring developer",
    "Beginner developer",
    "Apprentice developer",
    "Assistant developer",
    "Basic developer",
    "Junior developer",
    "Full-Stack developer",
];

/// Transactions below this amount are checkpoint exercises and stay off the list card.
pub const NOTABLE_MIN_AMOUNT: f64 = 5000.0;

/// Rank title for `level`; levels past the table keep the last title.
pub fn rank_for_level(level: f64) -> &'static str {
    let idx = (level.max(0.0) / 10.0).floor() as usize;
    RANKS[idx.min(RANKS.len() - 1)]
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuditStats {
    pub succeeded: u64,
    pub failed: u64,
    pub total: u64,
    pub succeeded_pct: f64,
    pub failed_pct: f64,
    /// Precomputed done/received ratio as reported by the API.
    pub ratio: f64,
}

impl AuditStats {
    /// Percentages are 0 when no audits were closed yet.
    pub fn new(succeeded: u64, failed: u64, ratio: f64) -> Self {
        let total = succeeded + failed;
        let pct = |n: u64| if total == 0 { 0.0 } else { n as f64 / total as f64 * 100.0 };
        Self {
            succeeded,
            failed,
            total,
            succeeded_pct: pct(succeeded),
            failed_pct: pct(failed),
            ratio,
        }
    }
}

/// Records worth listing, in their given order.
pub fn notable_transactions(records: &[Record]) -> Vec<&Record> {
    records.iter().filter(|r| r.amount >= NOTABLE_MIN_AMOUNT).collect()
}
