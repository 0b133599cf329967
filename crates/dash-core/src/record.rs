// File: crates/dash-core/src/record.rs
// Summary: Input records for the charts (timestamped XP transactions and skill amounts).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped, amount-bearing transaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub timestamp: DateTime<Utc>,
    /// Non-negative amount (XP points).
    pub amount: f64,
    /// Name of the object the transaction belongs to (project, exercise).
    pub name: String,
}

impl Record {
    pub fn new(timestamp: DateTime<Utc>, amount: f64, name: impl Into<String>) -> Self {
        Self { timestamp, amount, name: name.into() }
    }

    /// Timestamp as epoch milliseconds, the unit the time scale works in.
    #[inline]
    pub fn millis(&self) -> f64 {
        instant_millis(&self.timestamp)
    }
}

/// Category/amount pair as returned by the skills query (e.g. `skill_go`, 55).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub category: String,
    pub amount: f64,
}

impl SkillRecord {
    pub fn new(category: impl Into<String>, amount: f64) -> Self {
        Self { category: category.into(), amount }
    }
}

#[inline]
pub fn instant_millis(t: &DateTime<Utc>) -> f64 {
    t.timestamp_millis() as f64
}
