// File: crates/dash-client/src/model.rs
// Summary: Row shapes of the GraphQL responses.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// `{ user: [ ... ] }`
#[derive(Clone, Debug, Deserialize)]
pub struct UserRows<T> {
    pub user: Vec<T>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRow {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AmountRow {
    pub amount: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LevelRows {
    pub transaction: Vec<AmountRow>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ObjectName {
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XpRow {
    pub amount: f64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub object: Option<ObjectName>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TransactionsUser {
    pub transactions: Vec<XpRow>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SkillRow {
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SkillsUser {
    pub transactions: Vec<SkillRow>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventWindowRow {
    #[serde(default)]
    pub start_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EventObject {
    #[serde(default)]
    pub events: Vec<EventWindowRow>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EventRow {
    #[serde(default)]
    pub object: Option<EventObject>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ProgressRows {
    pub event: Vec<EventRow>,
    pub transaction: Vec<XpRow>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Count {
    pub count: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Aggregate {
    pub aggregate: Count,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AuditsUser {
    #[serde(rename = "auditRatio", default)]
    pub audit_ratio: Option<f64>,
    pub audits_aggregate: Aggregate,
    pub failed_audits: Aggregate,
}
