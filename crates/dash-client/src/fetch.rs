// File: crates/dash-client/src/fetch.rs
// Summary: Typed fetch wrappers, one per dashboard card, on top of the GraphQL client.

use chrono::{DateTime, Utc};
use dash_core::cards::{rank_for_level, AuditStats};
use dash_core::{Record, SkillRecord};
use serde_json::json;
use tracing::debug;

use crate::auth::AuthContext;
use crate::error::{FetchError, FetchResult};
use crate::graphql::GraphQlClient;
use crate::model::{
    AuditsUser, LevelRows, ProfileRow, ProgressRows, SkillsUser, TransactionsUser, UserRows, XpRow,
};
use crate::queries;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
}

impl Profile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LevelInfo {
    pub level: f64,
    pub rank: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EventWindow {
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
}

/// Records for the progress chart plus the module's event window.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressData {
    pub window: EventWindow,
    /// Ascending by timestamp.
    pub records: Vec<Record>,
}

pub struct DashboardApi {
    gql: GraphQlClient,
}

impl DashboardApi {
    pub fn new(gql: GraphQlClient) -> Self { Self { gql } }

    pub async fn profile(&self, ctx: &AuthContext) -> FetchResult<Profile> {
        let rows: UserRows<ProfileRow> = self.gql.query(ctx, queries::PROFILE, json!({})).await?;
        let row = rows
            .user
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::InvalidShape("no user rows".into()))?;
        Ok(Profile {
            first_name: row.first_name.unwrap_or_default(),
            last_name: row.last_name.unwrap_or_default(),
        })
    }

    /// Highest level reached in `module`; 0 when no level transaction exists yet.
    pub async fn level(&self, ctx: &AuthContext, module: &str) -> FetchResult<LevelInfo> {
        let rows: LevelRows = self.gql.query(ctx, queries::LEVEL, json!({ "name": module })).await?;
        let level = rows.transaction.first().map(|r| r.amount).unwrap_or(0.0);
        Ok(LevelInfo { level, rank: rank_for_level(level) })
    }

    /// Every XP transaction, newest first.
    pub async fn transactions(&self, ctx: &AuthContext) -> FetchResult<Vec<Record>> {
        let rows: UserRows<TransactionsUser> = self.gql.query(ctx, queries::TRANSACTIONS, json!({})).await?;
        let mut records: Vec<Record> = rows
            .user
            .into_iter()
            .flat_map(|u| u.transactions)
            .map(to_record)
            .collect();
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        debug!(count = records.len(), "transactions fetched");
        Ok(records)
    }

    /// Event window of `module` and its XP records in ascending time order.
    pub async fn progress(&self, ctx: &AuthContext, module: &str) -> FetchResult<ProgressData> {
        let rows: ProgressRows = self.gql.query(ctx, queries::PROGRESS, json!({ "name": module })).await?;
        let window = rows
            .event
            .into_iter()
            .filter_map(|e| e.object)
            .flat_map(|o| o.events)
            .find_map(|w| w.start_at.map(|start| EventWindow { start, end: w.end_at }))
            .ok_or_else(|| FetchError::InvalidShape(format!("no event window for module `{module}`")))?;

        let mut records: Vec<Record> = rows.transaction.into_iter().map(to_record).collect();
        records.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        debug!(module, count = records.len(), start = %window.start, "progress fetched");
        Ok(ProgressData { window, records })
    }

    pub async fn skills(&self, ctx: &AuthContext) -> FetchResult<Vec<SkillRecord>> {
        let rows: UserRows<SkillsUser> = self.gql.query(ctx, queries::SKILLS, json!({})).await?;
        Ok(rows
            .user
            .into_iter()
            .flat_map(|u| u.transactions)
            .map(|t| SkillRecord::new(t.kind, t.amount))
            .collect())
    }

    pub async fn audits(&self, ctx: &AuthContext) -> FetchResult<AuditStats> {
        let rows: UserRows<AuditsUser> = self.gql.query(ctx, queries::AUDITS, json!({})).await?;
        let user = rows
            .user
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::InvalidShape("no user rows".into()))?;
        Ok(AuditStats::new(
            user.audits_aggregate.aggregate.count,
            user.failed_audits.aggregate.count,
            user.audit_ratio.unwrap_or(0.0),
        ))
    }
}

fn to_record(row: XpRow) -> Record {
    let name = row.object.map(|o| o.name).unwrap_or_default();
    Record::new(row.created_at, row.amount, name)
}
