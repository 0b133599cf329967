// File: crates/dash-core/src/error.rs
// Summary: Errors raised by chart construction on degenerate input.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("no records to chart")]
    EmptySeries,
    #[error("time domain collapses to a single instant ({0})")]
    DegenerateDomain(DateTime<Utc>),
    #[error("value range is empty (every amount is zero)")]
    DegenerateRange,
    #[error("record {index} has an amount that is negative or not finite ({amount})")]
    InvalidAmount { index: usize, amount: f64 },
    #[error("no categories to chart")]
    NoCategories,
}
