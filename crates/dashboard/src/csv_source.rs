// File: crates/dashboard/src/csv_source.rs
// Summary: Offline progress records from a CSV file (createdAt, amount, name) with header detection.

use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use dash_core::Record;
use tracing::{debug, warn};

/// Load records from `path`, sorted ascending by time. Rows with an unreadable
/// timestamp, or an amount that is unreadable, negative or not finite, are skipped
/// with a warning.
pub fn load_records_csv(path: &Path) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    debug!(?headers, "records csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_time = idx(&["createdat", "created_at", "timestamp", "date", "time"]);
    let i_amount = idx(&["amount", "xp", "value"]);
    let i_name = idx(&["name", "object", "project"]);

    let (Some(i_time), Some(i_amount)) = (i_time, i_amount) else {
        bail!("{}: need a createdAt and an amount column, found {:?}", path.display(), headers);
    };

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let time = rec.get(i_time).and_then(parse_time);
        let amount = rec
            .get(i_amount)
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|a| a.is_finite() && *a >= 0.0);
        let (Some(time), Some(amount)) = (time, amount) else {
            warn!(row = row + 2, "skipping unreadable csv row");
            continue;
        };
        let name = i_name.and_then(|i| rec.get(i)).unwrap_or_default();
        out.push(Record::new(time, amount, name));
    }
    out.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    Ok(out)
}

/// RFC 3339 text, or epoch seconds / milliseconds.
fn parse_time(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.with_timezone(&Utc));
    }
    let n = s.parse::<i64>().ok()?;
    if n > 10_i64.pow(12) {
        Utc.timestamp_millis_opt(n).single()
    } else {
        Utc.timestamp_opt(n, 0).single()
    }
}
