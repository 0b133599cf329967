// File: crates/dash-core/src/mapper.rs
// Summary: Coordinate mapper: cumulative sums over a record list plus the time (X) and amount (Y) scales.

use chrono::{DateTime, Utc};

use crate::error::ChartError;
use crate::record::{instant_millis, Record};
use crate::scale::LinearScale;
use crate::types::Frame;

/// Running totals of a record list. Index 0 is the synthetic start point (sum 0),
/// index `i` is the total after `records[i - 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct CumulativeSeries {
    sums: Vec<f64>,
}

impl CumulativeSeries {
    pub fn from_records(records: &[Record]) -> Self {
        let mut sums = Vec::with_capacity(records.len() + 1);
        let mut total = 0.0;
        sums.push(total);
        for r in records {
            total += r.amount;
            sums.push(total);
        }
        Self { sums }
    }

    pub fn sums(&self) -> &[f64] { &self.sums }

    /// Number of points, `records + 1`.
    pub fn len(&self) -> usize { self.sums.len() }

    pub fn is_empty(&self) -> bool { self.sums.len() <= 1 }

    pub fn total(&self) -> f64 { self.sums.last().copied().unwrap_or(0.0) }

    pub fn max(&self) -> f64 { self.sums.iter().copied().fold(0.0, f64::max) }
}

/// A record list mapped into pixel space for one frame.
#[derive(Clone, Debug)]
pub struct MappedSeries<'a> {
    pub records: &'a [Record],
    pub series_start: DateTime<Utc>,
    pub sums: CumulativeSeries,
    pub x: LinearScale,
    pub y: LinearScale,
}

impl<'a> MappedSeries<'a> {
    /// Pixel position of cumulative point `i` (0 is the start anchor on the baseline).
    pub fn point(&self, i: usize) -> (f64, f64) {
        let t = if i == 0 {
            instant_millis(&self.series_start)
        } else {
            self.records[i - 1].millis()
        };
        (self.x.to_px(t), self.y.to_px(self.sums.sums()[i]))
    }

    /// Every cumulative point in order, start anchor first.
    pub fn points(&self) -> Vec<(f64, f64)> {
        (0..self.sums.len()).map(|i| self.point(i)).collect()
    }
}

/// Map `records` (ascending by timestamp) into `frame`.
///
/// The X domain runs from `series_start` to the latest timestamp; the Y range runs
/// from 0 to the largest running total. Inputs that would collapse either scale, and
/// amounts that are negative or not finite, are rejected instead of producing NaN
/// coordinates.
pub fn map_series<'a>(
    records: &'a [Record],
    series_start: DateTime<Utc>,
    frame: &Frame,
) -> Result<MappedSeries<'a>, ChartError> {
    if records.is_empty() {
        return Err(ChartError::EmptySeries);
    }
    if let Some((index, r)) = records.iter().enumerate().find(|(_, r)| !r.amount.is_finite() || r.amount < 0.0) {
        return Err(ChartError::InvalidAmount { index, amount: r.amount });
    }

    let domain_min = instant_millis(&series_start);
    let domain_max = records.iter().map(Record::millis).fold(domain_min, f64::max);
    let x = LinearScale::new(domain_min, domain_max, frame.padding, frame.inner_width())
        .ok_or(ChartError::DegenerateDomain(series_start))?;

    let sums = CumulativeSeries::from_records(records);
    let range_min = 0.0;
    let range_max = sums.max();
    let y = LinearScale::new(range_min, range_max, frame.baseline(), -frame.inner_height())
        .ok_or(ChartError::DegenerateRange)?;

    Ok(MappedSeries { records, series_start, sums, x, y })
}
