// File: crates/dash-core/src/grid.rs
// Summary: Horizontal gridline layout and value-label formatting.

use crate::scene::fmt_number;
use crate::types::Frame;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Gridlines over a value range: `lines` intervals give `lines + 1` rules, the first
/// at the top of the plot showing `max`, the last on the baseline showing `min`.
#[derive(Clone, Debug, PartialEq)]
pub struct GridSpec {
    pub lines: usize,
    pub unit: String,
    pub min: f64,
    pub max: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridLine {
    pub y: f64,
    pub value: f64,
    pub label: String,
}

impl GridSpec {
    pub fn new(lines: usize, unit: impl Into<String>, min: f64, max: f64) -> Self {
        Self { lines: lines.max(1), unit: unit.into(), min, max }
    }

    pub fn layout(&self, frame: &Frame) -> Vec<GridLine> {
        let n = self.lines.max(1);
        linspace(frame.padding, frame.baseline(), n + 1)
            .into_iter()
            .enumerate()
            .map(|(i, y)| {
                let value = self.max - ((self.max - self.min) * i as f64) / n as f64;
                GridLine { y, value, label: format_grid_label(value, &self.unit) }
            })
            .collect()
    }
}

/// Display-only heuristic: values above 100 are shown in thousands, smaller values
/// as-is, both rounded to an integer.
pub fn format_grid_label(value: f64, unit: &str) -> String {
    let shown = if value > 100.0 { (value / 1000.0).round() } else { value.round() };
    format!("{} {unit}", fmt_number(shown))
}
