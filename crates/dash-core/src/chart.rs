// File: crates/dash-core/src/chart.rs
// Summary: Output of the chart builders: the scene graph plus marker anchors for tooltips.

use crate::error::ChartError;
use crate::record::Record;
use crate::scene::Node;
use crate::svg::to_svg_string;

/// Pixel position of one data-point marker and the record it stands for.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerAnchor {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub record: Record,
}

/// A built chart. `empty` is set when the input could not be charted and `root`
/// holds the empty-state placeholder instead.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartScene {
    pub root: Node,
    pub anchors: Vec<MarkerAnchor>,
    pub empty: Option<ChartError>,
}

impl ChartScene {
    pub fn new(root: Node, anchors: Vec<MarkerAnchor>) -> Self {
        Self { root, anchors, empty: None }
    }

    pub fn empty_state(root: Node, reason: ChartError) -> Self {
        Self { root, anchors: Vec::new(), empty: Some(reason) }
    }

    pub fn is_empty_state(&self) -> bool { self.empty.is_some() }

    pub fn to_svg(&self) -> String { to_svg_string(&self.root) }
}
