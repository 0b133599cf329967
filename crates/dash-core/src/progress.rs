// File: crates/dash-core/src/progress.rs
// Summary: Progress timeline builder: cumulative XP over time as area, line and point markers.

use chrono::{DateTime, Utc};

use crate::axis::{axes, axis_glow_filter, background_panel, empty_state, gridlines, svg_root};
use crate::chart::{ChartScene, MarkerAnchor};
use crate::error::ChartError;
use crate::grid::GridSpec;
use crate::mapper::{map_series, MappedSeries};
use crate::record::Record;
use crate::scene::{fmt_number, Node};
use crate::theme::Palette;
use crate::types::Frame;

pub const AREA_GRADIENT_ID: &str = "areaGradient";
pub const EMPTY_MESSAGE: &str = "No data to chart yet";

/// Builder for the cumulative progress chart.
#[derive(Clone, Debug)]
pub struct ProgressChart {
    pub frame: Frame,
    pub palette: Palette,
    /// Number of gridline intervals; `grid_lines + 1` rules are drawn.
    pub grid_lines: usize,
    pub unit: String,
    pub axis_glow: bool,
}

impl Default for ProgressChart {
    fn default() -> Self {
        Self {
            frame: Frame::default(),
            palette: Palette::dark(),
            grid_lines: 5,
            unit: "KB".to_string(),
            axis_glow: true,
        }
    }
}

impl ProgressChart {
    pub fn new(frame: Frame, palette: Palette) -> Self {
        Self { frame, palette, ..Self::default() }
    }

    /// Build the chart, falling back to an empty-state scene when `records` cannot
    /// be mapped (no records, a single instant, or only zero amounts).
    pub fn build(&self, records: &[Record], series_start: DateTime<Utc>) -> ChartScene {
        match self.try_build(records, series_start) {
            Ok(scene) => scene,
            Err(reason) => ChartScene::empty_state(
                empty_state(&self.frame, &self.palette, "progress-chart", EMPTY_MESSAGE),
                reason,
            ),
        }
    }

    pub fn try_build(&self, records: &[Record], series_start: DateTime<Utc>) -> Result<ChartScene, ChartError> {
        let mapped = map_series(records, series_start, &self.frame)?;
        let frame = &self.frame;
        let palette = &self.palette;

        let defs = Node::new("defs")
            .child(axis_glow_filter())
            .child(area_gradient(palette));
        let grid = GridSpec::new(self.grid_lines, self.unit.clone(), 0.0, mapped.y.domain_max);
        let (graph, anchors) = self.graph(&mapped);

        let root = svg_root(frame, "progress-chart")
            .child(background_panel(frame, palette))
            .child(defs)
            .child(axes(frame, palette, self.axis_glow))
            .child(gridlines(frame, palette, &grid))
            .child(graph);
        Ok(ChartScene::new(root, anchors))
    }

    fn graph(&self, mapped: &MappedSeries<'_>) -> (Node, Vec<MarkerAnchor>) {
        let palette = &self.palette;
        let baseline = self.frame.baseline();
        let points = mapped.points();
        let (x0, y0) = points[0];

        let mut line_d = format!("M {} {}", fmt_number(x0), fmt_number(y0));
        let mut area_d = format!("M {} {}", fmt_number(x0), fmt_number(baseline));
        let mut segments = Node::new("g").attr("class", "segments");
        let mut markers = Node::new("g").attr("class", "markers");
        let mut anchors = Vec::with_capacity(mapped.records.len());

        let mut prev = (x0, y0);
        for (i, &(x, y)) in points.iter().enumerate().skip(1) {
            line_d.push_str(&format!(" L {} {}", fmt_number(x), fmt_number(y)));
            area_d.push_str(&format!(" L {} {}", fmt_number(x), fmt_number(y)));

            segments.push(
                Node::new("line")
                    .attr("x1", prev.0)
                    .attr("y1", prev.1)
                    .attr("x2", x)
                    .attr("y2", y)
                    .attr("stroke", palette.primary)
                    .attr("stroke-width", "2")
                    .attr("stroke-opacity", "0.7")
                    .attr("class", "segment"),
            );

            let index = i - 1;
            markers.push(
                Node::new("circle")
                    .attr("cx", x)
                    .attr("cy", y)
                    .attr("r", 5)
                    .attr("fill", palette.primary)
                    .attr("stroke", palette.background)
                    .attr("stroke-width", "2")
                    .attr("class", "data-point")
                    .attr("data-index", index),
            );
            markers.push(
                Node::new("circle")
                    .attr("cx", x)
                    .attr("cy", y)
                    .attr("r", 2)
                    .attr("fill", palette.highlight)
                    .attr("class", "point-highlight"),
            );
            anchors.push(MarkerAnchor { index, x, y, record: mapped.records[index].clone() });
            prev = (x, y);
        }
        area_d.push_str(&format!(" L {} {} Z", fmt_number(prev.0), fmt_number(baseline)));

        let graph = Node::new("g")
            .attr("class", "graph-data")
            .child(
                Node::new("path")
                    .attr("d", area_d)
                    .attr("fill", format!("url(#{AREA_GRADIENT_ID})"))
                    .attr("class", "area-path"),
            )
            .child(segments)
            .child(
                Node::new("path")
                    .attr("d", line_d)
                    .attr("fill", "none")
                    .attr("stroke", palette.primary)
                    .attr("stroke-width", "2.5")
                    .attr("stroke-linecap", "round")
                    .attr("stroke-linejoin", "round")
                    .attr("class", "line-path"),
            )
            .child(markers);
        (graph, anchors)
    }
}

fn area_gradient(palette: &Palette) -> Node {
    Node::new("linearGradient")
        .attr("id", AREA_GRADIENT_ID)
        .attr("x1", "0%")
        .attr("y1", "0%")
        .attr("x2", "0%")
        .attr("y2", "100%")
        .child(
            Node::new("stop")
                .attr("offset", "0%")
                .attr("stop-color", palette.area)
                .attr("stop-opacity", "0.3"),
        )
        .child(
            Node::new("stop")
                .attr("offset", "100%")
                .attr("stop-color", palette.area)
                .attr("stop-opacity", "0.05"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn area_path_is_closed_on_the_baseline() {
        let records = vec![Record::new(day(2), 1000.0, "a"), Record::new(day(3), 2000.0, "b")];
        let scene = ProgressChart::default().build(&records, day(1));
        let area = scene.root.find_by_class("area-path")[0];
        let d = area.str_attr("d").unwrap();
        assert!(d.starts_with("M 50 400 L "), "{d}");
        assert!(d.ends_with(" L 850 400 Z"), "{d}");

        let line = scene.root.find_by_class("line-path")[0];
        assert_eq!(line.str_attr("d").unwrap().matches(" L ").count(), 2);
        assert_eq!(line.str_attr("fill"), Some("none"));
    }

    #[test]
    fn paint_order_is_fixed() {
        let records = vec![Record::new(day(2), 5.0, "a")];
        let scene = ProgressChart::default().build(&records, day(1));
        let classes: Vec<_> = scene
            .root
            .children
            .iter()
            .map(|c| c.str_attr("class").unwrap_or(c.name.as_str()).to_string())
            .collect();
        assert_eq!(classes, ["plot-panel", "defs", "axes", "grid-lines", "graph-data"]);
    }

    #[test]
    fn empty_input_yields_placeholder() {
        let scene = ProgressChart::default().build(&[], day(1));
        assert!(scene.is_empty_state());
        assert!(scene.anchors.is_empty());
        assert_eq!(scene.root.find_by_class("empty-state").len(), 1);
        assert!(!scene.to_svg().contains("NaN"));
    }
}
