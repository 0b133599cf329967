// File: crates/dash-core/src/interaction.rs
// Summary: Tooltip interaction layer: shared panel state, content formatting and marker bindings.

use chrono::{DateTime, Utc};

use crate::chart::{ChartScene, MarkerAnchor};
use crate::record::Record;
use crate::scene::{fmt_number, Node};

/// Fixed pixel offset from a marker to the tooltip panel's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipOffsets {
    pub dx: f64,
    pub dy: f64,
}

impl Default for TooltipOffsets {
    fn default() -> Self { Self { dx: 150.0, dy: 850.0 } }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipPosition {
    pub left: f64,
    pub top: f64,
}

impl TooltipPosition {
    pub fn for_anchor(anchor: &MarkerAnchor, offsets: &TooltipOffsets) -> Self {
        Self { left: anchor.x + offsets.dx, top: anchor.y + offsets.dy }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
    pub title: String,
    pub amount: String,
    pub date: String,
}

impl TooltipContent {
    pub fn from_record(record: &Record) -> Self {
        Self {
            title: record.name.clone(),
            amount: format_kb(record.amount),
            date: format_date(&record.timestamp),
        }
    }
}

/// XP amount shown in thousands with the dashboard's "KB" label.
pub fn format_kb(amount: f64) -> String {
    format!("{} KB", fmt_number(amount / 1000.0))
}

/// Human-readable date, e.g. `Tue Jan 02 2024`.
pub fn format_date(t: &DateTime<Utc>) -> String {
    t.format("%a %b %d %Y").to_string()
}

/// The single tooltip panel shared by every marker of a chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TooltipPanel {
    #[default]
    Hidden,
    Visible {
        anchor: usize,
        position: TooltipPosition,
        content: TooltipContent,
    },
}

impl TooltipPanel {
    pub fn new() -> Self { Self::Hidden }

    /// Pointer entered `anchor`: show its record, replacing whatever was shown.
    pub fn enter(&mut self, anchor: &MarkerAnchor, offsets: &TooltipOffsets) {
        *self = TooltipPanel::Visible {
            anchor: anchor.index,
            position: TooltipPosition::for_anchor(anchor, offsets),
            content: TooltipContent::from_record(&anchor.record),
        };
    }

    pub fn leave(&mut self) {
        *self = TooltipPanel::Hidden;
    }

    pub fn is_visible(&self) -> bool { matches!(self, TooltipPanel::Visible { .. }) }
}

/// Marker closest to the pointer at (`px`, `py`).
pub fn nearest_anchor(anchors: &[MarkerAnchor], px: f64, py: f64) -> Option<&MarkerAnchor> {
    anchors.iter().min_by(|a, b| {
        let da = (a.x - px).powi(2) + (a.y - py).powi(2);
        let db = (b.x - px).powi(2) + (b.y - py).powi(2);
        da.total_cmp(&db)
    })
}

/// Attach tooltip data to every `data-point` marker of `scene`: `data-tooltip-*`
/// attributes for a host-side hover handler and a `<title>` child as fallback.
pub fn bind_tooltips(scene: &mut ChartScene, offsets: &TooltipOffsets) {
    let anchors = &scene.anchors;
    scene.root.walk_mut(&mut |node: &mut Node| {
        if !node.has_class("data-point") {
            return;
        }
        // anchors are stored in marker order, so `data-index` is also their position
        let Some(index) = node.num("data-index") else { return };
        let Some(anchor) = anchors.get(index as usize).filter(|a| a.index as f64 == index) else {
            return;
        };
        let pos = TooltipPosition::for_anchor(anchor, offsets);
        let content = TooltipContent::from_record(&anchor.record);
        node.set_attr("tabindex", "0");
        node.set_attr("data-tooltip-left", pos.left);
        node.set_attr("data-tooltip-top", pos.top);
        node.set_attr("data-tooltip-title", content.title.as_str());
        node.set_attr("data-tooltip-amount", content.amount.as_str());
        node.set_attr("data-tooltip-date", content.date.as_str());
        if !node.children.iter().any(|c| c.name == "title") {
            node.push(Node::new("title").with_text(format!(
                "{}: {}, {}",
                content.title, content.amount, content.date
            )));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn anchor(index: usize, x: f64, y: f64) -> MarkerAnchor {
        let t = Utc.with_ymd_and_hms(2024, 1, 2, 9, 30, 0).unwrap();
        MarkerAnchor { index, x, y, record: Record::new(t, 12500.0, "go-reloaded") }
    }

    #[test]
    fn content_uses_kb_and_readable_date() {
        let c = TooltipContent::from_record(&anchor(0, 0.0, 0.0).record);
        assert_eq!(c.title, "go-reloaded");
        assert_eq!(c.amount, "12.5 KB");
        assert_eq!(c.date, "Tue Jan 02 2024");
    }

    #[test]
    fn one_panel_shows_at_most_one_record() {
        let offsets = TooltipOffsets::default();
        let mut panel = TooltipPanel::new();
        panel.enter(&anchor(0, 10.0, 20.0), &offsets);
        panel.enter(&anchor(1, 30.0, 40.0), &offsets);
        match &panel {
            TooltipPanel::Visible { anchor, position, .. } => {
                assert_eq!(*anchor, 1);
                assert_eq!(*position, TooltipPosition { left: 180.0, top: 890.0 });
            }
            TooltipPanel::Hidden => panic!("panel should be visible"),
        }
        panel.leave();
        assert!(!panel.is_visible());
    }

    #[test]
    fn nearest_anchor_picks_closest_marker() {
        let anchors = vec![anchor(0, 0.0, 0.0), anchor(1, 100.0, 100.0), anchor(2, 200.0, 0.0)];
        assert_eq!(nearest_anchor(&anchors, 90.0, 80.0).map(|a| a.index), Some(1));
        assert!(nearest_anchor(&[], 0.0, 0.0).is_none());
    }
}
