// File: crates/dash-core/src/skills.rs
// Summary: Skills bar chart builder: one bar per category on a fixed 0-100 scale, with optional entry animation.

use crate::aggregate::CategoryAggregate;
use crate::axis::{axes, axis_glow_filter, background_panel, empty_state, gridlines, svg_root, LABEL_FONT};
use crate::chart::ChartScene;
use crate::error::ChartError;
use crate::grid::GridSpec;
use crate::scene::{fmt_number, Node};
use crate::theme::Palette;
use crate::types::{Frame, SKILLS_ASPECT};

pub const BAR_GRADIENT_ID: &str = "barGradient";
pub const BAR_GLOW_ID: &str = "barGlow";
pub const SCALE_MAX: f64 = 100.0;
pub const EMPTY_MESSAGE: &str = "No skills recorded yet";
/// Share of each slot the bar occupies.
const BAR_FILL: f64 = 0.8;
/// Empty share of the slot on each side of the bar.
const BAR_GUTTER: f64 = 0.1;

/// Entry animation timing. Bars grow from the baseline to their final height; the
/// static geometry is always the final one, so renderers that ignore animation
/// still draw the finished chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarAnimation {
    pub enabled: bool,
    pub initial_delay_ms: u32,
    pub stagger_ms: u32,
    pub duration_ms: u32,
    pub label_fade_ms: u32,
}

impl Default for BarAnimation {
    fn default() -> Self {
        Self { enabled: true, initial_delay_ms: 300, stagger_ms: 100, duration_ms: 1000, label_fade_ms: 500 }
    }
}

impl BarAnimation {
    pub fn disabled() -> Self {
        Self { enabled: false, ..Self::default() }
    }

    /// Delay before bar `index` starts growing.
    pub fn delay_for(&self, index: usize) -> u32 {
        self.initial_delay_ms + self.stagger_ms * index as u32
    }
}

/// Final pixel geometry of one bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGeometry {
    pub category: String,
    pub value: f64,
    pub slot_x: f64,
    pub slot_width: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarGeometry {
    pub fn center_x(&self) -> f64 { self.slot_x + self.slot_width * 0.5 }
}

#[derive(Clone, Debug)]
pub struct SkillsChart {
    pub frame: Frame,
    pub palette: Palette,
    pub grid_lines: usize,
    pub unit: String,
    /// Prefix stripped from category keys before display.
    pub label_prefix: String,
    pub animation: BarAnimation,
}

impl Default for SkillsChart {
    fn default() -> Self {
        Self {
            frame: Frame::for_container(crate::types::MAX_WIDTH, SKILLS_ASPECT),
            palette: Palette::dark(),
            grid_lines: 10,
            unit: "%".to_string(),
            label_prefix: "skill_".to_string(),
            animation: BarAnimation::default(),
        }
    }
}

impl SkillsChart {
    pub fn new(frame: Frame, palette: Palette) -> Self {
        Self { frame, palette, ..Self::default() }
    }

    /// Lay out one bar per category in iteration order.
    pub fn layout(&self, skills: &CategoryAggregate) -> Result<Vec<BarGeometry>, ChartError> {
        if skills.is_empty() {
            return Err(ChartError::NoCategories);
        }
        let frame = &self.frame;
        let slot_width = frame.inner_width() / skills.len() as f64;
        let gutter = slot_width * BAR_GUTTER;

        Ok(skills
            .iter()
            .enumerate()
            .map(|(i, (category, value))| {
                let slot_x = frame.padding + i as f64 * slot_width;
                let height = (value / SCALE_MAX) * frame.inner_height();
                BarGeometry {
                    category: category.to_string(),
                    value,
                    slot_x,
                    slot_width,
                    x: slot_x + gutter,
                    y: frame.baseline() - height,
                    width: slot_width * BAR_FILL,
                    height,
                }
            })
            .collect())
    }

    pub fn build(&self, skills: &CategoryAggregate) -> ChartScene {
        match self.try_build(skills) {
            Ok(scene) => scene,
            Err(reason) => ChartScene::empty_state(
                empty_state(&self.frame, &self.palette, "skills-chart", EMPTY_MESSAGE),
                reason,
            ),
        }
    }

    pub fn try_build(&self, skills: &CategoryAggregate) -> Result<ChartScene, ChartError> {
        let bars = self.layout(skills)?;
        let frame = &self.frame;
        let palette = &self.palette;

        let defs = Node::new("defs")
            .child(axis_glow_filter())
            .child(bar_gradient(palette))
            .child(bar_glow_filter());
        let grid = GridSpec::new(self.grid_lines, self.unit.clone(), 0.0, SCALE_MAX);

        let mut group = Node::new("g").attr("class", "skill-bars");
        for (i, bar) in bars.iter().enumerate() {
            for node in self.bar_nodes(i, bar) {
                group.push(node);
            }
        }

        let root = svg_root(frame, "skills-chart")
            .child(background_panel(frame, palette))
            .child(defs)
            .child(axes(frame, palette, true))
            .child(gridlines(frame, palette, &grid))
            .child(group);
        Ok(ChartScene::new(root, Vec::new()))
    }

    fn bar_nodes(&self, index: usize, bar: &BarGeometry) -> [Node; 4] {
        let frame = &self.frame;
        let palette = &self.palette;
        let baseline = frame.baseline();

        let track = Node::new("rect")
            .attr("x", bar.x)
            .attr("y", frame.padding)
            .attr("width", bar.width)
            .attr("height", frame.inner_height())
            .attr("fill", palette.track)
            .attr("rx", "4")
            .attr("ry", "4")
            .attr("class", "skill-track");

        let mut rect = Node::new("rect")
            .attr("x", bar.x)
            .attr("y", bar.y)
            .attr("width", bar.width)
            .attr("height", bar.height)
            .attr("fill", format!("url(#{BAR_GRADIENT_ID})"))
            .attr("rx", "4")
            .attr("ry", "4")
            .attr("filter", format!("url(#{BAR_GLOW_ID})"))
            .attr("class", "skill-bar")
            .attr("data-category", bar.category.as_str());

        let name = Node::new("text")
            .attr("x", bar.center_x())
            .attr("y", baseline + 20.0)
            .attr("text-anchor", "middle")
            .attr("font-size", "12")
            .attr("font-family", LABEL_FONT)
            .attr("font-weight", "500")
            .attr("fill", palette.axis)
            .attr("opacity", "0.9")
            .attr("class", "skill-label")
            .with_text(display_skill_name(&bar.category, &self.label_prefix));

        let mut value = Node::new("text")
            .attr("x", bar.center_x())
            .attr("y", bar.y - 10.0)
            .attr("text-anchor", "middle")
            .attr("font-size", "14")
            .attr("font-family", LABEL_FONT)
            .attr("font-weight", "600")
            .attr("fill", palette.highlight)
            .attr("opacity", "1")
            .attr("class", "value-label")
            .with_text(format!("{}%", fmt_number(bar.value)));

        if self.animation.enabled {
            let anim = &self.animation;
            let delay = anim.delay_for(index);
            rect.push(hold_then_grow("height", 0.0, bar.height, delay, anim.duration_ms, true));
            rect.push(hold_then_grow("y", baseline, bar.y, delay, anim.duration_ms, true));
            value.push(hold_then_grow("opacity", 0.0, 1.0, delay, anim.label_fade_ms, false));
        }

        [track, rect, name, value]
    }
}

/// `<animate>` that holds `from` for `delay_ms`, then moves to `to` over
/// `duration_ms` and stays there.
fn hold_then_grow(attribute: &str, from: f64, to: f64, delay_ms: u32, duration_ms: u32, ease_out: bool) -> Node {
    let total = (delay_ms + duration_ms).max(1);
    let hold = delay_ms as f64 / total as f64;
    let mut n = Node::new("animate")
        .attr("attributeName", attribute)
        .attr("values", format!("{0};{0};{1}", fmt_number(from), fmt_number(to)))
        .attr("keyTimes", format!("0;{};1", fmt_number(hold)))
        .attr("dur", format!("{total}ms"))
        .attr("fill", "freeze");
    if ease_out {
        n.set_attr("calcMode", "spline");
        n.set_attr("keySplines", "0 0 1 1;0 0 0.58 1");
    }
    n
}

/// `skill_go` -> `Go`: strip `prefix` once, then capitalize the first letter.
pub fn display_skill_name(key: &str, prefix: &str) -> String {
    let bare = key.strip_prefix(prefix).unwrap_or(key);
    let mut chars = bare.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn bar_gradient(palette: &Palette) -> Node {
    Node::new("linearGradient")
        .attr("id", BAR_GRADIENT_ID)
        .attr("x1", "0%")
        .attr("y1", "0%")
        .attr("x2", "0%")
        .attr("y2", "100%")
        .child(Node::new("stop").attr("offset", "0%").attr("stop-color", palette.primary))
        .child(Node::new("stop").attr("offset", "100%").attr("stop-color", palette.secondary))
}

fn bar_glow_filter() -> Node {
    Node::new("filter")
        .attr("id", BAR_GLOW_ID)
        .attr("height", "130%")
        .child(
            Node::new("feGaussianBlur")
                .attr("in", "SourceGraphic")
                .attr("stdDeviation", "3")
                .attr("result", "blur"),
        )
        .child(
            Node::new("feColorMatrix")
                .attr("in", "blur")
                .attr("mode", "matrix")
                .attr("values", "1 0 0 0 0  0 1 0 0 0  0 0 1 0 0  0 0 0 18 -7")
                .attr("result", "glow"),
        )
        .child(
            Node::new("feMerge")
                .child(Node::new("feMergeNode").attr("in", "glow"))
                .child(Node::new("feMergeNode").attr("in", "SourceGraphic")),
        )
}
