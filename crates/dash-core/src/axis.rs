// File: crates/dash-core/src/axis.rs
// Summary: Shared chart furniture: background panel, axis lines with optional glow, gridlines with labels.

use crate::grid::GridSpec;
use crate::scene::Node;
use crate::theme::Palette;
use crate::types::Frame;

pub const AXIS_GLOW_ID: &str = "axisGlow";
pub const LABEL_FONT: &str = "Inter, sans-serif";

/// Rounded translucent rectangle covering the plot area.
pub fn background_panel(frame: &Frame, palette: &Palette) -> Node {
    Node::new("rect")
        .attr("x", frame.padding)
        .attr("y", frame.padding)
        .attr("width", frame.inner_width())
        .attr("height", frame.inner_height())
        .attr("fill", palette.panel)
        .attr("rx", "4")
        .attr("ry", "4")
        .attr("class", "plot-panel")
}

/// Gaussian blur filter referenced by the axis lines.
pub fn axis_glow_filter() -> Node {
    Node::new("filter").attr("id", AXIS_GLOW_ID).child(
        Node::new("feGaussianBlur")
            .attr("in", "SourceGraphic")
            .attr("stdDeviation", "1")
            .attr("result", "blur"),
    )
}

/// X axis along the baseline and Y axis along the left plot edge.
pub fn axes(frame: &Frame, palette: &Palette, glow: bool) -> Node {
    let line = |x1: f64, y1: f64, x2: f64, y2: f64| {
        let mut n = Node::new("line")
            .attr("x1", x1)
            .attr("y1", y1)
            .attr("x2", x2)
            .attr("y2", y2)
            .attr("stroke", palette.axis)
            .attr("stroke-width", "1.5")
            .attr("stroke-opacity", "0.7");
        if glow {
            n.set_attr("filter", format!("url(#{AXIS_GLOW_ID})"));
        }
        n
    };

    Node::new("g")
        .attr("class", "axes")
        .child(line(frame.padding, frame.baseline(), frame.right(), frame.baseline()).attr("class", "x-axis"))
        .child(line(frame.padding, frame.padding, frame.padding, frame.baseline()).attr("class", "y-axis"))
}

/// Dashed horizontal rules with right-aligned value labels left of the Y axis.
pub fn gridlines(frame: &Frame, palette: &Palette, spec: &GridSpec) -> Node {
    let mut group = Node::new("g").attr("class", "grid-lines");
    for line in spec.layout(frame) {
        group.push(
            Node::new("line")
                .attr("x1", frame.padding)
                .attr("y1", line.y)
                .attr("x2", frame.right())
                .attr("y2", line.y)
                .attr("stroke", palette.axis)
                .attr("stroke-width", "0.8")
                .attr("stroke-dasharray", "2,4")
                .attr("stroke-opacity", "0.2")
                .attr("class", "grid-line"),
        );
        group.push(
            Node::new("text")
                .attr("x", frame.padding - 12.0)
                .attr("y", line.y + 4.0)
                .attr("text-anchor", "end")
                .attr("dominant-baseline", "middle")
                .attr("fill", palette.axis)
                .attr("font-size", "11")
                .attr("font-family", LABEL_FONT)
                .attr("font-weight", "500")
                .attr("opacity", "0.8")
                .attr("class", "axis-label")
                .with_text(line.label),
        );
    }
    group
}

/// Root `<svg>` element sized to `frame`.
pub fn svg_root(frame: &Frame, class: &str) -> Node {
    Node::new("svg")
        .attr("width", frame.width)
        .attr("height", frame.height)
        .attr("viewBox", format!("0 0 {} {}", crate::scene::fmt_number(frame.width), crate::scene::fmt_number(frame.height)))
        .attr("class", class)
}

/// Placeholder scene for charts without drawable data.
pub fn empty_state(frame: &Frame, palette: &Palette, class: &str, message: &str) -> Node {
    svg_root(frame, class)
        .child(background_panel(frame, palette))
        .child(
            Node::new("text")
                .attr("x", frame.width / 2.0)
                .attr("y", frame.height / 2.0)
                .attr("text-anchor", "middle")
                .attr("dominant-baseline", "middle")
                .attr("fill", palette.axis)
                .attr("font-size", "14")
                .attr("font-family", LABEL_FONT)
                .attr("class", "empty-state")
                .with_text(message),
        )
}
