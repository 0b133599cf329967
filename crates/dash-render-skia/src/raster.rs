// File: crates/dash-render-skia/src/raster.rs
// Summary: Headless PNG rendering of chart scene graphs using Skia CPU raster surfaces.

use std::collections::HashMap;

use anyhow::{anyhow, Context, Result};
use dash_core::Node;
use skia_safe as skia;

use crate::color::{parse_color, with_opacity};
use crate::path::parse_path_data;
use crate::text::{Anchor, LabelStyle, TextShaper};

/// Elements that carry no static geometry of their own.
const SKIPPED: &[&str] = &["defs", "filter", "animate", "title", "linearGradient", "stop"];

pub struct RenderOptions {
    /// Device pixels per scene unit.
    pub scale: f32,
    pub draw_labels: bool,
    /// Fill behind the scene; `None` leaves the surface transparent.
    pub background: Option<skia::Color>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            draw_labels: true,
            background: Some(skia::Color::from_argb(255, 30, 30, 46)),
        }
    }
}

/// Rasterize `root` (an `<svg>` scene with `width`/`height`) and return PNG bytes.
///
/// Gradient fills are approximated by their first stop; filters and animation are
/// ignored, so the output is the final static frame.
pub fn render_to_png_bytes(root: &Node, opts: &RenderOptions) -> Result<Vec<u8>> {
    let width = root.num("width").context("scene root has no numeric width")?;
    let height = root.num("height").context("scene root has no numeric height")?;
    let px_w = (width as f32 * opts.scale).round() as i32;
    let px_h = (height as f32 * opts.scale).round() as i32;

    let mut surface = skia::surfaces::raster_n32_premul((px_w.max(1), px_h.max(1)))
        .ok_or_else(|| anyhow!("failed to create raster surface"))?;
    let canvas = surface.canvas();
    canvas.clear(opts.background.unwrap_or(skia::Color::TRANSPARENT));
    canvas.scale((opts.scale, opts.scale));

    let painter = Painter {
        gradients: collect_gradients(root),
        shaper: opts.draw_labels.then(TextShaper::new),
    };
    for child in &root.children {
        painter.draw(canvas, child)?;
    }

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render the scene to a PNG at `output_png_path`, creating parent directories.
pub fn render_to_png(root: &Node, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
    let bytes = render_to_png_bytes(root, opts)?;
    let path = output_png_path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Gradient id -> first stop color (with its stop-opacity applied).
fn collect_gradients(root: &Node) -> HashMap<String, skia::Color> {
    let mut out = HashMap::new();
    for g in root.find_by_name("linearGradient") {
        let (Some(id), Some(stop)) = (g.str_attr("id"), g.children.iter().find(|c| c.name == "stop")) else {
            continue;
        };
        let Some(color) = stop.str_attr("stop-color").and_then(parse_color) else { continue };
        let opacity = stop.num("stop-opacity").unwrap_or(1.0) as f32;
        out.insert(id.to_string(), with_opacity(color, opacity));
    }
    out
}

struct Painter {
    gradients: HashMap<String, skia::Color>,
    shaper: Option<TextShaper>,
}

impl Painter {
    fn draw(&self, canvas: &skia::Canvas, node: &Node) -> Result<()> {
        if SKIPPED.contains(&node.name.as_str()) {
            return Ok(());
        }
        match node.name.as_str() {
            "g" | "svg" => {
                for c in &node.children {
                    self.draw(canvas, c)?;
                }
            }
            "rect" => {
                let rect = skia::Rect::from_xywh(f(node, "x"), f(node, "y"), f(node, "width"), f(node, "height"));
                let (rx, ry) = (f(node, "rx"), f(node, "ry"));
                for paint in self.paints(node, true) {
                    if rx > 0.0 || ry > 0.0 {
                        canvas.draw_round_rect(rect, rx, ry, &paint);
                    } else {
                        canvas.draw_rect(rect, &paint);
                    }
                }
            }
            "circle" => {
                let center = (f(node, "cx"), f(node, "cy"));
                for paint in self.paints(node, true) {
                    canvas.draw_circle(center, f(node, "r"), &paint);
                }
            }
            "line" => {
                let (p1, p2) = ((f(node, "x1"), f(node, "y1")), (f(node, "x2"), f(node, "y2")));
                for paint in self.paints(node, false) {
                    canvas.draw_line(p1, p2, &paint);
                }
            }
            "path" => {
                let d = node.str_attr("d").unwrap_or_default();
                let path = parse_path_data(d).with_context(|| format!("path `{d}`"))?;
                for paint in self.paints(node, true) {
                    canvas.draw_path(&path, &paint);
                }
            }
            "text" => self.draw_text(canvas, node),
            _ => {}
        }
        Ok(())
    }

    /// Fill then stroke paints for `node`. Lines have no fill.
    fn paints(&self, node: &Node, fillable: bool) -> Vec<skia::Paint> {
        let opacity = num_or(node, "opacity", 1.0);
        let mut out = Vec::with_capacity(2);

        if fillable {
            // SVG shapes default to a black fill
            let fill = match node.str_attr("fill") {
                Some(v) => self.resolve(v),
                None => Some(skia::Color::BLACK),
            };
            if let Some(color) = fill {
                let mut paint = skia::Paint::default();
                paint.set_anti_alias(true);
                paint.set_style(skia::paint::Style::Fill);
                paint.set_color(with_opacity(color, opacity * num_or(node, "fill-opacity", 1.0)));
                out.push(paint);
            }
        }

        if let Some(color) = node.str_attr("stroke").and_then(|v| self.resolve(v)) {
            let mut paint = skia::Paint::default();
            paint.set_anti_alias(true);
            paint.set_style(skia::paint::Style::Stroke);
            paint.set_stroke_width(num_or(node, "stroke-width", 1.0));
            paint.set_color(with_opacity(color, opacity * num_or(node, "stroke-opacity", 1.0)));
            if node.str_attr("stroke-linecap") == Some("round") {
                paint.set_stroke_cap(skia::paint::Cap::Round);
            }
            if node.str_attr("stroke-linejoin") == Some("round") {
                paint.set_stroke_join(skia::paint::Join::Round);
            }
            if let Some(intervals) = node.str_attr("stroke-dasharray").and_then(dash_intervals) {
                paint.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
            }
            out.push(paint);
        }
        out
    }

    fn resolve(&self, value: &str) -> Option<skia::Color> {
        match value.strip_prefix("url(#").and_then(|v| v.strip_suffix(')')) {
            Some(id) => self.gradients.get(id).copied(),
            None => parse_color(value),
        }
    }

    fn draw_text(&self, canvas: &skia::Canvas, node: &Node) {
        let (Some(shaper), Some(text)) = (&self.shaper, node.text.as_deref()) else { return };
        let Some(color) = node.str_attr("fill").and_then(|v| self.resolve(v)) else { return };
        let style = LabelStyle {
            size: num_or(node, "font-size", 12.0),
            color: with_opacity(color, num_or(node, "opacity", 1.0)),
            bold: node.num("font-weight").is_some_and(|w| w >= 600.0),
            anchor: Anchor::parse(node.str_attr("text-anchor").unwrap_or("start")),
            centered: node.str_attr("dominant-baseline") == Some("middle"),
        };
        shaper.draw(canvas, text, f(node, "x"), f(node, "y"), &style);
    }
}

fn f(node: &Node, key: &str) -> f32 {
    num_or(node, key, 0.0)
}

fn num_or(node: &Node, key: &str, default: f32) -> f32 {
    node.num(key).map(|v| v as f32).unwrap_or(default)
}

/// `2,4` or `2 4` -> `[2.0, 4.0]`; odd counts repeat as in SVG.
fn dash_intervals(s: &str) -> Option<Vec<f32>> {
    let mut v: Vec<f32> = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(|t| t.parse::<f32>().ok())
        .collect::<Option<_>>()?;
    if v.is_empty() {
        return None;
    }
    if v.len() % 2 == 1 {
        v.extend_from_within(..);
    }
    Some(v)
}
