// File: crates/dash-core/src/types.rs
// Summary: Shared types and constants (chart frame sizes, paddings, aspect ratios).

/// Widest chart the dashboard lays out, in pixels.
pub const MAX_WIDTH: f64 = 900.0;
/// Default gap between the chart edge and the plot area, in pixels.
pub const PADDING: f64 = 50.0;
/// Height/width ratio of the progress timeline.
pub const PROGRESS_ASPECT: f64 = 0.5;
/// Height/width ratio of the skills bar chart.
pub const SKILLS_ASPECT: f64 = 0.6;

/// Pixel frame of one chart: outer size plus uniform padding around the plot area.
/// Contract: `width > 2 * padding` and `height > 2 * padding`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Frame {
    pub const fn new(width: f64, height: f64, padding: f64) -> Self {
        Self { width, height, padding }
    }

    /// Size a frame for a container of `container_width` pixels:
    /// width is capped at [`MAX_WIDTH`], height follows `aspect`.
    pub fn for_container(container_width: f64, aspect: f64) -> Self {
        let width = container_width.min(MAX_WIDTH);
        Self::new(width, width * aspect, PADDING)
    }

    /// Plot width (`width - 2 * padding`).
    pub fn inner_width(&self) -> f64 { self.width - 2.0 * self.padding }
    /// Plot height (`height - 2 * padding`).
    pub fn inner_height(&self) -> f64 { self.height - 2.0 * self.padding }
    /// Y pixel of the value baseline (bottom edge of the plot area).
    pub fn baseline(&self) -> f64 { self.height - self.padding }
    /// X pixel of the right edge of the plot area.
    pub fn right(&self) -> f64 { self.width - self.padding }
}

impl Default for Frame {
    fn default() -> Self {
        Self::for_container(MAX_WIDTH, PROGRESS_ASPECT)
    }
}
