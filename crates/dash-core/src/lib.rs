// File: crates/dash-core/src/lib.rs
// Summary: Core library entry point; chart math, scene graph builders and the SVG mount step.

pub mod aggregate;
pub mod axis;
pub mod cards;
pub mod chart;
pub mod error;
pub mod grid;
pub mod interaction;
pub mod mapper;
pub mod progress;
pub mod record;
pub mod scale;
pub mod scene;
pub mod skills;
pub mod svg;
pub mod theme;
pub mod types;

pub use aggregate::{max_per_category, CategoryAggregate};
pub use chart::{ChartScene, MarkerAnchor};
pub use error::ChartError;
pub use interaction::{bind_tooltips, TooltipOffsets, TooltipPanel};
pub use mapper::{map_series, CumulativeSeries, MappedSeries};
pub use progress::ProgressChart;
pub use record::{Record, SkillRecord};
pub use scale::LinearScale;
pub use scene::{AttrValue, Node};
pub use skills::{BarAnimation, SkillsChart};
pub use svg::to_svg_string;
pub use theme::Palette;
pub use types::Frame;
