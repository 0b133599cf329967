// File: crates/dash-render-skia/src/lib.rs
// Summary: Skia renderer crate; rasterizes dash-core scene graphs to PNG on the CPU.

pub mod color;
pub mod path;
pub mod raster;
pub mod text;

pub use raster::{render_to_png, render_to_png_bytes, RenderOptions};
pub use text::TextShaper;
