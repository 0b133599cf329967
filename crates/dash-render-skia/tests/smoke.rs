// File: crates/dash-render-skia/tests/smoke.rs
// Purpose: Rasterize built charts and check the PNG output is well-formed.

use chrono::{TimeZone, Utc};
use dash_core::{max_per_category, ProgressChart, Record, SkillRecord, SkillsChart};
use dash_render_skia::{render_to_png, render_to_png_bytes, RenderOptions};

#[test]
fn progress_chart_renders_png() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let records = vec![
        Record::new(Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap(), 9_000.0, "go-reloaded"),
        Record::new(Utc.with_ymd_and_hms(2024, 1, 8, 0, 0, 0).unwrap(), 3_000.0, "ascii-art"),
    ];
    let scene = ProgressChart::default().build(&records, start);
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let bytes = render_to_png_bytes(&scene.root, &opts).expect("render");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (900, 450));
}

#[test]
fn scale_multiplies_output_size() {
    let skills = [SkillRecord::new("skill_go", 70.0), SkillRecord::new("skill_js", 35.0)];
    let scene = SkillsChart::default().build(&max_per_category(&skills));
    let opts = RenderOptions { scale: 0.5, draw_labels: false, ..RenderOptions::default() };
    let bytes = render_to_png_bytes(&scene.root, &opts).expect("render");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (450, 270));
}

#[test]
fn writes_file_and_parent_dirs() {
    let scene = ProgressChart::default().build(&[], Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    let out = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("smoke/empty_progress.png");
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    render_to_png(&scene.root, &opts, &out).expect("render to file");
    assert!(std::fs::metadata(&out).expect("stat").len() > 0);
}
