// File: crates/dash-render-skia/tests/snapshot.rs
// Purpose: Golden PNG snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic progress chart to PNG bytes (labels off).
// - Always checks fixed pixels: the cleared background and the marker highlights.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use chrono::{TimeZone, Utc};
use dash_core::{ProgressChart, Record};
use dash_render_skia::{render_to_png_bytes, RenderOptions};

fn render_bytes() -> Vec<u8> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let records = vec![
        Record::new(Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap(), 4_000.0, "a"),
        Record::new(Utc.with_ymd_and_hms(2024, 1, 6, 0, 0, 0).unwrap(), 1_000.0, "b"),
        Record::new(Utc.with_ymd_and_hms(2024, 1, 9, 0, 0, 0).unwrap(), 6_000.0, "c"),
    ];
    let scene = ProgressChart::default().build(&records, start);
    // avoid text nondeterminism across platforms
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    render_to_png_bytes(&scene.root, &opts).expect("render")
}

fn rgba_at(img: &image::RgbaImage, x: u32, y: u32) -> [u8; 4] {
    img.get_pixel(x, y).0
}

#[test]
fn known_pixels_match_scene() {
    let img = image::load_from_memory(&render_bytes()).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (900, 450));
    // outside the plot panel only the background clear is painted
    assert_eq!(rgba_at(&img, 0, 0), [30, 30, 46, 255]);
    assert_eq!(rgba_at(&img, 899, 449), [30, 30, 46, 255]);
    // white highlight dots at the first (250, 272.7) and last (850, 50) markers
    assert_eq!(rgba_at(&img, 250, 272), [255, 255, 255, 255]);
    assert_eq!(rgba_at(&img, 849, 49), [255, 255, 255, 255]);
}

#[test]
fn golden_progress_chart() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("progress_chart.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
