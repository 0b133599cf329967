// File: crates/dash-render-skia/src/path.rs
// Summary: Minimal SVG path-data reader for the absolute M/L/Z commands the chart builders emit.

use anyhow::{anyhow, bail, Result};
use skia_safe as skia;

/// Convert path data such as `M 50 400 L 450 225 L 850 50 Z` into a Skia path.
pub fn parse_path_data(d: &str) -> Result<skia::Path> {
    let mut path = skia::Path::new();
    let mut tokens = d.split(|c: char| c.is_whitespace() || c == ',').filter(|t| !t.is_empty());

    while let Some(cmd) = tokens.next() {
        match cmd {
            "M" => {
                let x = coord(&mut tokens)?;
                let y = coord(&mut tokens)?;
                path.move_to((x, y));
            }
            "L" => {
                let x = coord(&mut tokens)?;
                let y = coord(&mut tokens)?;
                path.line_to((x, y));
            }
            "Z" | "z" => {
                path.close();
            }
            other => bail!("unsupported path command `{other}`"),
        }
    }
    Ok(path)
}

fn coord<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<f32> {
    let t = tokens.next().ok_or_else(|| anyhow!("path data ends mid-command"))?;
    t.parse::<f32>().map_err(|_| anyhow!("bad coordinate `{t}` in path data"))
}
