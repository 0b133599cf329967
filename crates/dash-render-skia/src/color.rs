// File: crates/dash-render-skia/src/color.rs
// Summary: CSS color strings (hex, rgb(), rgba(), a few names) to Skia colors.

use skia_safe as skia;

/// Parse a CSS color. `none` and unknown values yield `None`.
pub fn parse_color(s: &str) -> Option<skia::Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(body) = s.strip_prefix("rgba(").or_else(|| s.strip_prefix("rgb(")) {
        return parse_rgb_fn(body.strip_suffix(')')?);
    }
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(skia::Color::from_argb(255, 0, 0, 0)),
        "white" => Some(skia::Color::from_argb(255, 255, 255, 255)),
        "transparent" => Some(skia::Color::from_argb(0, 0, 0, 0)),
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<skia::Color> {
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut c = hex.chars().map(|ch| channel(&format!("{ch}{ch}")));
            Some(skia::Color::from_argb(255, c.next()??, c.next()??, c.next()??))
        }
        6 => Some(skia::Color::from_argb(
            255,
            channel(hex.get(0..2)?)?,
            channel(hex.get(2..4)?)?,
            channel(hex.get(4..6)?)?,
        )),
        8 => Some(skia::Color::from_argb(
            channel(hex.get(6..8)?)?,
            channel(hex.get(0..2)?)?,
            channel(hex.get(2..4)?)?,
            channel(hex.get(4..6)?)?,
        )),
        _ => None,
    }
}

fn parse_rgb_fn(body: &str) -> Option<skia::Color> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let c = |s: &str| s.parse::<f32>().ok().map(|v| v.clamp(0.0, 255.0).round() as u8);
    let a = match parts.get(3) {
        Some(a) => (a.parse::<f32>().ok()?.clamp(0.0, 1.0) * 255.0).round() as u8,
        None => 255,
    };
    Some(skia::Color::from_argb(a, c(parts[0])?, c(parts[1])?, c(parts[2])?))
}

/// Scale a color's alpha by `opacity` (0..1).
pub fn with_opacity(color: skia::Color, opacity: f32) -> skia::Color {
    let a = (color.a() as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
    color.with_a(a)
}
