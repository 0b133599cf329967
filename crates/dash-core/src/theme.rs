// File: crates/dash-core/src/theme.rs
// Summary: Dashboard palettes (CSS color strings) for chart rendering.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub name: &'static str,
    /// Page/card background; also the ring around data points.
    pub background: &'static str,
    /// Translucent plot panel behind the data.
    pub panel: &'static str,
    /// Axis lines, gridlines and axis labels.
    pub axis: &'static str,
    /// Primary accent: progress line, markers, bar gradient top.
    pub primary: &'static str,
    /// Secondary accent: bar gradient bottom.
    pub secondary: &'static str,
    /// Fill under the progress curve.
    pub area: &'static str,
    /// Inner highlight dot on markers and bar value labels.
    pub highlight: &'static str,
    /// Full-height track behind each bar.
    pub track: &'static str,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#1e1e2e",
            panel: "rgba(255, 255, 255, 0.02)",
            axis: "#a6adc8",
            primary: "#8b5cf6",
            secondary: "#06b6d4",
            area: "#10b981",
            highlight: "#ffffff",
            track: "rgba(255, 255, 255, 0.01)",
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: "#fafafc",
            panel: "rgba(0, 0, 0, 0.02)",
            axis: "#3c3c46",
            primary: "#2078c8",
            secondary: "#14a05a",
            area: "#2078c8",
            highlight: "#ffffff",
            track: "rgba(0, 0, 0, 0.03)",
        }
    }

    pub fn solarized_dark() -> Self {
        // Base colors from Solarized dark palette
        Self {
            name: "solarized-dark",
            background: "#002b36", // base03
            panel: "rgba(7, 54, 66, 0.5)", // base02
            axis: "#93a1a1",       // base1
            primary: "#268bd2",    // blue
            secondary: "#2aa198",  // cyan
            area: "#859900",       // green
            highlight: "#eee8d5",  // base2
            track: "rgba(147, 161, 161, 0.05)",
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: "#000000",
            panel: "rgba(255, 255, 255, 0.04)",
            axis: "#ffffff",
            primary: "#00ffff",
            secondary: "#00aaff",
            area: "#00ff00",
            highlight: "#ffffff",
            track: "rgba(255, 255, 255, 0.06)",
        }
    }
}

impl Default for Palette {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in palette presets.
pub fn presets() -> Vec<Palette> {
    vec![
        Palette::dark(),
        Palette::light(),
        Palette::solarized_dark(),
        Palette::high_contrast_dark(),
    ]
}

/// Find a palette by its `name`, falling back to dark.
pub fn find(name: &str) -> Palette {
    for p in presets() { if p.name.eq_ignore_ascii_case(name) { return p; } }
    Palette::dark()
}
