// File: crates/dashboard/src/config.rs
// Summary: Dashboard configuration: TOML file with defaults, then command-line overrides.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dash_client::{DEFAULT_GRAPHQL_ENDPOINT, DEFAULT_SIGNIN_ENDPOINT};
use dash_core::TooltipOffsets;
use serde::{Deserialize, Serialize};

use crate::cli::{Cli, Commands};

pub const DEFAULT_CONFIG_FILE: &str = "dashboard.toml";
/// Narrowest container the charts are laid out for. Both chart frames keep a
/// non-empty plot area (`height > 2 * padding`) at this width.
const MIN_CONTAINER_WIDTH: f64 = 240.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub signin_endpoint: String,
    pub graphql_endpoint: String,
    pub token_file: PathBuf,
    pub output_dir: PathBuf,
    pub container_width: f64,
    pub module: String,
    pub palette: String,
    pub animate: bool,
    pub export_png: bool,
    pub tooltip: TooltipConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    pub dx: f64,
    pub dy: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        let d = TooltipOffsets::default();
        Self { dx: d.dx, dy: d.dy }
    }
}

impl From<TooltipConfig> for TooltipOffsets {
    fn from(c: TooltipConfig) -> Self { TooltipOffsets { dx: c.dx, dy: c.dy } }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            signin_endpoint: DEFAULT_SIGNIN_ENDPOINT.to_string(),
            graphql_endpoint: DEFAULT_GRAPHQL_ENDPOINT.to_string(),
            token_file: PathBuf::from(".dashboard/session.json"),
            output_dir: PathBuf::from("out"),
            container_width: 900.0,
            module: "Module".to_string(),
            palette: "dark".to_string(),
            animate: true,
            export_png: false,
            tooltip: TooltipConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Load `path`, or `dashboard.toml` in the working directory when present,
    /// or the defaults. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };
        let text = std::fs::read_to_string(&path).with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let mut cfg: Self = toml::from_str(text)?;
        cfg.container_width = cfg.container_width.max(MIN_CONTAINER_WIDTH);
        Ok(cfg)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Apply global flags and, for `render`, its per-run options.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(v) = &cli.signin_endpoint {
            self.signin_endpoint = v.clone();
        }
        if let Some(v) = &cli.graphql_endpoint {
            self.graphql_endpoint = v.clone();
        }
        if let Some(v) = &cli.token_file {
            self.token_file = v.clone();
        }
        if let Commands::Render { out_dir, module, palette, width, png, no_animation, .. } = &cli.command {
            if let Some(v) = out_dir {
                self.output_dir = v.clone();
            }
            if let Some(v) = module {
                self.module = v.clone();
            }
            if let Some(v) = palette {
                self.palette = v.clone();
            }
            if let Some(v) = width {
                self.container_width = v.max(MIN_CONTAINER_WIDTH);
            }
            self.export_png |= *png;
            if *no_animation {
                self.animate = false;
            }
        }
    }
}
