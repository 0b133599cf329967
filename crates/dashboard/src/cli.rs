// File: crates/dashboard/src/cli.rs
// Summary: Command-line surface (clap derive); flags override the config file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "dashboard")]
#[command(about = "Render a personal progress dashboard from the learning platform's GraphQL API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the TOML configuration file (default: ./dashboard.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Sign-in endpoint
    #[arg(long, global = true, env = "DASHBOARD_SIGNIN_ENDPOINT")]
    pub signin_endpoint: Option<String>,

    /// GraphQL endpoint
    #[arg(long, global = true, env = "DASHBOARD_GRAPHQL_ENDPOINT")]
    pub graphql_endpoint: Option<String>,

    /// File holding the session token
    #[arg(long, global = true, env = "DASHBOARD_TOKEN_FILE")]
    pub token_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Exchange credentials for a session token and store it
    Login {
        /// Username or email
        #[arg(short, long)]
        user: String,

        /// Password; read from stdin when omitted
        #[arg(long, env = "DASHBOARD_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Forget the stored session token
    Logout,

    /// Fetch data and write dashboard.html, progress.svg and skills.svg
    Render {
        /// Existing directory to write into
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Module whose event window and XP drive the progress chart
        #[arg(short, long)]
        module: Option<String>,

        /// Palette name (dark, light, solarized-dark, high-contrast-dark)
        #[arg(long)]
        palette: Option<String>,

        /// Container width in pixels (charts are capped at 900)
        #[arg(long)]
        width: Option<f64>,

        /// Load progress records from a CSV (createdAt,amount,name) instead of the API
        #[arg(long)]
        records_csv: Option<PathBuf>,

        /// Also rasterize both charts to PNG
        #[arg(long)]
        png: bool,

        /// Disable the bar entry animation
        #[arg(long)]
        no_animation: bool,
    },

    /// Print the effective configuration as TOML
    ShowConfig,
}
