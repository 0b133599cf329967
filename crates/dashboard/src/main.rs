// File: crates/dashboard/src/main.rs
// Summary: Dashboard CLI: login/logout against the platform, render the dashboard, show the effective config.

mod cli;
mod config;
mod csv_source;
mod page;
mod render;

use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use dash_client::{Credentials, FileTokenStore, HttpTransport, SigninClient, TokenStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use config::DashboardConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut config = DashboardConfig::load(cli.config.as_deref())?;
    config.apply_cli(&cli);

    match &cli.command {
        Commands::Login { user, password } => {
            let password = match password {
                Some(p) => p.clone(),
                None => prompt_password()?,
            };
            let store = FileTokenStore::new(&config.token_file);
            let client = SigninClient::new(&config.signin_endpoint, Arc::new(HttpTransport::new()));
            client
                .login_and_store(&Credentials::new(user, password), &store)
                .await
                .context("login failed")?;
            println!("Signed in; session stored in {}", store.path().display());
        }
        Commands::Logout => {
            FileTokenStore::new(&config.token_file).clear().context("clearing session token")?;
            info!("signed out");
            println!("Signed out");
        }
        Commands::Render { records_csv, .. } => {
            render::run(&config, records_csv.as_deref()).await?;
        }
        Commands::ShowConfig => {
            print!("{}", config.to_toml()?);
        }
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("dashboard=info,dash_client=info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// Read one line from stdin after a prompt on stderr.
fn prompt_password() -> Result<String> {
    eprint!("Password: ");
    std::io::stderr().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line).context("reading password from stdin")?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        anyhow::bail!("empty password");
    }
    Ok(password)
}
