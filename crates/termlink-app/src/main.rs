use anyhow::Context;
use clap::Parser;
use termlink_client::EnvCredentialStore;
use termlink_config::Config;
use termlink_config::account::AccountConfig;
use termlink_provider::{ProviderResources, RepositoryProvider};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use self::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config = load_config(&cli)?;

    let cancel_token = CancellationToken::new();
    let ctrl_c_token = cancel_token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown requested");
            ctrl_c_token.cancel();
        }
    });

    let provider = RepositoryProvider::connect_with(
        &config,
        &EnvCredentialStore::new(),
        ProviderResources::default(),
        cancel_token,
    )
    .await
    .context("Failed to connect to the terminology repository")?;

    commands::run(&provider, &config, cli.command, cli.json).await
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::new(),
    };

    if let Some(path) = &cli.account {
        config.account = AccountConfig::from_descriptor(path)
            .with_context(|| format!("Failed to load account descriptor {}", path.display()))?;
    }

    Ok(config)
}
