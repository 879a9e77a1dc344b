//! CLI entry point for the EliteShop chat server.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use eliteshop_chat::{cli, server};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eliteshop_chat=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = cli::Cli::parse();

    info!("Starting EliteShop chat server v{}", env!("CARGO_PKG_VERSION"));

    let mut config = server::load_config()?;
    cli.apply(&mut config);

    server::run(config).await
}
