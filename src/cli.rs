//! Command-line interface.

use clap::Parser;

use crate::server::AppConfig;

/// EliteShop demonstration chat server
#[derive(Debug, Parser)]
#[command(name = "eliteshop-chat", version, about)]
pub struct Cli {
    /// Override the configured bind host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the configured port
    #[arg(long)]
    pub port: Option<u16>,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}
