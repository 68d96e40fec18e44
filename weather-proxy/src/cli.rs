use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use weather_core::{ProxyConfig, provider_from_config};
use weather_proxy::{AppState, ServerConfig, start_server};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-proxy", version, about = "Weather proxy API")]
pub struct Cli {
    /// Address to bind to.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 8000)]
    pub port: u16,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = ProxyConfig::from_env().context("Failed to load proxy configuration")?;
        info!(base_url = %config.base_url, timeout = ?config.timeout, "configuration loaded");

        let provider =
            provider_from_config(&config).context("Failed to construct weather provider")?;
        let state = Arc::new(AppState::new(provider));

        let server = ServerConfig { host: self.host, port: self.port };
        start_server(&server, state).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_server_config() {
        let cli = Cli::parse_from(["weather-proxy"]);
        let defaults = ServerConfig::default();

        assert_eq!(cli.host, defaults.host);
        assert_eq!(cli.port, defaults.port);
    }

    #[test]
    fn host_and_port_flags() {
        let cli = Cli::parse_from(["weather-proxy", "--host", "0.0.0.0", "--port", "9000"]);

        assert_eq!(cli.host, "0.0.0.0");
        assert_eq!(cli.port, 9000);
    }
}
