//! Service Status Dashboard Binary

use actix_web::{App, HttpServer, middleware, web};
use clap::Parser;
use status_dashboard::{AppState, Config, DashboardError, HealthAggregator, Result, controllers};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line overrides; environment variables are read by `Config` only
#[derive(Debug, Parser)]
#[command(version, about = "Aggregated health dashboard for the bot services")]
struct Cli {
    /// Address to bind the HTTP server to (overrides DASHBOARD_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides DASHBOARD_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Per-probe timeout in milliseconds (overrides PROBE_TIMEOUT_MS)
    #[arg(long)]
    probe_timeout_ms: Option<u64>,
}

impl Cli {
    fn apply(self, mut config: Config) -> Config {
        if let Some(host) = self.host {
            config.host = host;
        }

        if let Some(port) = self.port {
            config.port = port;
        }

        if let Some(ms) = self.probe_timeout_ms {
            config.probe_timeout = std::time::Duration::from_millis(ms);
        }

        config
    }
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    initialize_tracing();

    info!("Starting status dashboard v{}", env!("CARGO_PKG_VERSION"));

    let config = cli.apply(Config::from_env());

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    for service in &config.services {
        info!("Monitoring {} at {}", service.name, service.url);
    }

    let state = web::Data::new(AppState::new(HealthAggregator::from_config(&config)));

    info!("Server is live at http://{}:{}", config.host, config.port);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(controllers::configure)
    })
    .bind((config.host.as_str(), config.port))
    .map_err(|e| {
        error!("Failed to bind {}:{}: {}", config.host, config.port, e);
        DashboardError::Io(e)
    })?;

    server.run().await?;

    info!("Status dashboard shut down");
    Ok(())
}

/// Initialize structured logging
fn initialize_tracing() {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .json();

    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&log_level))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "status-dashboard",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--probe-timeout-ms",
            "750",
        ])
        .unwrap();

        let config = cli.apply(Config::default());

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.probe_timeout, Duration::from_millis(750));
    }

    #[test]
    fn test_no_flags_keep_environment_config() {
        let cli = Cli::try_parse_from(["status-dashboard"]).unwrap();
        let from_env = Config::from_lookup(|key| match key {
            "DASHBOARD_PORT" => Some("not-a-port".to_string()),
            "PROBE_TIMEOUT_MS" => Some("1500".to_string()),
            _ => None,
        });

        let config = cli.apply(from_env);

        assert_eq!(config.port, 8080);
        assert_eq!(config.probe_timeout, Duration::from_millis(1500));
    }

    #[test]
    fn test_bad_flag_is_rejected() {
        assert!(Cli::try_parse_from(["status-dashboard", "--port", "not-a-port"]).is_err());
    }
}
