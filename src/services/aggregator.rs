//! Concurrent health probing of the configured dependencies

use futures::future::join_all;
use reqwest::{Client, StatusCode, redirect};
use serde_json::Value;
use std::time::{Duration, Instant};
use tokio::time::timeout;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::errors::{DashboardError, Result};
use crate::models::status::{ServiceEndpoint, StatusRecord, StatusReport};

/// Polls a fixed table of health endpoints and folds the answers into a report
#[derive(Debug, Clone)]
pub struct HealthAggregator {
    services: Vec<ServiceEndpoint>,
    probe_timeout: Duration,
}

impl HealthAggregator {
    pub fn new(services: Vec<ServiceEndpoint>, probe_timeout: Duration) -> Self {
        Self {
            services,
            probe_timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.services.clone(), config.probe_timeout)
    }

    pub fn services(&self) -> &[ServiceEndpoint] {
        &self.services
    }

    /// Probe every endpoint concurrently and wait for all of them.
    ///
    /// Never fails: each probe failure becomes a `DOWN` record, so the
    /// report always holds exactly one entry per configured endpoint.
    #[instrument(skip(self), fields(cycle_id = %Uuid::new_v4()))]
    pub async fn collect_statuses(&self) -> StatusReport {
        let started = Instant::now();

        // A fresh client per cycle: its connection pool is dropped with it.
        let client = match build_client() {
            Ok(client) => client,
            Err(e) => {
                error!("Failed to build HTTP client: {}", e);
                let details = e.to_string();
                return self
                    .services
                    .iter()
                    .map(|service| (service.name.clone(), StatusRecord::down(details.clone())))
                    .collect();
            }
        };

        let probes = self
            .services
            .iter()
            .map(|service| probe(&client, service, self.probe_timeout));
        let records = join_all(probes).await;

        let report: StatusReport = self
            .services
            .iter()
            .map(|service| service.name.clone())
            .zip(records)
            .collect();

        info!(
            "Collected {} statuses ({} up, {} down) in {}ms",
            report.len(),
            report.up_count(),
            report.len() - report.up_count(),
            started.elapsed().as_millis()
        );

        report
    }
}

fn build_client() -> Result<Client> {
    Client::builder()
        .redirect(redirect::Policy::none())
        .user_agent(format!("status-dashboard/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(DashboardError::Http)
}

/// Run one probe, converting every failure into a `DOWN` record
async fn probe(client: &Client, service: &ServiceEndpoint, limit: Duration) -> StatusRecord {
    let outcome = timeout(limit, fetch_status(client, &service.url))
        .await
        .unwrap_or(Err(DashboardError::Timeout(limit)));

    match outcome {
        Ok(record) => {
            debug!("Service {} is up", service.name);
            record
        }
        Err(e) => {
            warn!("Service {} is down: {}", service.name, e);
            StatusRecord::down(e.to_string())
        }
    }
}

async fn fetch_status(client: &Client, url: &str) -> Result<StatusRecord> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(DashboardError::UnexpectedStatus(status.as_u16()));
    }

    let body = response.text().await?;
    Ok(record_from_body(body))
}

/// Build an `UP` record from a 200 body.
///
/// JSON objects contribute their `uptime` and `details` fields; anything
/// else is reported verbatim as details.
pub fn record_from_body(body: String) -> StatusRecord {
    let fields = match serde_json::from_str::<Value>(&body) {
        Ok(Value::Object(fields)) => fields,
        _ => return StatusRecord::up(None, body),
    };

    let uptime = fields.get("uptime").and_then(field_text);
    let details = fields.get("details").and_then(field_text).unwrap_or(body);

    StatusRecord::up(uptime, details)
}

fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
