//! Service Status Dashboard Library
//!
//! Polls the health endpoints of the bot services concurrently and serves
//! the combined result as an HTML page and a JSON document.

pub mod config;
pub mod controllers;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;

pub use config::Config;
pub use errors::{DashboardError, Result};
pub use models::status::{ServiceEndpoint, ServiceStatus, StatusRecord, StatusReport};
pub use services::aggregator::HealthAggregator;
pub use state::AppState;
