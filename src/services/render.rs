//! HTML rendering of a status report

use askama::Template;
use chrono::{DateTime, Utc};

use crate::errors::{DashboardError, Result};
use crate::models::status::StatusReport;

/// One table row on the dashboard page
#[derive(Debug)]
pub struct DashboardRow<'a> {
    pub name: &'a str,
    pub class: &'static str,
    pub glyph: &'static str,
    pub label: String,
    pub uptime: &'a str,
    pub details: &'a str,
}

/// Dashboard page; values are HTML-escaped by the template engine
#[derive(Template, Debug)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate<'a> {
    /// Rows in configuration order
    pub rows: Vec<DashboardRow<'a>>,
    pub up: usize,
    pub total: usize,
    pub generated_at: String,
}

impl<'a> DashboardTemplate<'a> {
    pub fn new(report: &'a StatusReport, generated_at: DateTime<Utc>) -> Self {
        let rows = report
            .iter()
            .map(|(name, record)| DashboardRow {
                name,
                class: record.status.css_class(),
                glyph: record.status.glyph(),
                label: record.status.to_string(),
                uptime: &record.uptime,
                details: &record.details,
            })
            .collect();

        Self {
            rows,
            up: report.up_count(),
            total: report.len(),
            generated_at: generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        }
    }
}

/// Render the dashboard page for one aggregation cycle
pub fn render_dashboard(report: &StatusReport, generated_at: DateTime<Utc>) -> Result<String> {
    DashboardTemplate::new(report, generated_at)
        .render()
        .map_err(DashboardError::Render)
}
