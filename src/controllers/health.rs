use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime: String,
    pub details: String,
}

// Same shape the polled bots answer with, so this dashboard can be polled too
pub async fn health_check(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".into(),
        uptime: format_uptime(data.started_at.elapsed()),
        details: format!(
            "status dashboard is running, {} services configured",
            data.aggregator.services().len()
        ),
    })
}

pub fn format_uptime(elapsed: Duration) -> String {
    let seconds = elapsed.as_secs();
    format!("{} min {} sec", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(Duration::from_secs(0)), "0 min 0 sec");
        assert_eq!(format_uptime(Duration::from_millis(125_900)), "2 min 5 sec");
        assert_eq!(format_uptime(Duration::from_secs(3600)), "60 min 0 sec");
    }
}
