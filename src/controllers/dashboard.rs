use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder, web};
use chrono::Utc;
use tracing::{error, info};

use crate::services::render::render_dashboard;
use crate::state::AppState;

// Human-readable status page, probed fresh on every request
pub async fn dashboard(data: web::Data<AppState>) -> impl Responder {
    info!("Request for status dashboard page");
    let report = data.aggregator.collect_statuses().await;

    match render_dashboard(&report, Utc::now()) {
        Ok(page) => HttpResponse::Ok().content_type(ContentType::html()).body(page),
        Err(e) => {
            error!("Failed to render dashboard: {}", e);
            HttpResponse::InternalServerError().json("Failed to render dashboard")
        }
    }
}
