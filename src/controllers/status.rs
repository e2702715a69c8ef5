use actix_web::{HttpResponse, Responder, web};
use tracing::info;

use crate::state::AppState;

// Machine-readable status of every configured service
pub async fn api_status(data: web::Data<AppState>) -> impl Responder {
    info!("Request for service statuses");
    let report = data.aggregator.collect_statuses().await;
    info!("Returning statuses for {} services", report.len());

    HttpResponse::Ok().json(report)
}
