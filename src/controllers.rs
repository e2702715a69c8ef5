use actix_web::web;

pub mod dashboard;
pub mod health;
pub mod status;

/// Register every dashboard route
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(dashboard::dashboard))
        .route("/api/status", web::get().to(status::api_status))
        .route("/health", web::get().to(health::health_check));
}
