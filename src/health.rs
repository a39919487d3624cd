// src/health.rs
use crate::fapshi::FapshiConfig;
use actix_web::{HttpResponse, get, web};
use serde_json::json;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}

#[get("/health")]
pub async fn health(fapshi: web::Data<FapshiConfig>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "payment_environment": fapshi.environment(),
    }))
}
