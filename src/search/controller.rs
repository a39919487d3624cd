// src/search/controller.rs
use super::service::{SearchError, SearchService};
use crate::models::SearchParams;
use actix_web::{HttpResponse, get, web};
use serde_json::json;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(search);
}

#[get("/search")]
pub async fn search(
    service: web::Data<SearchService>,
    params: web::Query<SearchParams>,
) -> Result<HttpResponse, actix_web::Error> {
    match service.search(&params).await {
        Ok(page) => Ok(HttpResponse::Ok().json(page)),
        Err(SearchError::Storage(e)) => {
            tracing::error!("Database error during search: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({"error": "Internal server error"})))
        }
        Err(e) => Ok(HttpResponse::BadRequest().json(json!({"error": e.to_string()}))),
    }
}
