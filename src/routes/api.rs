//! JSON API handlers.

use std::time::Duration;

use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

use crate::dto::api::ApplicationsQuery;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::memory::MemoryRepository;
use crate::services::{ServiceError, api as api_service};

#[get("/v1/applications")]
pub async fn list_applications(
    user: AuthenticatedUser,
    repo: web::Data<MemoryRepository>,
    server_config: web::Data<ServerConfig>,
    params: web::Query<ApplicationsQuery>,
) -> impl Responder {
    // Keeps loading states visible while everything is served from memory.
    if server_config.mock_latency_ms > 0 {
        actix_web::rt::time::sleep(Duration::from_millis(server_config.mock_latency_ms)).await;
    }

    match api_service::list_applications(repo.get_ref(), &user, params.into_inner()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(ServiceError::Unauthorized) => {
            HttpResponse::Unauthorized().json(json!({"error": "unauthorized"}))
        }
        Err(err) => {
            log::error!("Failed to list applications over the API: {err}");
            HttpResponse::InternalServerError().json(json!({"error": "internal"}))
        }
    }
}
