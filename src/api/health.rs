use actix_web::{HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::models::MessageResponse;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Root",
    responses(
        (status = 200, description = "Greeting", body = MessageResponse)
    )
)]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse::new("Hello, events service is working!"))
}

/// Liveness check for load balancers and container orchestrators
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: "events-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
