use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::companies::services::CompanyDefaultsRegistry;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub application: String,
    pub company_defaults: String,
}

/// GET /health - Liveness probe
///
/// Reports how many company defaults are loaded; an empty registry is not
/// a failure since totals and words work without it.
pub async fn health_check(registry: Option<web::Data<CompanyDefaultsRegistry>>) -> impl Responder {
    let company_defaults = match registry {
        Some(registry) if !registry.is_empty() => format!("loaded ({})", registry.len()),
        _ => "not_configured".to_string(),
    };

    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        checks: HealthChecks {
            application: "healthy".to_string(),
            company_defaults,
        },
    };

    HttpResponse::Ok().json(response)
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
