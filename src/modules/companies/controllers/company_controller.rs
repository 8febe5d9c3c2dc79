//! Company defaults controller
//!
//! Read-only: the defaults file is loaded at startup and never edited here.

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::companies::services::CompanyDefaultsRegistry;

/// List company ids with configured defaults
///
/// GET /companies
pub async fn list_companies(registry: web::Data<CompanyDefaultsRegistry>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "companies": registry.company_ids(),
    }))
}

/// Get the resolved invoice defaults of a company
///
/// GET /companies/{id}/defaults
pub async fn get_company_defaults(
    registry: web::Data<CompanyDefaultsRegistry>,
    company_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let defaults = registry.get(&company_id)?;
    Ok(HttpResponse::Ok().json(defaults))
}

/// Configure company routes
pub fn configure_company_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/companies")
            .route("", web::get().to(list_companies))
            .route("/{id}/defaults", web::get().to(get_company_defaults)),
    );
}
