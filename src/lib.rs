//! GST Invoice Calculation Library
//!
//! Invoice totals with Indian GST (CGST/SGST or IGST) and fuel surcharge,
//! whole-rupee rounding, and amounts in words with lakh/crore grouping.

pub mod config;
pub mod core;
pub mod modules;

use actix_web::web;

// Re-export commonly used types
pub use modules::companies;
pub use modules::invoices;
pub use modules::words;

/// Register every HTTP route
///
/// Company routes need a `web::Data<CompanyDefaultsRegistry>` in app data.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(modules::health::controllers::configure)
        .configure(modules::invoices::controllers::configure_invoice_routes)
        .configure(modules::words::controllers::configure_words_routes)
        .configure(modules::companies::controllers::configure_company_routes);
}
