//! Invoice calculation endpoints
//!
//! Stateless: the browser form posts its current items and GST settings and
//! writes the returned values back into its own state.

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::invoices::models::{
    ComputeTotalsRequest, InvoiceTotalsResponse, LineItem,
};
use crate::modules::invoices::services::item_total::{
    update_item_total, ItemTotalRequest, ItemTotalResponse, ManualOverrides,
};
use crate::modules::invoices::services::TotalsCalculator;
use crate::modules::words::services::convert_amount_to_words;

/// Compute totals and the gross amount in words
///
/// A gross amount that cannot be spelled (negative credit notes) still
/// returns the totals, with empty words.
///
/// POST /invoices/totals
pub async fn compute_totals(body: web::Json<ComputeTotalsRequest>) -> HttpResponse {
    let request = body.into_inner();
    let totals = TotalsCalculator::new().compute(&request.items, &request.gst);
    let in_words = match convert_amount_to_words(totals.gross_amount) {
        Ok(words) => words,
        Err(err) => {
            tracing::warn!(
                gross_amount = totals.gross_amount,
                error = %err,
                "Invoice gross amount cannot be written in words"
            );
            String::new()
        }
    };

    HttpResponse::Ok().json(InvoiceTotalsResponse { totals, in_words })
}

/// Derive a single line total from quantity and unit price
///
/// POST /invoices/line-items/total
pub async fn compute_item_total(
    body: web::Json<ItemTotalRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    let mut items = [LineItem {
        quantity: request.quantity,
        unit_price: request.unit_price,
        ..LineItem::default()
    }];
    let mut manual = ManualOverrides::new();

    let update = update_item_total(&mut items, 0, None, None, &mut manual)?;

    Ok(HttpResponse::Ok().json(ItemTotalResponse::from(update)))
}

/// Configure invoice routes
pub fn configure_invoice_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/invoices")
            .route("/totals", web::post().to(compute_totals))
            .route("/line-items/total", web::post().to(compute_item_total)),
    );
}
