//! Amount-in-words endpoint for the invoice form and PDF renderer

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::core::error::AppError;
use crate::modules::words::services::convert_amount_to_words;

#[derive(Debug, Deserialize)]
pub struct AmountInWordsRequest {
    pub amount: i64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountInWordsResponse {
    pub amount: i64,
    pub in_words: String,
}

/// Spell out a gross amount
///
/// POST /amount-in-words
pub async fn amount_in_words(
    body: web::Json<AmountInWordsRequest>,
) -> Result<HttpResponse, AppError> {
    let amount = body.into_inner().amount;
    let in_words = convert_amount_to_words(amount).inspect_err(|err| {
        tracing::warn!(amount, error = %err, "Rejected amount-in-words request");
    })?;

    Ok(HttpResponse::Ok().json(AmountInWordsResponse { amount, in_words }))
}

/// Configure amount-in-words routes
pub fn configure_words_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/amount-in-words", web::post().to(amount_in_words));
}
