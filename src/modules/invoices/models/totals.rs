use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{GstConfiguration, LineItem};

/// Derived invoice totals, rebuilt from scratch on every computation
///
/// Tax and surcharge amounts are exact (unrounded); `gross_amount` is the
/// whole-rupee total and `rounding_off` the signed adjustment to reach it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    #[serde(rename = "totalBeforeGST")]
    pub total_before_gst: Decimal,
    pub cgst_amount: Decimal,
    pub sgst_amount: Decimal,
    pub igst_amount: Decimal,
    pub fuel_surcharge_amount: Decimal,
    /// Active tax amounts plus the fuel surcharge
    #[serde(rename = "totalGSTAmount")]
    pub total_gst_amount: Decimal,
    pub total_amount: Decimal,
    pub gross_amount: i64,
    pub rounding_off: Decimal,
}

/// Request body for `POST /invoices/totals`
#[derive(Debug, Clone, Deserialize)]
pub struct ComputeTotalsRequest {
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub gst: GstConfiguration,
}

/// Totals together with the gross amount spelled out
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotalsResponse {
    pub totals: InvoiceTotals,
    pub in_words: String,
}
