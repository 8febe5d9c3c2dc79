// LineItem model as edited on the invoice form
//
// Quantity, unit price and total hold what the user typed. The unit price may
// be the "-" sentinel, in which case the total is entered by hand and never
// derived from quantity × unit price.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::{self, lenient};

/// Unit price value meaning "no price, total entered manually"
pub const MANUAL_PRICE_SENTINEL: &str = "-";

/// Represents a single line item on an invoice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Description of the goods or service
    #[serde(default)]
    pub description: String,

    /// HSN classification code, may be empty
    #[serde(default)]
    pub hsn_code: String,

    /// Quantity of items
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub quantity: u32,

    /// Price per unit as entered, or `"-"` for a manual total
    #[serde(default, deserialize_with = "lenient::text")]
    pub unit_price: String,

    /// Line total as entered or derived, normally with two decimal places
    #[serde(default, deserialize_with = "lenient::text")]
    pub total: String,
}

/// Interpretation of a unit price form value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitPrice {
    /// Empty or `"-"`: the total is supplied by the caller
    Manual,
    /// A price per unit; malformed input reads as zero
    Amount(Decimal),
}

impl UnitPrice {
    /// Only an empty string or the exact sentinel selects manual mode;
    /// `"0"` is an ordinary zero price.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == MANUAL_PRICE_SENTINEL {
            UnitPrice::Manual
        } else {
            UnitPrice::Amount(money::parse_lenient(raw))
        }
    }
}

impl LineItem {
    /// Create a priced line item with its total derived immediately
    pub fn new(
        description: impl Into<String>,
        hsn_code: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
    ) -> Self {
        let total = money::format_paise(Decimal::from(quantity) * unit_price);
        Self {
            description: description.into(),
            hsn_code: hsn_code.into(),
            quantity,
            unit_price: unit_price.to_string(),
            total,
        }
    }

    /// Create a line item without a unit price whose total is given directly
    pub fn manual(
        description: impl Into<String>,
        hsn_code: impl Into<String>,
        quantity: u32,
        total: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            hsn_code: hsn_code.into(),
            quantity,
            unit_price: MANUAL_PRICE_SENTINEL.to_string(),
            total: total.into(),
        }
    }

    pub fn unit_price(&self) -> UnitPrice {
        UnitPrice::parse(&self.unit_price)
    }

    pub fn is_manual(&self) -> bool {
        matches!(self.unit_price(), UnitPrice::Manual)
    }

    /// Line total as a decimal; unparseable totals count as zero
    pub fn total_amount(&self) -> Decimal {
        money::parse_lenient(&self.total)
    }
}
