mod gst;
mod line_item;
mod totals;

pub use gst::{ActiveRates, GstConfiguration, GstType};
pub use line_item::{LineItem, UnitPrice, MANUAL_PRICE_SENTINEL};
pub use totals::{ComputeTotalsRequest, InvoiceTotals, InvoiceTotalsResponse};
