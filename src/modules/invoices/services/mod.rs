pub mod invoice_draft;
pub mod item_total;
pub mod totals_calculator;

pub use invoice_draft::InvoiceDraft;
pub use item_total::{derive_total, update_item_total, ItemTotalUpdate, ManualOverrides};
pub use totals_calculator::{compute_invoice_totals, TotalsCalculator};
