// Invoices module

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{GstConfiguration, GstType, InvoiceTotals, LineItem};
pub use services::{compute_invoice_totals, update_item_total, InvoiceDraft, ManualOverrides};
