use serde::{Deserialize, Serialize};

use crate::modules::invoices::models::GstConfiguration;

/// Invoice defaults for one issuing company
///
/// Resolved before an invoice is drafted; the calculator only sees the
/// `gst` configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDefaults {
    pub company_id: String,
    pub name: String,
    #[serde(default)]
    pub gst: GstConfiguration,
    /// Declaration printed at the foot of the invoice
    #[serde(default)]
    pub declaration: String,
    #[serde(default)]
    pub terms: Vec<String>,
}
