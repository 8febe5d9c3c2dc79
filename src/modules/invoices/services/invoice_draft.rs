use rust_decimal::Decimal;

use crate::core::error::{AppError, Result};
use crate::modules::companies::models::CompanyDefaults;
use crate::modules::invoices::models::{GstConfiguration, GstType, InvoiceTotals, LineItem};
use crate::modules::invoices::services::item_total::{
    update_item_total, ItemTotalUpdate, ManualOverrides,
};
use crate::modules::invoices::services::totals_calculator::TotalsCalculator;
use crate::modules::words::services::convert_amount_to_words;

/// Invoice being edited: line items, GST settings and the derived totals
///
/// Every mutating call recomputes the totals and the amount in words from
/// scratch, so the values read back always reflect the last edit.
#[derive(Debug, Clone)]
pub struct InvoiceDraft {
    items: Vec<LineItem>,
    gst: GstConfiguration,
    manual: ManualOverrides,
    totals: InvoiceTotals,
    in_words: String,
    calculator: TotalsCalculator,
}

impl InvoiceDraft {
    pub fn new(gst: GstConfiguration) -> Self {
        let mut draft = Self {
            items: Vec::new(),
            gst,
            manual: ManualOverrides::new(),
            totals: InvoiceTotals::default(),
            in_words: String::new(),
            calculator: TotalsCalculator::new(),
        };
        draft.recompute();
        draft
    }

    /// Start a draft from a company's default GST settings
    pub fn from_defaults(defaults: &CompanyDefaults) -> Self {
        tracing::debug!(company_id = %defaults.company_id, "Drafting invoice from company defaults");
        Self::new(defaults.gst.clone())
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn gst(&self) -> &GstConfiguration {
        &self.gst
    }

    pub fn totals(&self) -> &InvoiceTotals {
        &self.totals
    }

    /// Gross amount in words; empty if the gross amount cannot be written
    pub fn in_words(&self) -> &str {
        &self.in_words
    }

    pub fn is_manual(&self, index: usize) -> bool {
        self.manual.contains(index)
    }

    /// Append a line item, returning its index
    ///
    /// Items without a unit price start out manual.
    pub fn add_item(&mut self, item: LineItem) -> usize {
        let index = self.items.len();
        if item.is_manual() {
            self.manual.insert(index);
        }
        self.items.push(item);
        self.recompute();
        index
    }

    pub fn remove_item(&mut self, index: usize) -> Result<LineItem> {
        self.check_index(index)?;
        let removed = self.items.remove(index);
        self.manual.shift_after_removal(index);
        self.recompute();
        Ok(removed)
    }

    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> Result<ItemTotalUpdate> {
        let update =
            update_item_total(&mut self.items, index, Some(quantity), None, &mut self.manual)?;
        self.recompute();
        Ok(update)
    }

    pub fn set_unit_price(&mut self, index: usize, unit_price: &str) -> Result<ItemTotalUpdate> {
        let update =
            update_item_total(&mut self.items, index, None, Some(unit_price), &mut self.manual)?;
        self.recompute();
        Ok(update)
    }

    /// Type a line total directly
    ///
    /// Kept until the next quantity or price edit of a priced item re-derives it.
    pub fn set_total(&mut self, index: usize, total: impl Into<String>) -> Result<()> {
        self.check_index(index)?;
        self.items[index].total = total.into();
        self.recompute();
        Ok(())
    }

    pub fn set_gst_type(&mut self, gst_type: GstType) {
        self.gst.gst_type = gst_type;
        self.recompute();
    }

    /// Set the CGST rate; SGST is kept equal
    pub fn set_cgst_rate(&mut self, rate: Decimal) {
        self.gst = self.gst.clone().with_cgst_rate(rate);
        self.recompute();
    }

    /// Set the SGST rate; CGST is kept equal
    pub fn set_sgst_rate(&mut self, rate: Decimal) {
        self.gst = self.gst.clone().with_sgst_rate(rate);
        self.recompute();
    }

    pub fn set_igst_rate(&mut self, rate: Decimal) {
        self.gst.igst_rate = rate;
        self.recompute();
    }

    pub fn set_fuel_surcharge_rate(&mut self, rate: Decimal) {
        self.gst.fuel_surcharge_rate = rate;
        self.recompute();
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.items.len() {
            return Err(AppError::validation(format!(
                "Line item index {} out of range for {} items",
                index,
                self.items.len()
            )));
        }
        Ok(())
    }

    fn recompute(&mut self) {
        self.totals = self.calculator.compute(&self.items, &self.gst);
        self.in_words = match convert_amount_to_words(self.totals.gross_amount) {
            Ok(words) => words,
            Err(err) => {
                tracing::warn!(
                    gross_amount = self.totals.gross_amount,
                    error = %err,
                    "Gross amount cannot be written in words"
                );
                String::new()
            }
        };
    }
}
