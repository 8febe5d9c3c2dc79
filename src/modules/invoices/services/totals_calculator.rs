use rust_decimal::Decimal;

use crate::core::money;
use crate::modules::invoices::models::{GstConfiguration, InvoiceTotals, LineItem};

/// TotalsCalculator derives every invoice total from line items and GST settings
///
/// Pure and fail-soft: line totals that do not parse count as zero, and no
/// input makes it return an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct TotalsCalculator;

impl TotalsCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Compute the full set of totals
    ///
    /// total_gst = cgst + sgst + igst + fuel surcharge
    /// total_amount = total_before_gst + total_gst
    /// gross = total_amount rounded to whole rupees (half away from zero)
    /// rounding_off = gross - total_amount, rounded to paise
    pub fn compute(&self, items: &[LineItem], gst: &GstConfiguration) -> InvoiceTotals {
        let total_before_gst = self.subtotal(items);
        let rates = gst.active_rates();

        let cgst_amount = money::percent_of(total_before_gst, rates.cgst);
        let sgst_amount = money::percent_of(total_before_gst, rates.sgst);
        let igst_amount = money::percent_of(total_before_gst, rates.igst);
        let fuel_surcharge_amount = money::percent_of(total_before_gst, gst.fuel_surcharge_rate);

        let total_gst_amount = cgst_amount
            .saturating_add(sgst_amount)
            .saturating_add(igst_amount)
            .saturating_add(fuel_surcharge_amount);
        let total_amount = total_before_gst.saturating_add(total_gst_amount);

        let rounded = money::round_to_rupee(total_amount);
        let gross_amount = money::whole_rupees(rounded);
        let rounding_off = money::round_to_paise(rounded.saturating_sub(total_amount));

        tracing::debug!(
            items = items.len(),
            gst_type = %gst.gst_type,
            %total_before_gst,
            %total_gst_amount,
            gross_amount,
            "Computed invoice totals"
        );

        InvoiceTotals {
            total_before_gst,
            cgst_amount,
            sgst_amount,
            igst_amount,
            fuel_surcharge_amount,
            total_gst_amount,
            total_amount,
            gross_amount,
            rounding_off,
        }
    }

    /// Sum of line totals; unparseable totals contribute zero
    pub fn subtotal(&self, items: &[LineItem]) -> Decimal {
        items
            .iter()
            .map(LineItem::total_amount)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }
}

/// Compute invoice totals with the default calculator
pub fn compute_invoice_totals(items: &[LineItem], gst: &GstConfiguration) -> InvoiceTotals {
    TotalsCalculator::new().compute(items, gst)
}
