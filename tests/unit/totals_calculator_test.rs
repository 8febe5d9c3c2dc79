// Property-based tests for invoice totals
//
// Properties tested:
// 1. total_before_gst is the sum of parseable line totals, garbage counts as 0
// 2. only the tax regime selected by the GST type produces tax
// 3. CGST and SGST amounts are equal when the rates are mirrored
// 4. gross_amount and rounding_off agree with total_amount

use gst_invoice::invoices::{compute_invoice_totals, GstConfiguration, GstType, LineItem};
use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

fn item_with_total(total: impl Into<String>) -> LineItem {
    LineItem::manual("Item", "", 1, total)
}

fn paise_to_text(paise: u64) -> String {
    format!("{}.{:02}", paise / 100, paise % 100)
}

fn gst_type_strategy() -> impl Strategy<Value = GstType> {
    prop_oneof![Just(GstType::Cgst), Just(GstType::Igst), Just(GstType::None)]
}

fn garbage_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("-".to_string()),
        Just("abc".to_string()),
        Just("12,50".to_string()),
        "[a-z]{1,6}",
    ]
}

proptest! {
    #[test]
    fn test_subtotal_sums_parseable_totals(
        valid in prop::collection::vec(0u64..10_000_000u64, 0..12),
        garbage in prop::collection::vec(garbage_strategy(), 0..5),
    ) {
        let mut items: Vec<LineItem> = valid.iter().map(|&p| item_with_total(paise_to_text(p))).collect();
        items.extend(garbage.into_iter().map(item_with_total));

        let totals = compute_invoice_totals(&items, &GstConfiguration::untaxed());
        let expected = Decimal::new(valid.iter().sum::<u64>() as i64, 2);

        prop_assert_eq!(totals.total_before_gst, expected);
    }

    #[test]
    fn test_tax_exclusivity(
        paise in 0u64..100_000_000u64,
        gst_type in gst_type_strategy(),
        cgst in 0u32..=2800u32,
        igst in 0u32..=2800u32,
    ) {
        let gst = GstConfiguration {
            gst_type,
            cgst_rate: Decimal::new(cgst as i64, 2),
            sgst_rate: Decimal::new(cgst as i64, 2),
            igst_rate: Decimal::new(igst as i64, 2),
            fuel_surcharge_rate: Decimal::ZERO,
        };
        let totals = compute_invoice_totals(&[item_with_total(paise_to_text(paise))], &gst);

        match gst_type {
            GstType::Cgst => prop_assert_eq!(totals.igst_amount, Decimal::ZERO),
            GstType::Igst => {
                prop_assert_eq!(totals.cgst_amount, Decimal::ZERO);
                prop_assert_eq!(totals.sgst_amount, Decimal::ZERO);
            }
            GstType::None => {
                prop_assert_eq!(totals.cgst_amount, Decimal::ZERO);
                prop_assert_eq!(totals.sgst_amount, Decimal::ZERO);
                prop_assert_eq!(totals.igst_amount, Decimal::ZERO);
            }
        }
    }

    #[test]
    fn test_cgst_sgst_symmetry(
        paise in 0u64..100_000_000u64,
        rate_bps in 0u32..=1400u32,
    ) {
        let rate = Decimal::new(rate_bps as i64, 2);
        let totals = compute_invoice_totals(
            &[item_with_total(paise_to_text(paise))],
            &GstConfiguration::cgst(rate),
        );

        let expected = totals.total_before_gst * rate / Decimal::ONE_HUNDRED;
        prop_assert_eq!(totals.cgst_amount, expected);
        prop_assert_eq!(totals.sgst_amount, expected);
        prop_assert_eq!(totals.total_gst_amount, expected * Decimal::TWO);
    }

    #[test]
    fn test_rounding_consistency(
        paise in prop::collection::vec(0u64..10_000_000u64, 1..6),
        gst_type in gst_type_strategy(),
        rate_bps in 0u32..=2800u32,
        fuel_bps in 0u32..=2000u32,
    ) {
        let items: Vec<LineItem> = paise.iter().map(|&p| item_with_total(paise_to_text(p))).collect();
        let rate = Decimal::new(rate_bps as i64, 2);
        let gst = GstConfiguration {
            gst_type,
            cgst_rate: rate,
            sgst_rate: rate,
            igst_rate: rate,
            fuel_surcharge_rate: Decimal::new(fuel_bps as i64, 2),
        };

        let totals = compute_invoice_totals(&items, &gst);

        let expected_gross = totals
            .total_amount
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        prop_assert_eq!(Decimal::from(totals.gross_amount), expected_gross);

        let expected_rounding = (expected_gross - totals.total_amount)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        prop_assert_eq!(totals.rounding_off, expected_rounding);
        prop_assert!(totals.rounding_off.abs() <= dec!(0.5));

        prop_assert_eq!(totals.total_amount, totals.total_before_gst + totals.total_gst_amount);
        prop_assert_eq!(
            totals.total_gst_amount,
            totals.cgst_amount + totals.sgst_amount + totals.igst_amount + totals.fuel_surcharge_amount
        );
    }
}

#[test]
fn test_rounding_up_and_down() {
    let up = compute_invoice_totals(&[item_with_total("100.60")], &GstConfiguration::untaxed());
    assert_eq!(up.gross_amount, 101);
    assert_eq!(up.rounding_off, dec!(0.40));

    let down = compute_invoice_totals(&[item_with_total("100.40")], &GstConfiguration::untaxed());
    assert_eq!(down.gross_amount, 100);
    assert_eq!(down.rounding_off, dec!(-0.40));
}

#[test]
fn test_half_rupee_rounds_away_from_zero() {
    let totals = compute_invoice_totals(&[item_with_total("100.50")], &GstConfiguration::untaxed());
    assert_eq!(totals.gross_amount, 101);
    assert_eq!(totals.rounding_off, dec!(0.50));
}

#[test]
fn test_cgst_invoice_end_to_end() {
    let items = vec![item_with_total("1000.00"), item_with_total("500.00")];
    let gst = GstConfiguration::cgst(dec!(9));

    let totals = compute_invoice_totals(&items, &gst);

    assert_eq!(totals.total_before_gst, dec!(1500.00));
    assert_eq!(totals.cgst_amount, dec!(135.00));
    assert_eq!(totals.sgst_amount, dec!(135.00));
    assert_eq!(totals.igst_amount, Decimal::ZERO);
    assert_eq!(totals.total_gst_amount, dec!(270.00));
    assert_eq!(totals.total_amount, dec!(1770.00));
    assert_eq!(totals.gross_amount, 1770);
    assert_eq!(totals.rounding_off, dec!(0.00));
    assert_eq!(
        gst_invoice::words::convert_amount_to_words(totals.gross_amount).unwrap(),
        "One Thousand Seven Hundred Seventy Rupees Only"
    );
}

#[test]
fn test_igst_invoice_with_rounding_end_to_end() {
    let totals = compute_invoice_totals(&[item_with_total("333.33")], &GstConfiguration::igst(dec!(18)));

    assert_eq!(totals.total_before_gst, dec!(333.33));
    assert_eq!(totals.igst_amount, dec!(59.9994));
    assert_eq!(totals.cgst_amount, Decimal::ZERO);
    assert_eq!(totals.total_amount, dec!(393.3294));
    assert_eq!(totals.gross_amount, 393);
    // -0.3294 kept to paise
    assert_eq!(totals.rounding_off, dec!(-0.33));
}

#[test]
fn test_fuel_surcharge_is_part_of_total_gst() {
    let gst = GstConfiguration::igst(dec!(18)).with_fuel_surcharge_rate(dec!(5));

    let totals = compute_invoice_totals(&[item_with_total("1000")], &gst);

    assert_eq!(totals.fuel_surcharge_amount, dec!(50));
    assert_eq!(totals.total_gst_amount, dec!(230));
    assert_eq!(totals.gross_amount, 1230);
}
