// Property-based tests for per-item total derivation
//
// Properties tested:
// 1. priced items get quantity × unit_price with exactly two decimal places
// 2. the "-" sentinel and empty price leave the total untouched, on every call
// 3. zero quantity or a "0" price is not manual

use gst_invoice::invoices::services::{derive_total, ItemTotalUpdate};
use gst_invoice::invoices::{update_item_total, LineItem, ManualOverrides};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn price_text(paise: u64) -> String {
    format!("{}.{:02}", paise / 100, paise % 100)
}

proptest! {
    #[test]
    fn test_derived_total_is_quantity_times_price(
        quantity in 0u32..10_000u32,
        price_paise in 0u64..10_000_000u64,
    ) {
        let mut items = vec![LineItem::default()];
        let mut manual = ManualOverrides::new();

        let update = update_item_total(
            &mut items,
            0,
            Some(quantity),
            Some(price_text(price_paise).as_str()),
            &mut manual,
        ).unwrap();

        let expected = Decimal::new((quantity as u64 * price_paise) as i64, 2);
        let total = items[0].total.clone();
        prop_assert_eq!(update, ItemTotalUpdate::Derived { total: total.clone() });
        prop_assert_eq!(total.parse::<Decimal>().unwrap(), expected);

        let (_, fraction) = total.split_once('.').unwrap();
        prop_assert_eq!(fraction.len(), 2);
        prop_assert!(manual.is_empty());
    }

    #[test]
    fn test_manual_override_is_idempotent(
        total in "[0-9]{1,6}\\.[0-9]{2}",
        quantities in prop::collection::vec(0u32..1000u32, 1..8),
    ) {
        let mut items = vec![LineItem::manual("Handling", "", 1, total.clone())];
        let mut manual = ManualOverrides::new();

        update_item_total(&mut items, 0, None, Some("-"), &mut manual).unwrap();
        for quantity in quantities {
            let update = update_item_total(&mut items, 0, Some(quantity), None, &mut manual).unwrap();
            prop_assert_eq!(update, ItemTotalUpdate::Manual);
            prop_assert_eq!(&items[0].total, &total);
            prop_assert!(manual.contains(0));
        }
    }
}

#[test]
fn test_empty_price_is_manual() {
    let mut items = vec![LineItem::manual("Packing", "", 2, "75.00")];
    let mut manual = ManualOverrides::new();

    let update = update_item_total(&mut items, 0, Some(5), Some(""), &mut manual).unwrap();

    assert_eq!(update, ItemTotalUpdate::Manual);
    assert_eq!(items[0].total, "75.00");
    assert_eq!(items[0].quantity, 5);
}

#[test]
fn test_zero_price_and_zero_quantity_are_not_manual() {
    let mut items = vec![LineItem::default(), LineItem::default()];
    let mut manual = ManualOverrides::new();

    let zero_price = update_item_total(&mut items, 0, Some(3), Some("0"), &mut manual).unwrap();
    let zero_quantity = update_item_total(&mut items, 1, Some(0), Some("250"), &mut manual).unwrap();

    assert_eq!(zero_price, ItemTotalUpdate::Derived { total: "0.00".to_string() });
    assert_eq!(zero_quantity, ItemTotalUpdate::Derived { total: "0.00".to_string() });
    assert!(manual.is_empty());
}

#[test]
fn test_malformed_price_derives_zero() {
    let mut items = vec![LineItem::default()];
    let mut manual = ManualOverrides::new();

    let update = update_item_total(&mut items, 0, Some(2), Some("12abc"), &mut manual).unwrap();

    assert_eq!(update, ItemTotalUpdate::Derived { total: "0.00".to_string() });
}

#[test]
fn test_derive_total_rounds_to_paise() {
    assert_eq!(derive_total(3, "0.335".parse().unwrap()), "1.01");
    assert_eq!(derive_total(1, Decimal::ONE_HUNDRED), "100.00");
}
