use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::error::AppError;
use crate::core::money::{self, lenient};
use crate::modules::invoices::models::{LineItem, UnitPrice};

/// Indices of line items whose total is entered by hand
///
/// Owned by whoever holds the form state; `update_item_total` only adds and
/// removes indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualOverrides {
    indices: BTreeSet<usize>,
}

impl ManualOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn insert(&mut self, index: usize) -> bool {
        self.indices.insert(index)
    }

    pub fn remove(&mut self, index: usize) -> bool {
        self.indices.remove(&index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Forget `index` and move every later index down by one, following the
    /// removal of that row
    pub fn shift_after_removal(&mut self, index: usize) {
        self.indices = self
            .indices
            .iter()
            .filter(|&&i| i != index)
            .map(|&i| if i > index { i - 1 } else { i })
            .collect();
    }
}

/// Outcome of re-deriving one line total
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemTotalUpdate {
    /// No usable unit price; the total was left as entered
    Manual,
    /// Total recomputed as quantity × unit price
    Derived { total: String },
}

/// Re-derive the total of `items[index]` after a quantity or price edit
///
/// `quantity` and `unit_price` replace the stored values when given. A unit
/// price that is empty or exactly `"-"` marks the row manual and leaves its
/// total untouched; any other price derives `quantity × price` with two
/// decimal places and clears the manual mark.
pub fn update_item_total(
    items: &mut [LineItem],
    index: usize,
    quantity: Option<u32>,
    unit_price: Option<&str>,
    manual: &mut ManualOverrides,
) -> Result<ItemTotalUpdate, AppError> {
    let count = items.len();
    let item = items.get_mut(index).ok_or_else(|| {
        AppError::validation(format!(
            "Line item index {} out of range for {} items",
            index, count
        ))
    })?;

    if let Some(quantity) = quantity {
        item.quantity = quantity;
    }
    if let Some(unit_price) = unit_price {
        item.unit_price = unit_price.to_string();
    }

    match item.unit_price() {
        UnitPrice::Manual => {
            manual.insert(index);
            tracing::debug!(index, "Line item marked as manual total");
            Ok(ItemTotalUpdate::Manual)
        }
        UnitPrice::Amount(price) => {
            manual.remove(index);
            let total = derive_total(item.quantity, price);
            item.total = total.clone();
            Ok(ItemTotalUpdate::Derived { total })
        }
    }
}

/// `quantity × unit_price` formatted with two decimal places
pub fn derive_total(quantity: u32, unit_price: Decimal) -> String {
    money::format_paise(Decimal::from(quantity).saturating_mul(unit_price))
}

/// Request body for `POST /invoices/line-items/total`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemTotalRequest {
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub quantity: u32,
    #[serde(default, deserialize_with = "lenient::text")]
    pub unit_price: String,
}

/// Response body for `POST /invoices/line-items/total`
///
/// `total` is absent when the item is manual.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemTotalResponse {
    pub manual: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,
}

impl From<ItemTotalUpdate> for ItemTotalResponse {
    fn from(update: ItemTotalUpdate) -> Self {
        match update {
            ItemTotalUpdate::Manual => Self {
                manual: true,
                total: None,
            },
            ItemTotalUpdate::Derived { total } => Self {
                manual: false,
                total: Some(total),
            },
        }
    }
}
