//! Per-category totals for the statistics pie/bar views.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::transaction::{EnrichedTransaction, TransactionKind};

/// The label used when a transaction's category reference dangles.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// The color used when a transaction's category reference dangles.
pub const UNCATEGORIZED_COLOR: &str = "#64748b";

/// One slice of the category breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySlice {
    /// The resolved category name, or [UNCATEGORIZED_LABEL].
    pub category_name: String,
    /// The summed amount across the category's transactions.
    #[serde(with = "crate::money::serde_amount")]
    pub total_amount: Decimal,
    /// The category color, or [UNCATEGORIZED_COLOR].
    pub color: String,
}

/// Sum transaction amounts per resolved category name for one transaction
/// kind, sorted descending by total. Ties keep first-encountered order.
pub fn category_breakdown(
    transactions: &[EnrichedTransaction],
    kind: TransactionKind,
) -> Vec<CategorySlice> {
    let mut slices: Vec<CategorySlice> = Vec::new();

    for enriched in transactions {
        if enriched.transaction.kind != kind {
            continue;
        }

        let (name, color) = match &enriched.category {
            Some(category) => (category.name.as_str(), category.color.as_str()),
            None => (UNCATEGORIZED_LABEL, UNCATEGORIZED_COLOR),
        };

        match slices.iter_mut().find(|slice| slice.category_name == name) {
            Some(slice) => slice.total_amount += enriched.transaction.amount,
            None => slices.push(CategorySlice {
                category_name: name.to_owned(),
                total_amount: enriched.transaction.amount,
                color: color.to_owned(),
            }),
        }
    }

    // Stable sort keeps first-encounter order between equal totals.
    slices.sort_by(|left, right| right.total_amount.cmp(&left.total_amount));

    slices
}
