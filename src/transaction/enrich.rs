//! Joins transactions with their category, parent category and account
//! records for display.

use serde::Serialize;

use crate::{account::Account, category::Category, transaction::Transaction};

/// A transaction augmented with resolved category, parent category and
/// account records.
///
/// Derived, never persisted. Must be recomputed whenever any of the base
/// collections changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedTransaction {
    /// The transaction itself.
    #[serde(flatten)]
    pub transaction: Transaction,
    /// The transaction's category, absent when the reference dangles.
    pub category: Option<Category>,
    /// The category's parent, absent for parent categories and dangling
    /// references.
    pub parent_category: Option<Category>,
    /// The transaction's account, absent when the reference dangles.
    pub account: Option<Account>,
}

/// Resolve a transaction's category, parent category and account.
///
/// A dangling reference resolves to `None` rather than an error: the delete
/// guards prevent dangling references, but a partially-applied external data
/// fix may still produce one.
pub fn enrich_transaction(
    transaction: &Transaction,
    categories: &[Category],
    accounts: &[Account],
) -> EnrichedTransaction {
    let category = categories
        .iter()
        .find(|category| category.id == transaction.category_id)
        .cloned();

    let parent_category = category
        .as_ref()
        .and_then(|category| category.parent_id)
        .and_then(|parent_id| categories.iter().find(|category| category.id == parent_id))
        .cloned();

    let account = accounts
        .iter()
        .find(|account| account.id == transaction.account_id)
        .cloned();

    EnrichedTransaction {
        transaction: transaction.clone(),
        category,
        parent_category,
        account,
    }
}
