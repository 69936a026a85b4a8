mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod enrich;
mod get_endpoint;
mod grouping;
mod list_endpoint;

pub(crate) mod core;

#[cfg(test)]
pub(crate) mod test_utils;

pub use core::{
    NewTransaction, RequestedTransactionKind, Transaction, TransactionDisplayRow, TransactionKind,
    UpdateTransaction, create_transactions_table,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use enrich::{EnrichedTransaction, enrich_transaction};
pub use get_endpoint::get_transaction_endpoint;
pub use grouping::{DayGroup, HasDate, group_by_day};
pub use list_endpoint::list_transactions_endpoint;
