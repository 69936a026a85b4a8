//! The API endpoint URIs.

/// The accounts collection: list and create.
pub const ACCOUNTS: &str = "/api/accounts";
/// A single account: get, update and delete.
pub const ACCOUNT: &str = "/api/accounts/{account_id}";
/// The categories collection: list and create.
pub const CATEGORIES: &str = "/api/categories";
/// A single category: get, update and delete.
pub const CATEGORY: &str = "/api/categories/{category_id}";
/// The transactions collection: list and create.
pub const TRANSACTIONS: &str = "/api/transactions";
/// A single transaction: get, update and delete.
pub const TRANSACTION: &str = "/api/transactions/{transaction_id}";

/// Replace the parameter in an endpoint path with a concrete ID.
pub fn format_endpoint(endpoint: &str, id: i64) -> String {
    let prefix = endpoint
        .split_once('{')
        .map(|(prefix, _)| prefix)
        .unwrap_or(endpoint);

    format!("{prefix}{id}")
}
