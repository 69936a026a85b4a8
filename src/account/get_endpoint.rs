//! Defines the endpoint for getting one account with its derived balance.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState, Error,
    account::{Account, core::select_account},
    balance::compute_account_balance,
    database_id::AccountId,
    transaction::core::select_transactions,
};

/// A route handler that returns one account with its derived balance, or a
/// 404 when the ID is unknown.
pub async fn get_account_endpoint(
    State(state): State<AppState>,
    Path(account_id): Path<AccountId>,
) -> Result<Json<Account>, Error> {
    let connection = state.connection()?;

    let mut account = select_account(account_id, &connection)?;
    let transactions = select_transactions(&connection)?;
    account.balance = compute_account_balance(&account, &transactions);

    Ok(Json(account))
}
