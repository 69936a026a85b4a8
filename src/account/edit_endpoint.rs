//! Defines the endpoint for updating an account.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState, Error,
    account::{Account, UpdateAccount, core},
    balance::compute_account_balance,
    database_id::AccountId,
    extract::ApiJson,
    transaction::core::select_transactions,
};

/// A route handler for updating an account.
///
/// Full-replacement semantics: every mutable field is overwritten. The ID
/// and currency are immutable. Responds with the updated account, balance
/// applied.
pub async fn edit_account_endpoint(
    State(state): State<AppState>,
    Path(account_id): Path<AccountId>,
    ApiJson(payload): ApiJson<UpdateAccount>,
) -> Result<Json<Account>, Error> {
    let connection = state.connection()?;

    core::update_account(account_id, &payload, &connection)?;

    let mut account = core::select_account(account_id, &connection)?;
    let transactions = select_transactions(&connection)?;
    account.balance = compute_account_balance(&account, &transactions);

    Ok(Json(account))
}
