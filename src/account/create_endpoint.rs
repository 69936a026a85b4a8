//! Defines the endpoint for creating a new account.

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState, Error,
    account::{Account, NewAccount, core::insert_account},
    extract::ApiJson,
};

/// A route handler for creating a new account.
///
/// Responds with 201 and the created account. The account has no
/// transactions yet, so its derived balance equals its initial balance.
pub async fn create_account_endpoint(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewAccount>,
) -> Result<(StatusCode, Json<Account>), Error> {
    let connection = state.connection()?;

    let account = insert_account(&payload, &connection)?;

    Ok((StatusCode::CREATED, Json(account)))
}
