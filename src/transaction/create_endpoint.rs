//! Defines the endpoint for creating a new transaction.

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState, Error,
    extract::ApiJson,
    transaction::core::{NewTransaction, TransactionDisplayRow, insert_transaction},
};

/// A route handler for creating a new transaction.
///
/// Transfer-type transactions are rejected with a validation error, as is a
/// negative amount. Responds with 201 and the stored row including its
/// display fields.
pub async fn create_transaction_endpoint(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewTransaction>,
) -> Result<(StatusCode, Json<TransactionDisplayRow>), Error> {
    let connection = state.connection()?;

    let row = insert_transaction(&payload, &connection)?;

    Ok((StatusCode::CREATED, Json(row)))
}
