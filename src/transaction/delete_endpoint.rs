//! Defines the endpoint for deleting a transaction.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{AppState, Error, database_id::TransactionId, transaction::core::delete_transaction};

/// A route handler for deleting a transaction.
///
/// Nothing references transactions, so there is no delete guard: deleting an
/// existing transaction always succeeds.
pub async fn delete_transaction_endpoint(
    State(state): State<AppState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<StatusCode, Error> {
    let connection = state.connection()?;

    delete_transaction(transaction_id, &connection)?;

    Ok(StatusCode::NO_CONTENT)
}
