//! Defines the endpoint for updating a transaction.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState, Error,
    database_id::TransactionId,
    extract::ApiJson,
    transaction::core::{
        TransactionDisplayRow, UpdateTransaction, select_display_row, update_transaction,
    },
};

/// A route handler for updating a transaction.
///
/// Full-replacement semantics: every mutable field is overwritten. The same
/// validation as creation applies.
pub async fn edit_transaction_endpoint(
    State(state): State<AppState>,
    Path(transaction_id): Path<TransactionId>,
    ApiJson(payload): ApiJson<UpdateTransaction>,
) -> Result<Json<TransactionDisplayRow>, Error> {
    let connection = state.connection()?;

    update_transaction(transaction_id, &payload, &connection)?;

    Ok(Json(select_display_row(transaction_id, &connection)?))
}
