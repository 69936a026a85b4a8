//! Defines the endpoint for listing transactions with display fields.

use axum::{Json, extract::State};

use crate::{
    AppState, Error,
    transaction::core::{TransactionDisplayRow, select_display_rows},
};

/// A route handler that lists every transaction, newest first, with the
/// left-joined category and account display fields.
pub async fn list_transactions_endpoint(
    State(state): State<AppState>,
) -> Result<Json<Vec<TransactionDisplayRow>>, Error> {
    let connection = state.connection()?;

    Ok(Json(select_display_rows(&connection)?))
}
