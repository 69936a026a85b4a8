//! Defines the endpoint for getting one transaction with display fields.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState, Error,
    database_id::TransactionId,
    transaction::core::{TransactionDisplayRow, select_display_row},
};

/// A route handler that returns one transaction with its display fields, or
/// a 404 when the ID is unknown.
pub async fn get_transaction_endpoint(
    State(state): State<AppState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Json<TransactionDisplayRow>, Error> {
    let connection = state.connection()?;

    Ok(Json(select_display_row(transaction_id, &connection)?))
}

#[cfg(test)]
mod tests {
    use axum::extract::{Path, State};
    use rusqlite::Connection;

    use crate::{AppState, Error};

    use super::get_transaction_endpoint;

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let connection = Connection::open_in_memory().unwrap();
        let state = AppState::new(connection, "UTC").unwrap();

        let result = get_transaction_endpoint(State(state), Path(42)).await;

        assert_eq!(result.err(), Some(Error::NotFound));
    }
}
