//! Defines the endpoint for deleting an account.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    AppState, Error,
    account::core::{count_transactions_for_account, delete_account},
    database_id::AccountId,
};

/// A route handler for deleting an account.
///
/// The delete is rejected with a conflict while any transaction references
/// the account. There is no cascade.
pub async fn delete_account_endpoint(
    State(state): State<AppState>,
    Path(account_id): Path<AccountId>,
) -> Result<StatusCode, Error> {
    let connection = state.connection()?;

    if count_transactions_for_account(account_id, &connection)? > 0 {
        return Err(Error::Conflict(
            "Cannot delete account with transactions".to_owned(),
        ));
    }

    delete_account(account_id, &connection)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::extract::{Path, State};
    use axum::http::StatusCode;
    use rusqlite::Connection;
    use rust_decimal::Decimal;

    use crate::{
        AppState, Error,
        transaction::{
            NewTransaction, RequestedTransactionKind,
            core::{delete_transaction, insert_transaction},
            test_utils::{insert_test_account, insert_test_category},
        },
    };

    use super::delete_account_endpoint;

    fn get_test_state() -> AppState {
        let connection = Connection::open_in_memory().unwrap();
        AppState::new(connection, "UTC").unwrap()
    }

    #[tokio::test]
    async fn delete_with_referencing_transaction_is_a_conflict() {
        let state = get_test_state();
        let (account_id, transaction_id) = {
            let connection = state.db_connection.lock().unwrap();
            let account_id = insert_test_account("Cash", &connection);
            let category_id = insert_test_category("Food", &connection);
            let row = insert_transaction(
                &NewTransaction {
                    kind: RequestedTransactionKind::Expense,
                    amount: Decimal::ONE,
                    category_id,
                    account_id,
                    note: String::new(),
                    date: 0,
                },
                &connection,
            )
            .unwrap();
            (account_id, row.transaction.id)
        };

        let result = delete_account_endpoint(State(state.clone()), Path(account_id)).await;

        assert_eq!(
            result,
            Err(Error::Conflict(
                "Cannot delete account with transactions".to_owned()
            ))
        );

        // Removing the reference unblocks the delete.
        {
            let connection = state.db_connection.lock().unwrap();
            delete_transaction(transaction_id, &connection).unwrap();
        }

        let result = delete_account_endpoint(State(state), Path(account_id)).await;

        assert_eq!(result, Ok(StatusCode::NO_CONTENT));
    }

    #[tokio::test]
    async fn delete_missing_account_is_not_found() {
        let state = get_test_state();

        let result = delete_account_endpoint(State(state), Path(42)).await;

        assert_eq!(result, Err(Error::NotFound));
    }
}
