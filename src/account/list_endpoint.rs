//! Defines the endpoint for listing accounts with derived balances.

use axum::{Json, extract::State};

use crate::{
    AppState, Error,
    account::{Account, core::select_accounts},
    balance::with_balances,
    transaction::core::select_transactions,
};

/// A route handler that lists every account, ordered by name, with the
/// derived balance applied.
pub async fn list_accounts_endpoint(
    State(state): State<AppState>,
) -> Result<Json<Vec<Account>>, Error> {
    let connection = state.connection()?;

    let accounts = select_accounts(&connection)?;
    let transactions = select_transactions(&connection)?;

    Ok(Json(with_balances(accounts, &transactions)))
}

#[cfg(test)]
mod tests {
    use axum::extract::State;
    use rusqlite::Connection;
    use rust_decimal::Decimal;

    use crate::{
        AppState,
        account::{AccountKind, NewAccount, core::insert_account},
        transaction::{
            NewTransaction, RequestedTransactionKind,
            core::insert_transaction,
            test_utils::insert_test_category,
        },
    };

    use super::list_accounts_endpoint;

    fn get_test_state() -> AppState {
        let connection = Connection::open_in_memory().unwrap();
        AppState::new(connection, "UTC").unwrap()
    }

    #[tokio::test]
    async fn balances_reflect_transactions() {
        let state = get_test_state();
        {
            let connection = state.db_connection.lock().unwrap();
            let account = insert_account(
                &NewAccount {
                    name: "Cash".to_owned(),
                    kind: AccountKind::Cash,
                    color: "#10b981".to_owned(),
                    icon: "banknote".to_owned(),
                    initial_balance: Decimal::from(500),
                    currency: "CNY".to_owned(),
                },
                &connection,
            )
            .unwrap();
            let category_id = insert_test_category("Food", &connection);

            insert_transaction(
                &NewTransaction {
                    kind: RequestedTransactionKind::Expense,
                    amount: Decimal::new(4_550, 2),
                    category_id,
                    account_id: account.id,
                    note: String::new(),
                    date: 0,
                },
                &connection,
            )
            .unwrap();
        }

        let accounts = list_accounts_endpoint(State(state)).await.unwrap().0;

        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].balance, Decimal::new(45_450, 2));
    }

    #[tokio::test]
    async fn empty_database_returns_empty_list() {
        let state = get_test_state();

        let accounts = list_accounts_endpoint(State(state)).await.unwrap().0;

        assert!(accounts.is_empty());
    }
}
