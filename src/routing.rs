//! Application router configuration for the JSON API.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;

use crate::{
    AppState,
    account::{
        create_account_endpoint, delete_account_endpoint, edit_account_endpoint,
        get_account_endpoint, list_accounts_endpoint,
    },
    category::{
        create_category_endpoint, delete_category_endpoint, edit_category_endpoint,
        get_category_endpoint, list_categories_endpoint,
    },
    endpoints,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_transaction_endpoint, list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Unlisted methods on a known path get a 405 and unknown paths a 404, both
/// with the same `{"error": ...}` body shape the handlers produce.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::ACCOUNTS,
            get(list_accounts_endpoint)
                .post(create_account_endpoint)
                .fallback(method_not_allowed),
        )
        .route(
            endpoints::ACCOUNT,
            get(get_account_endpoint)
                .put(edit_account_endpoint)
                .delete(delete_account_endpoint)
                .fallback(method_not_allowed),
        )
        .route(
            endpoints::CATEGORIES,
            get(list_categories_endpoint)
                .post(create_category_endpoint)
                .fallback(method_not_allowed),
        )
        .route(
            endpoints::CATEGORY,
            get(get_category_endpoint)
                .put(edit_category_endpoint)
                .delete(delete_category_endpoint)
                .fallback(method_not_allowed),
        )
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions_endpoint)
                .post(create_transaction_endpoint)
                .fallback(method_not_allowed),
        )
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint)
                .put(edit_transaction_endpoint)
                .delete(delete_transaction_endpoint)
                .fallback(method_not_allowed),
        )
        .fallback(not_found)
        .with_state(state)
}

async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
        .into_response()
}

async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))).into_response()
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use rusqlite::Connection;
    use rust_decimal::Decimal;
    use serde_json::{Value, json};

    use crate::{AppState, account::Account, category::Category, transaction::Transaction};

    use super::build_router;

    fn get_test_server() -> TestServer {
        let connection = Connection::open_in_memory().unwrap();
        let state = AppState::new(connection, "UTC").unwrap();

        TestServer::new(build_router(state))
    }

    async fn create_fixture(server: &TestServer) -> (Account, Category) {
        let account = server
            .post("/api/accounts")
            .json(&json!({
                "name": "Cash",
                "type": "cash",
                "color": "#10b981",
                "icon": "banknote",
                "initial_balance": 500
            }))
            .await
            .json::<Account>();

        let category = server
            .post("/api/categories")
            .json(&json!({
                "name": "Food",
                "type": "expense",
                "color": "#ef4444",
                "icon": "utensils"
            }))
            .await
            .json::<Category>();

        (account, category)
    }

    #[tokio::test]
    async fn account_crud_round_trip() {
        let server = get_test_server();

        let create_response = server
            .post("/api/accounts")
            .json(&json!({
                "name": "Cash",
                "type": "cash",
                "color": "#10b981",
                "icon": "banknote",
                "initial_balance": "100.00"
            }))
            .await;
        create_response.assert_status(axum::http::StatusCode::CREATED);
        let account = create_response.json::<Account>();

        let fetched = server
            .get(&format!("/api/accounts/{}", account.id))
            .await
            .json::<Account>();
        assert_eq!(fetched.balance, Decimal::new(10_000, 2));

        let updated = server
            .put(&format!("/api/accounts/{}", account.id))
            .json(&json!({
                "name": "Wallet",
                "type": "digital",
                "color": "#3b82f6",
                "icon": "smartphone",
                "initial_balance": "100.00"
            }))
            .await
            .json::<Account>();
        assert_eq!(updated.name, "Wallet");

        let delete_response = server.delete(&format!("/api/accounts/{}", account.id)).await;
        delete_response.assert_status(axum::http::StatusCode::NO_CONTENT);

        let list = server.get("/api/accounts").await.json::<Vec<Account>>();
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn transaction_create_affects_account_balance() {
        let server = get_test_server();
        let (account, category) = create_fixture(&server).await;

        let create_response = server
            .post("/api/transactions")
            .json(&json!({
                "type": "expense",
                "amount": 45.50,
                "category_id": category.id,
                "account_id": account.id,
                "note": "Lunch",
                "date": 1_718_452_800_000_i64
            }))
            .await;
        create_response.assert_status(axum::http::StatusCode::CREATED);
        let transaction = create_response.json::<Transaction>();
        assert_eq!(transaction.amount, Decimal::new(4_550, 2));

        let fetched = server
            .get(&format!("/api/accounts/{}", account.id))
            .await
            .json::<Account>();
        assert_eq!(fetched.balance, Decimal::new(45_450, 2));
    }

    #[tokio::test]
    async fn blocked_delete_returns_400_with_reason() {
        let server = get_test_server();
        let (account, category) = create_fixture(&server).await;
        server
            .post("/api/transactions")
            .json(&json!({
                "type": "expense",
                "amount": 10,
                "category_id": category.id,
                "account_id": account.id,
                "date": 0
            }))
            .await;

        let response = server.delete(&format!("/api/accounts/{}", account.id)).await;

        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
        let body = response.json::<Value>();
        assert_eq!(body["error"], "Cannot delete account with transactions");
    }

    #[tokio::test]
    async fn transfer_transactions_are_rejected() {
        let server = get_test_server();
        let (account, category) = create_fixture(&server).await;

        let response = server
            .post("/api/transactions")
            .json(&json!({
                "type": "transfer",
                "amount": 10,
                "category_id": category.id,
                "account_id": account.id,
                "date": 0
            }))
            .await;

        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
        let body = response.json::<Value>();
        assert_eq!(body["error"], "transfer transactions are not supported");
    }

    #[tokio::test]
    async fn malformed_body_returns_400() {
        let server = get_test_server();

        let response = server
            .post("/api/accounts")
            .json(&json!({ "name": "Cash" }))
            .await;

        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_id_returns_404_with_json_body() {
        let server = get_test_server();

        let response = server.get("/api/transactions/999").await;

        response.assert_status(axum::http::StatusCode::NOT_FOUND);
        let body = response.json::<Value>();
        assert_eq!(body["error"], "Not found");
    }

    #[tokio::test]
    async fn unlisted_method_returns_405() {
        let server = get_test_server();

        let response = server.patch("/api/accounts").json(&json!({})).await;

        response.assert_status(axum::http::StatusCode::METHOD_NOT_ALLOWED);
        let body = response.json::<Value>();
        assert_eq!(body["error"], "Method not allowed");
    }

    #[tokio::test]
    async fn unknown_path_returns_404() {
        let server = get_test_server();

        let response = server.get("/api/budgets").await;

        response.assert_status(axum::http::StatusCode::NOT_FOUND);
    }
}
