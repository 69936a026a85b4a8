//! ChronoFin is a personal finance tracker: income and expense transactions
//! are recorded against user-defined accounts and hierarchical categories.
//!
//! This library provides a JSON REST API backed by SQLite, the pure
//! balance/derivation functions that turn raw rows into display-ready
//! aggregates, and an in-memory client data store with an optimistic
//! local-fallback reconciliation policy.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod account;
mod balance;
mod category;
mod client;
mod database_id;
mod db;
mod endpoints;
mod export;
mod extract;
mod icon;
mod logging;
mod money;
mod routing;
mod state;
mod stats;
mod timezone;
mod transaction;

pub use account::{Account, AccountKind, NewAccount, UpdateAccount};
pub use balance::{compute_account_balance, total_balance, with_balances};
pub use category::{Category, CategoryKind, NewCategory, UpdateCategory};
pub use client::{
    ApiBackend, BackendError, Collection, DataStore, HttpBackend, StorePhase, default_accounts,
    default_categories,
};
pub use database_id::{AccountId, CategoryId, DatabaseId, TransactionId};
pub use db::initialize as initialize_db;
pub use export::export_transactions_csv;
pub use icon::{DEFAULT_ICON, resolve_icon};
pub use logging::logging_middleware;
pub use routing::build_router;
pub use state::AppState;
pub use stats::{CategorySlice, MonthSummary, category_breakdown, month_summary};
pub use transaction::{
    DayGroup, EnrichedTransaction, HasDate, NewTransaction, RequestedTransactionKind, Transaction,
    TransactionDisplayRow, TransactionKind, UpdateTransaction, enrich_transaction, group_by_day,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("Not found")]
    NotFound,

    /// A required field was missing or a field held a value that is not
    /// allowed, e.g. a negative amount or an unsupported transaction type.
    #[error("{0}")]
    Validation(String),

    /// A delete was blocked because other rows still reference the entity.
    ///
    /// Accounts cannot be deleted while transactions reference them, and
    /// categories cannot be deleted while they have subcategories or
    /// referencing transactions. There is no cascade-delete path.
    #[error("{0}")]
    Conflict(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),

    /// Could not acquire the database lock.
    #[error("could not acquire the database lock")]
    DatabaseLock,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    Sql(rusqlite::Error),

    /// An error occurred while writing the CSV export.
    #[error("could not write CSV: {0}")]
    Csv(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Code 787 occurs when a FOREIGN KEY constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, Some(_))
                if sql_error.extended_code == 787 =>
            {
                Error::Validation("invalid foreign key".to_owned())
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::Sql(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::Validation(_) | Error::Conflict(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("An unexpected error occurred: {}", self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
