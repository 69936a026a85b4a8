//! Defines the core data model and database queries for transactions.

use rusqlite::{Connection, Row, params};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    database_id::{AccountId, CategoryId, TransactionId},
    money,
};

/// Whether a transaction adds to or subtracts from its account's balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money earned: adds `amount` to the account balance.
    Income,
    /// Money spent: subtracts `amount` from the account balance.
    Expense,
}

impl TransactionKind {
    /// The lowercase string stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(format!("unknown transaction type {other:?}")),
        }
    }
}

/// The transaction kind as it appears on the wire.
///
/// `transfer` is part of the wire vocabulary so that it can be rejected with
/// an explicit message instead of a generic parse error. Transfer semantics
/// are intentionally unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestedTransactionKind {
    /// Money earned.
    Income,
    /// Money spent.
    Expense,
    /// Moving money between accounts. Rejected at creation.
    Transfer,
}

impl RequestedTransactionKind {
    /// Narrow the wire kind to a storable kind, rejecting `transfer`.
    pub fn into_supported(self) -> Result<TransactionKind, Error> {
        match self {
            RequestedTransactionKind::Income => Ok(TransactionKind::Income),
            RequestedTransactionKind::Expense => Ok(TransactionKind::Expense),
            RequestedTransactionKind::Transfer => Err(Error::Validation(
                "transfer transactions are not supported".to_owned(),
            )),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// The amount is stored unsigned; the sign of its effect on the account
/// balance is implied by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The amount of money spent or earned. Never negative.
    #[serde(with = "money::serde_amount")]
    pub amount: Decimal,
    /// The category the transaction is classified under.
    pub category_id: CategoryId,
    /// The account the transaction was made against.
    pub account_id: AccountId,
    /// A free-text note. Defaults to empty.
    pub note: String,
    /// When the transaction happened, as user-editable epoch milliseconds.
    pub date: i64,
    /// When the transaction row was created.
    pub created_at: String,
    /// When the transaction row was last updated.
    pub updated_at: String,
}

/// A transaction row joined with its category and account display fields.
///
/// The joins are LEFT JOINs: the display fields are absent when a reference
/// dangles (which the delete guards prevent, but an external data fix may
/// leave behind).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDisplayRow {
    /// The transaction itself.
    #[serde(flatten)]
    pub transaction: Transaction,
    /// The name of the transaction's category.
    pub category_name: Option<String>,
    /// The color of the transaction's category.
    pub category_color: Option<String>,
    /// The icon key of the transaction's category.
    pub category_icon: Option<String>,
    /// The name of the transaction's account.
    pub account_name: Option<String>,
}

/// The payload for creating a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// Whether the transaction is income or an expense. `transfer` is
    /// rejected with a validation error.
    #[serde(rename = "type")]
    pub kind: RequestedTransactionKind,
    /// The amount of money spent or earned. Must not be negative.
    #[serde(with = "money::serde_amount")]
    pub amount: Decimal,
    /// The category the transaction is classified under.
    pub category_id: CategoryId,
    /// The account the transaction was made against.
    pub account_id: AccountId,
    /// A free-text note. Defaults to empty when omitted.
    #[serde(default)]
    pub note: String,
    /// When the transaction happened, as epoch milliseconds.
    pub date: i64,
}

/// The payload for updating a transaction. Every mutable field is
/// overwritten.
pub type UpdateTransaction = NewTransaction;

pub fn create_transactions_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
            id INTEGER PRIMARY KEY,
            type TEXT NOT NULL CHECK (type IN ('income', 'expense')),
            amount TEXT NOT NULL,
            category_id INTEGER NOT NULL REFERENCES categories(id),
            account_id INTEGER NOT NULL REFERENCES accounts(id),
            note TEXT NOT NULL DEFAULT '',
            date INTEGER NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        (),
    )?;

    Ok(())
}

/// Map a `SELECT id, type, amount, category_id, account_id, note, date,
/// created_at, updated_at` row to a [Transaction].
pub fn map_row_to_transaction(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let kind: String = row.get(1)?;
    let kind = kind.parse().map_err(|error: String| {
        rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, error.into())
    })?;

    Ok(Transaction {
        id: row.get(0)?,
        kind,
        amount: money::decimal_from_row(row, 2)?,
        category_id: row.get(3)?,
        account_id: row.get(4)?,
        note: row.get(5)?,
        date: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}

fn map_row_to_display_row(row: &Row) -> Result<TransactionDisplayRow, rusqlite::Error> {
    Ok(TransactionDisplayRow {
        transaction: map_row_to_transaction(row)?,
        category_name: row.get(9)?,
        category_color: row.get(10)?,
        category_icon: row.get(11)?,
        account_name: row.get(12)?,
    })
}

const TRANSACTION_COLUMNS: &str =
    "t.id, t.type, t.amount, t.category_id, t.account_id, t.note, t.date, t.created_at, \
     t.updated_at";

const DISPLAY_COLUMNS: &str = "c.name AS category_name, c.color AS category_color, \
     c.icon AS category_icon, a.name AS account_name";

const DISPLAY_JOINS: &str = "LEFT JOIN categories c ON t.category_id = c.id
    LEFT JOIN accounts a ON t.account_id = a.id";

/// Get all transactions with their display fields, newest first.
pub fn select_display_rows(connection: &Connection) -> Result<Vec<TransactionDisplayRow>, Error> {
    connection
        .prepare(&format!(
            "SELECT {TRANSACTION_COLUMNS}, {DISPLAY_COLUMNS}
            FROM transactions t
            {DISPLAY_JOINS}
            ORDER BY t.date DESC"
        ))?
        .query_map([], map_row_to_display_row)?
        .map(|maybe_row| maybe_row.map_err(Error::from))
        .collect()
}

/// Get one transaction with its display fields.
pub fn select_display_row(
    id: TransactionId,
    connection: &Connection,
) -> Result<TransactionDisplayRow, Error> {
    connection
        .query_one(
            &format!(
                "SELECT {TRANSACTION_COLUMNS}, {DISPLAY_COLUMNS}
                FROM transactions t
                {DISPLAY_JOINS}
                WHERE t.id = ?1"
            ),
            params![id],
            map_row_to_display_row,
        )
        .map_err(Error::from)
}

/// Get all transactions as plain rows, used for balance computation.
pub fn select_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(&format!(
            "SELECT {TRANSACTION_COLUMNS} FROM transactions t ORDER BY t.date DESC"
        ))?
        .query_map([], map_row_to_transaction)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Validate a create/update payload: the kind must not be `transfer` and the
/// amount must not be negative.
pub fn validate_payload(payload: &NewTransaction) -> Result<TransactionKind, Error> {
    let kind = payload.kind.into_supported()?;

    if payload.amount.is_sign_negative() && !payload.amount.is_zero() {
        return Err(Error::Validation("amount must not be negative".to_owned()));
    }

    Ok(kind)
}

/// Insert a new transaction and return the stored row with display fields.
pub fn insert_transaction(
    payload: &NewTransaction,
    connection: &Connection,
) -> Result<TransactionDisplayRow, Error> {
    let kind = validate_payload(payload)?;

    connection.execute(
        "INSERT INTO transactions (type, amount, category_id, account_id, note, date)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            kind.as_str(),
            payload.amount.to_string(),
            payload.category_id,
            payload.account_id,
            payload.note,
            payload.date,
        ],
    )?;

    let id = connection.last_insert_rowid();

    select_display_row(id, connection)
}

/// Overwrite every mutable field of a transaction.
pub fn update_transaction(
    id: TransactionId,
    payload: &UpdateTransaction,
    connection: &Connection,
) -> Result<(), Error> {
    let kind = validate_payload(payload)?;

    let rows_affected = connection.execute(
        "UPDATE transactions
        SET type = ?1, amount = ?2, category_id = ?3, account_id = ?4, note = ?5, date = ?6,
            updated_at = datetime('now')
        WHERE id = ?7",
        params![
            kind.as_str(),
            payload.amount.to_string(),
            payload.category_id,
            payload.account_id,
            payload.note,
            payload.date,
            id,
        ],
    )?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

/// Delete a transaction. There is no referential guard: transactions are
/// never referenced by other rows.
pub fn delete_transaction(id: TransactionId, connection: &Connection) -> Result<(), Error> {
    let rows_affected =
        connection.execute("DELETE FROM transactions WHERE id = ?1", params![id])?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

#[cfg(test)]
mod create_table_tests {
    use rusqlite::Connection;

    use super::create_transactions_table;

    #[test]
    fn sql_is_valid() {
        let connection =
            Connection::open_in_memory().expect("Could not initialise in-memory SQLite database");

        assert_eq!(Ok(()), create_transactions_table(&connection));
    }
}
