//! Defines the core data model and database queries for accounts.

use rusqlite::{Connection, Row, params};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::AccountId, money};

/// The kind of money store an account represents. A UI hint only, it has no
/// effect on balance arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// A conventional bank account.
    Bank,
    /// Physical cash.
    Cash,
    /// A digital wallet, e.g. WeChat Pay.
    Digital,
    /// A credit card.
    Credit,
}

impl AccountKind {
    /// The lowercase string stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Bank => "bank",
            AccountKind::Cash => "cash",
            AccountKind::Digital => "digital",
            AccountKind::Credit => "credit",
        }
    }
}

impl std::str::FromStr for AccountKind {
    type Err = String;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "bank" => Ok(AccountKind::Bank),
            "cash" => Ok(AccountKind::Cash),
            "digital" => Ok(AccountKind::Digital),
            "credit" => Ok(AccountKind::Credit),
            other => Err(format!("unknown account type {other:?}")),
        }
    }
}

/// An account that transactions are recorded against.
///
/// `balance` is derived, not stored: it is `initial_balance` plus income
/// minus expenses across the account's transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// The ID of the account.
    pub id: AccountId,
    /// The display name of the account.
    pub name: String,
    /// The kind of account, e.g. bank or cash.
    #[serde(rename = "type")]
    pub kind: AccountKind,
    /// The display color as a hex string, e.g. `#10b981`.
    pub color: String,
    /// The icon key, resolved via [crate::resolve_icon].
    pub icon: String,
    /// The balance the account started with before any recorded transaction.
    #[serde(with = "money::serde_amount")]
    pub initial_balance: Decimal,
    /// The currency code, informational only. Never used in arithmetic.
    pub currency: String,
    /// When the account row was created.
    pub created_at: String,
    /// When the account row was last updated.
    pub updated_at: String,
    /// The current balance, derived from `initial_balance` and transactions.
    #[serde(with = "money::serde_amount")]
    pub balance: Decimal,
}

/// The payload for creating an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAccount {
    /// The display name of the account.
    pub name: String,
    /// The kind of account.
    #[serde(rename = "type")]
    pub kind: AccountKind,
    /// The display color.
    pub color: String,
    /// The icon key.
    pub icon: String,
    /// The starting balance. Defaults to zero when omitted.
    #[serde(default, with = "money::serde_amount")]
    pub initial_balance: Decimal,
    /// The currency code. Defaults to "CNY" when omitted.
    #[serde(default = "default_currency")]
    pub currency: String,
}

/// The payload for updating an account. Every mutable field is overwritten,
/// the ID and currency are immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateAccount {
    /// The display name of the account.
    pub name: String,
    /// The kind of account.
    #[serde(rename = "type")]
    pub kind: AccountKind,
    /// The display color.
    pub color: String,
    /// The icon key.
    pub icon: String,
    /// The starting balance. Defaults to zero when omitted.
    #[serde(default, with = "money::serde_amount")]
    pub initial_balance: Decimal,
}

fn default_currency() -> String {
    "CNY".to_owned()
}

pub fn create_accounts_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS accounts (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            type TEXT NOT NULL CHECK (type IN ('bank', 'cash', 'digital', 'credit')),
            color TEXT NOT NULL,
            icon TEXT NOT NULL,
            initial_balance TEXT NOT NULL DEFAULT '0',
            currency TEXT NOT NULL DEFAULT 'CNY',
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        (),
    )?;

    Ok(())
}

/// Map a `SELECT id, name, type, color, icon, initial_balance, currency,
/// created_at, updated_at` row to an [Account].
///
/// The derived `balance` starts out equal to `initial_balance`; callers are
/// expected to apply the account's transactions via
/// [crate::compute_account_balance].
pub fn map_row_to_account(row: &Row) -> Result<Account, rusqlite::Error> {
    let kind: String = row.get(2)?;
    let kind = kind.parse().map_err(|error: String| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, error.into())
    })?;
    let initial_balance = money::decimal_from_row(row, 5)?;

    Ok(Account {
        id: row.get(0)?,
        name: row.get(1)?,
        kind,
        color: row.get(3)?,
        icon: row.get(4)?,
        initial_balance,
        currency: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
        balance: initial_balance,
    })
}

const ACCOUNT_COLUMNS: &str =
    "id, name, type, color, icon, initial_balance, currency, created_at, updated_at";

/// Get all accounts ordered by name. Balances are not yet applied.
pub fn select_accounts(connection: &Connection) -> Result<Vec<Account>, Error> {
    connection
        .prepare(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts ORDER BY name"
        ))?
        .query_map([], map_row_to_account)?
        .map(|maybe_account| maybe_account.map_err(Error::from))
        .collect()
}

/// Get one account by ID. The balance is not yet applied.
pub fn select_account(id: AccountId, connection: &Connection) -> Result<Account, Error> {
    connection
        .query_one(
            &format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = ?1"),
            params![id],
            map_row_to_account,
        )
        .map_err(Error::from)
}

/// Insert a new account and return the stored row.
pub fn insert_account(payload: &NewAccount, connection: &Connection) -> Result<Account, Error> {
    connection.execute(
        "INSERT INTO accounts (name, type, color, icon, initial_balance, currency)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            payload.name,
            payload.kind.as_str(),
            payload.color,
            payload.icon,
            payload.initial_balance.to_string(),
            payload.currency,
        ],
    )?;

    let id = connection.last_insert_rowid();

    select_account(id, connection)
}

/// Overwrite every mutable field of an account.
pub fn update_account(
    id: AccountId,
    payload: &UpdateAccount,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "UPDATE accounts
        SET name = ?1, type = ?2, color = ?3, icon = ?4, initial_balance = ?5,
            updated_at = datetime('now')
        WHERE id = ?6",
        params![
            payload.name,
            payload.kind.as_str(),
            payload.color,
            payload.icon,
            payload.initial_balance.to_string(),
            id,
        ],
    )?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

/// Delete an account. The caller must have already checked the delete guard
/// via [count_transactions_for_account].
pub fn delete_account(id: AccountId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM accounts WHERE id = ?1", params![id])?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

/// How many transactions reference the account.
pub fn count_transactions_for_account(
    id: AccountId,
    connection: &Connection,
) -> Result<i64, Error> {
    connection
        .query_one(
            "SELECT COUNT(id) FROM transactions WHERE account_id = ?1",
            params![id],
            |row| row.get(0),
        )
        .map_err(Error::from)
}


#[cfg(test)]
mod query_tests {
    use rusqlite::Connection;
    use rust_decimal::Decimal;

    use crate::{Error, db::initialize};

    use super::{
        AccountKind, NewAccount, UpdateAccount, insert_account, select_account, select_accounts,
        update_account,
    };

    fn get_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        connection
    }

    fn new_account(name: &str) -> NewAccount {
        NewAccount {
            name: name.to_owned(),
            kind: AccountKind::Cash,
            color: "#10b981".to_owned(),
            icon: "banknote".to_owned(),
            initial_balance: Decimal::new(50_000, 2),
            currency: "CNY".to_owned(),
        }
    }

    #[test]
    fn insert_assigns_id_and_keeps_fields() {
        let connection = get_test_connection();

        let account = insert_account(&new_account("Cash"), &connection).unwrap();

        assert_eq!(account.id, 1);
        assert_eq!(account.name, "Cash");
        assert_eq!(account.kind, AccountKind::Cash);
        assert_eq!(account.initial_balance, Decimal::new(50_000, 2));
        assert_eq!(account.currency, "CNY");
    }

    #[test]
    fn select_accounts_orders_by_name() {
        let connection = get_test_connection();
        insert_account(&new_account("Zebra Bank"), &connection).unwrap();
        insert_account(&new_account("Alpha Bank"), &connection).unwrap();

        let accounts = select_accounts(&connection).unwrap();

        let names: Vec<&str> = accounts.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha Bank", "Zebra Bank"]);
    }

    #[test]
    fn update_overwrites_every_mutable_field() {
        let connection = get_test_connection();
        let account = insert_account(&new_account("Cash"), &connection).unwrap();

        update_account(
            account.id,
            &UpdateAccount {
                name: "Wallet".to_owned(),
                kind: AccountKind::Digital,
                color: "#3b82f6".to_owned(),
                icon: "smartphone".to_owned(),
                initial_balance: Decimal::ZERO,
            },
            &connection,
        )
        .unwrap();

        let updated = select_account(account.id, &connection).unwrap();
        assert_eq!(updated.name, "Wallet");
        assert_eq!(updated.kind, AccountKind::Digital);
        assert_eq!(updated.initial_balance, Decimal::ZERO);
        // Currency is immutable through updates.
        assert_eq!(updated.currency, "CNY");
    }

    #[test]
    fn update_missing_account_is_not_found() {
        let connection = get_test_connection();

        let result = update_account(
            999,
            &UpdateAccount {
                name: "Wallet".to_owned(),
                kind: AccountKind::Digital,
                color: "#3b82f6".to_owned(),
                icon: "smartphone".to_owned(),
                initial_balance: Decimal::ZERO,
            },
            &connection,
        );

        assert_eq!(result, Err(Error::NotFound));
    }

    #[test]
    fn select_missing_account_is_not_found() {
        let connection = get_test_connection();

        assert_eq!(select_account(42, &connection), Err(Error::NotFound));
    }
}
