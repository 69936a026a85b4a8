//! Shared fixtures for endpoint and query tests.

use rusqlite::{Connection, params};

use crate::database_id::{AccountId, CategoryId};

pub(crate) fn insert_test_account(name: &str, connection: &Connection) -> AccountId {
    connection
        .execute(
            "INSERT INTO accounts (name, type, color, icon, initial_balance)
            VALUES (?1, 'cash', '#10b981', 'banknote', '0')",
            params![name],
        )
        .expect("could not insert test account");

    connection.last_insert_rowid()
}

pub(crate) fn insert_test_category(name: &str, connection: &Connection) -> CategoryId {
    connection
        .execute(
            "INSERT INTO categories (name, type, color, icon)
            VALUES (?1, 'expense', '#ef4444', 'utensils')",
            params![name],
        )
        .expect("could not insert test category");

    connection.last_insert_rowid()
}
