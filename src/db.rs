//! Database initialization for the application schema.

use rusqlite::Connection;

use crate::{
    account::create_accounts_table, category::create_categories_table,
    transaction::create_transactions_table,
};

/// Create the application tables if they do not exist and turn on foreign key
/// enforcement for the connection.
///
/// The tables are created in one transaction so a partially initialized
/// schema is never left behind.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.pragma_update(None, "foreign_keys", true)?;

    let sql_transaction = connection.unchecked_transaction()?;

    create_accounts_table(connection)?;
    create_categories_table(connection)?;
    create_transactions_table(connection)?;

    sql_transaction.commit()
}
