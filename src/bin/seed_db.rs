//! Creates the application database and fills empty tables with the default
//! accounts and categories, keeping their well-known IDs.

use clap::Parser;
use rusqlite::{Connection, params};

use chronofin::{default_accounts, default_categories, initialize_db};

/// Creates and seeds the ChronoFin SQLite database.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long)]
    db_path: String,
}

fn main() {
    let args = Args::parse();

    let connection = Connection::open(&args.db_path).expect("Could not open database file");
    initialize_db(&connection).expect("Could not initialize the database schema");

    seed(&connection).expect("Could not seed the database");
}

fn seed(connection: &Connection) -> Result<(), rusqlite::Error> {
    let category_count: i64 =
        connection.query_one("SELECT COUNT(id) FROM categories", [], |row| row.get(0))?;

    if category_count == 0 {
        // Parents sort before subcategories in the seed list, so the
        // self-referencing foreign key is satisfied insertion by insertion.
        for category in default_categories() {
            connection.execute(
                "INSERT INTO categories (id, name, type, color, icon, parent_id)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    category.id,
                    category.name,
                    category.kind.as_str(),
                    category.color,
                    category.icon,
                    category.parent_id,
                ],
            )?;
        }

        println!("Seeded default categories.");
    } else {
        println!("Categories already present, skipping.");
    }

    let account_count: i64 =
        connection.query_one("SELECT COUNT(id) FROM accounts", [], |row| row.get(0))?;

    if account_count == 0 {
        for account in default_accounts() {
            connection.execute(
                "INSERT INTO accounts (id, name, type, color, icon, initial_balance, currency)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    account.id,
                    account.name,
                    account.kind.as_str(),
                    account.color,
                    account.icon,
                    account.initial_balance.to_string(),
                    account.currency,
                ],
            )?;
        }

        println!("Seeded default accounts.");
    } else {
        println!("Accounts already present, skipping.");
    }

    Ok(())
}
