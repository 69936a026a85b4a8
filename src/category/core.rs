//! Defines the core data model and database queries for categories.

use rusqlite::{Connection, Row, params};
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::CategoryId};

/// Whether a category groups expenses or income.
///
/// Fixed at creation for parent categories and inherited by subcategories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    /// Money spent.
    Expense,
    /// Money earned.
    Income,
}

impl CategoryKind {
    /// The lowercase string stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKind::Expense => "expense",
            CategoryKind::Income => "income",
        }
    }
}

impl std::str::FromStr for CategoryKind {
    type Err = String;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "expense" => Ok(CategoryKind::Expense),
            "income" => Ok(CategoryKind::Income),
            other => Err(format!("unknown category type {other:?}")),
        }
    }
}

/// A category that transactions are classified under.
///
/// A category with `parent_id = None` is a parent; one level of nesting is
/// supported and a subcategory's effective kind is its parent's kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// The ID of the category.
    pub id: CategoryId,
    /// The display name of the category.
    pub name: String,
    /// Whether the category groups expenses or income.
    #[serde(rename = "type")]
    pub kind: CategoryKind,
    /// The display color as a hex string.
    pub color: String,
    /// The icon key, resolved via [crate::resolve_icon].
    pub icon: String,
    /// The parent category, or `None` for a parent category.
    pub parent_id: Option<CategoryId>,
    /// When the category row was created.
    pub created_at: String,
    /// When the category row was last updated.
    pub updated_at: String,
}

/// The payload for creating a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCategory {
    /// The display name of the category.
    pub name: String,
    /// Whether the category groups expenses or income. Immutable after
    /// creation.
    #[serde(rename = "type")]
    pub kind: CategoryKind,
    /// The display color.
    pub color: String,
    /// The icon key.
    pub icon: String,
    /// The parent category for a subcategory.
    #[serde(default)]
    pub parent_id: Option<CategoryId>,
}

/// The payload for updating a category. The kind and parent are immutable
/// after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCategory {
    /// The display name of the category.
    pub name: String,
    /// The display color.
    pub color: String,
    /// The icon key.
    pub icon: String,
}

pub fn create_categories_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            type TEXT NOT NULL CHECK (type IN ('expense', 'income')),
            color TEXT NOT NULL,
            icon TEXT NOT NULL,
            parent_id INTEGER REFERENCES categories(id),
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        (),
    )?;

    Ok(())
}

/// Map a `SELECT id, name, type, color, icon, parent_id, created_at,
/// updated_at` row to a [Category].
pub fn map_row_to_category(row: &Row) -> Result<Category, rusqlite::Error> {
    let kind: String = row.get(2)?;
    let kind = kind.parse().map_err(|error: String| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, error.into())
    })?;

    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        kind,
        color: row.get(3)?,
        icon: row.get(4)?,
        parent_id: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}

const CATEGORY_COLUMNS: &str = "id, name, type, color, icon, parent_id, created_at, updated_at";

/// Get all categories ordered by kind, then parents before subcategories,
/// then name.
pub fn select_categories(connection: &Connection) -> Result<Vec<Category>, Error> {
    connection
        .prepare(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories
            ORDER BY type, parent_id NULLS FIRST, name"
        ))?
        .query_map([], map_row_to_category)?
        .map(|maybe_category| maybe_category.map_err(Error::from))
        .collect()
}

/// Get one category by ID.
pub fn select_category(id: CategoryId, connection: &Connection) -> Result<Category, Error> {
    connection
        .query_one(
            &format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = ?1"),
            params![id],
            map_row_to_category,
        )
        .map_err(Error::from)
}

/// Insert a new category and return the stored row.
pub fn insert_category(payload: &NewCategory, connection: &Connection) -> Result<Category, Error> {
    connection.execute(
        "INSERT INTO categories (name, type, color, icon, parent_id)
        VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            payload.name,
            payload.kind.as_str(),
            payload.color,
            payload.icon,
            payload.parent_id,
        ],
    )?;

    let id = connection.last_insert_rowid();

    select_category(id, connection)
}

/// Overwrite the mutable fields of a category. The kind and parent are left
/// untouched.
pub fn update_category(
    id: CategoryId,
    payload: &UpdateCategory,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "UPDATE categories
        SET name = ?1, color = ?2, icon = ?3, updated_at = datetime('now')
        WHERE id = ?4",
        params![payload.name, payload.color, payload.icon, id],
    )?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

/// Delete a category. The caller must have already checked the delete guards
/// via [count_subcategories] and [count_transactions_for_category].
pub fn delete_category(id: CategoryId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM categories WHERE id = ?1", params![id])?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

/// How many categories name this category as their parent.
pub fn count_subcategories(id: CategoryId, connection: &Connection) -> Result<i64, Error> {
    connection
        .query_one(
            "SELECT COUNT(id) FROM categories WHERE parent_id = ?1",
            params![id],
            |row| row.get(0),
        )
        .map_err(Error::from)
}

/// How many transactions reference the category.
pub fn count_transactions_for_category(
    id: CategoryId,
    connection: &Connection,
) -> Result<i64, Error> {
    connection
        .query_one(
            "SELECT COUNT(id) FROM transactions WHERE category_id = ?1",
            params![id],
            |row| row.get(0),
        )
        .map_err(Error::from)
}


#[cfg(test)]
mod query_tests {
    use rusqlite::Connection;

    use crate::{Error, db::initialize};

    use super::{
        CategoryKind, NewCategory, UpdateCategory, count_subcategories, insert_category,
        select_categories, select_category, update_category,
    };

    fn get_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        connection
    }

    fn new_category(name: &str, parent_id: Option<i64>) -> NewCategory {
        NewCategory {
            name: name.to_owned(),
            kind: CategoryKind::Expense,
            color: "#ef4444".to_owned(),
            icon: "utensils".to_owned(),
            parent_id,
        }
    }

    #[test]
    fn insert_stores_parent_link() {
        let connection = get_test_connection();
        let parent = insert_category(&new_category("Food", None), &connection).unwrap();

        let child = insert_category(&new_category("Coffee", Some(parent.id)), &connection).unwrap();

        assert_eq!(child.parent_id, Some(parent.id));
        assert_eq!(count_subcategories(parent.id, &connection), Ok(1));
    }

    #[test]
    fn insert_with_dangling_parent_is_a_validation_error() {
        let connection = get_test_connection();

        let result = insert_category(&new_category("Coffee", Some(42)), &connection);

        assert!(matches!(result, Err(Error::Validation(_))), "{result:?}");
    }

    #[test]
    fn select_categories_orders_parents_first() {
        let connection = get_test_connection();
        let parent = insert_category(&new_category("Food", None), &connection).unwrap();
        insert_category(&new_category("Coffee", Some(parent.id)), &connection).unwrap();
        insert_category(&new_category("Bills", None), &connection).unwrap();

        let categories = select_categories(&connection).unwrap();

        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Bills", "Food", "Coffee"]);
    }

    #[test]
    fn update_leaves_kind_untouched() {
        let connection = get_test_connection();
        let category = insert_category(&new_category("Food", None), &connection).unwrap();

        update_category(
            category.id,
            &UpdateCategory {
                name: "Dining".to_owned(),
                color: "#f59e0b".to_owned(),
                icon: "coffee".to_owned(),
            },
            &connection,
        )
        .unwrap();

        let updated = select_category(category.id, &connection).unwrap();
        assert_eq!(updated.name, "Dining");
        assert_eq!(updated.kind, CategoryKind::Expense);
        assert_eq!(updated.parent_id, None);
    }
}
