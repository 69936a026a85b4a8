//! The built-in default data the store falls back to when the server cannot
//! be reached on initial load.

use rust_decimal::Decimal;

use crate::{
    account::{Account, AccountKind},
    category::{Category, CategoryKind},
    database_id::{AccountId, CategoryId},
};

fn account(
    id: AccountId,
    name: &str,
    kind: AccountKind,
    color: &str,
    icon: &str,
    initial_balance: i64,
    currency: &str,
) -> Account {
    Account {
        id,
        name: name.to_owned(),
        kind,
        color: color.to_owned(),
        icon: icon.to_owned(),
        initial_balance: Decimal::from(initial_balance),
        currency: currency.to_owned(),
        created_at: String::new(),
        updated_at: String::new(),
        balance: Decimal::from(initial_balance),
    }
}

fn category(
    id: CategoryId,
    name: &str,
    kind: CategoryKind,
    color: &str,
    icon: &str,
    parent_id: Option<CategoryId>,
) -> Category {
    Category {
        id,
        name: name.to_owned(),
        kind,
        color: color.to_owned(),
        icon: icon.to_owned(),
        parent_id,
        created_at: String::new(),
        updated_at: String::new(),
    }
}

/// The default account set.
pub fn default_accounts() -> Vec<Account> {
    use AccountKind::{Bank, Cash, Digital};

    vec![
        account(1, "Cash", Cash, "#10b981", "banknote", 500, "CAD"),
        account(2, "Bank of China", Bank, "#3b82f6", "building-2", 5_000, "CNY"),
        account(3, "WeChat Pay", Digital, "#22c55e", "smartphone", 1_000, "CNY"),
        account(4, "Alipay", Digital, "#06b6d4", "credit-card", 1_500, "CNY"),
    ]
}

/// The default category tree: expense parents with their subcategories,
/// followed by the income categories.
pub fn default_categories() -> Vec<Category> {
    use CategoryKind::{Expense, Income};

    vec![
        category(1, "Food", Expense, "#ef4444", "utensils", None),
        category(101, "Dining Out", Expense, "#ef4444", "utensils", Some(1)),
        category(102, "Groceries", Expense, "#ef4444", "shopping-cart", Some(1)),
        category(103, "Coffee", Expense, "#ef4444", "coffee", Some(1)),
        category(2, "Transport", Expense, "#f59e0b", "car", None),
        category(201, "Subway", Expense, "#f59e0b", "train", Some(2)),
        category(202, "Taxi", Expense, "#f59e0b", "car", Some(2)),
        category(203, "Gas", Expense, "#f59e0b", "fuel", Some(2)),
        category(3, "Shopping", Expense, "#ec4899", "shopping-bag", None),
        category(301, "Clothes", Expense, "#ec4899", "shirt", Some(3)),
        category(302, "Electronics", Expense, "#ec4899", "smartphone", Some(3)),
        category(303, "Home", Expense, "#ec4899", "home", Some(3)),
        category(4, "Entertainment", Expense, "#8b5cf6", "gamepad-2", None),
        category(401, "Movies", Expense, "#8b5cf6", "film", Some(4)),
        category(402, "Games", Expense, "#8b5cf6", "gamepad-2", Some(4)),
        category(403, "Subscriptions", Expense, "#8b5cf6", "tv", Some(4)),
        category(5, "Bills", Expense, "#10b981", "receipt", None),
        category(501, "Rent", Expense, "#10b981", "home", Some(5)),
        category(502, "Utilities", Expense, "#10b981", "zap", Some(5)),
        category(503, "Phone", Expense, "#10b981", "phone", Some(5)),
        category(6, "Health", Expense, "#06b6d4", "heart-pulse", None),
        category(7, "Other", Expense, "#64748b", "more-horizontal", None),
        category(8, "Salary", Income, "#22c55e", "briefcase", None),
        category(9, "Bonus", Income, "#fbbf24", "trophy", None),
        category(10, "Investment", Income, "#14b8a6", "trending-up", None),
        category(11, "Freelance", Income, "#a78bfa", "users", None),
        category(12, "Other Income", Income, "#64748b", "more-horizontal", None),
    ]
}
