mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod get_endpoint;
mod list_endpoint;

pub(crate) mod core;

pub use core::{Category, CategoryKind, NewCategory, UpdateCategory, create_categories_table};
pub use create_endpoint::create_category_endpoint;
pub use delete_endpoint::delete_category_endpoint;
pub use edit_endpoint::edit_category_endpoint;
pub use get_endpoint::get_category_endpoint;
pub use list_endpoint::list_categories_endpoint;
