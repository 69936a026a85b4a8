//! Defines the endpoint for deleting a category.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    AppState, Error,
    category::core::{count_subcategories, count_transactions_for_category, delete_category},
    database_id::CategoryId,
};

/// A route handler for deleting a category.
///
/// The delete is rejected with a conflict while the category has
/// subcategories or any transaction references it. Each guard is checked
/// independently and either alone blocks the delete; there is no cascade.
pub async fn delete_category_endpoint(
    State(state): State<AppState>,
    Path(category_id): Path<CategoryId>,
) -> Result<StatusCode, Error> {
    let connection = state.connection()?;

    if count_subcategories(category_id, &connection)? > 0 {
        return Err(Error::Conflict(
            "Cannot delete category with subcategories".to_owned(),
        ));
    }

    if count_transactions_for_category(category_id, &connection)? > 0 {
        return Err(Error::Conflict(
            "Cannot delete category with transactions".to_owned(),
        ));
    }

    delete_category(category_id, &connection)?;

    Ok(StatusCode::NO_CONTENT)
}
