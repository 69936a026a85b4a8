//! Defines the endpoint for getting one category.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState, Error,
    category::{Category, core::select_category},
    database_id::CategoryId,
};

/// A route handler that returns one category, or a 404 when the ID is
/// unknown.
pub async fn get_category_endpoint(
    State(state): State<AppState>,
    Path(category_id): Path<CategoryId>,
) -> Result<Json<Category>, Error> {
    let connection = state.connection()?;

    Ok(Json(select_category(category_id, &connection)?))
}
