//! Defines the endpoint for updating a category.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState, Error,
    category::{Category, UpdateCategory, core},
    database_id::CategoryId,
    extract::ApiJson,
};

/// A route handler for updating a category's name, color and icon.
///
/// The kind and parent are immutable after creation and are not part of the
/// payload.
pub async fn edit_category_endpoint(
    State(state): State<AppState>,
    Path(category_id): Path<CategoryId>,
    ApiJson(payload): ApiJson<UpdateCategory>,
) -> Result<Json<Category>, Error> {
    let connection = state.connection()?;

    core::update_category(category_id, &payload, &connection)?;

    Ok(Json(core::select_category(category_id, &connection)?))
}
