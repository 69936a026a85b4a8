//! Defines the endpoint for listing categories.

use axum::{Json, extract::State};

use crate::{
    AppState, Error,
    category::{Category, core::select_categories},
};

/// A route handler that lists every category, ordered by kind, parents
/// before subcategories, then name.
pub async fn list_categories_endpoint(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, Error> {
    let connection = state.connection()?;

    Ok(Json(select_categories(&connection)?))
}
