//! Defines the endpoint for creating a new category.

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState, Error,
    category::{Category, NewCategory, core::insert_category},
    extract::ApiJson,
};

/// A route handler for creating a new category.
///
/// A `parent_id` makes the new category a subcategory; its effective kind is
/// its parent's kind. Responds with 201 and the created category.
pub async fn create_category_endpoint(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewCategory>,
) -> Result<(StatusCode, Json<Category>), Error> {
    let connection = state.connection()?;

    let category = insert_category(&payload, &connection)?;

    Ok((StatusCode::CREATED, Json(category)))
}

#[cfg(test)]
mod tests {
    use axum::extract::State;
    use axum::http::StatusCode;
    use rusqlite::Connection;

    use crate::{
        AppState, Error,
        category::{CategoryKind, NewCategory},
        extract::ApiJson,
    };

    use super::create_category_endpoint;

    fn get_test_state() -> AppState {
        let connection = Connection::open_in_memory().unwrap();
        AppState::new(connection, "UTC").unwrap()
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

    #[tokio::test]
    async fn creates_parent_and_subcategory() {
        let state = get_test_state();

        let (status, parent) =
            create_category_endpoint(State(state.clone()), ApiJson(new_category("Food", None)))
                .await
                .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let (_, child) = create_category_endpoint(
            State(state),
            ApiJson(new_category("Coffee", Some(parent.id))),
        )
        .await
        .unwrap();

        assert_eq!(child.parent_id, Some(parent.id));
    }

    #[tokio::test]
    async fn dangling_parent_is_a_validation_error() {
        let state = get_test_state();

        let result =
            create_category_endpoint(State(state), ApiJson(new_category("Coffee", Some(42)))).await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }
}
