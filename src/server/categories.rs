//! Category handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};

use crate::core::category::{self, CreateCategory, UpdateCategory};
use crate::entities::category::Model as Category;
use crate::errors::Error;
use crate::server::{SharedState, identity};

/// `GET /api/categories` - all categories, ordered by name.
pub async fn list_categories(
    State(state): State<SharedState>,
) -> Result<Json<Vec<Category>>, Error> {
    let categories = category::list_categories(&state.db).await?;
    Ok(Json(categories))
}

/// `GET /api/categories/:id`
pub async fn get_category(
    State(state): State<SharedState>,
    Path(category_id): Path<i64>,
) -> Result<Json<Category>, Error> {
    let category = category::get_category(&state.db, category_id).await?;
    Ok(Json(category))
}

/// `POST /api/categories`
pub async fn create_category(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(mut draft): Json<CreateCategory>,
) -> Result<(StatusCode, Json<Category>), Error> {
    if draft.created_by.is_none() {
        draft.created_by = identity(&headers);
    }

    let created = category::create_category(&state.db, draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PATCH /api/categories/:id`
pub async fn update_category(
    State(state): State<SharedState>,
    Path(category_id): Path<i64>,
    Json(patch): Json<UpdateCategory>,
) -> Result<Json<Category>, Error> {
    let updated = category::update_category(&state.db, category_id, patch).await?;
    Ok(Json(updated))
}

/// `DELETE /api/categories/:id`
pub async fn delete_category(
    State(state): State<SharedState>,
    Path(category_id): Path<i64>,
) -> Result<StatusCode, Error> {
    category::delete_category(&state.db, category_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
