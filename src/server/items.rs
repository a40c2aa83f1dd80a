//! Item handlers - CRUD plus association management.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
};
use serde::Deserialize;

use crate::core::item::{
    self, CreateItem, ItemWithRelations, ListItemFilters, UpdateItem,
};
use crate::entities::{ItemCategoryModel, ItemModel, ItemTagModel};
use crate::errors::Error;
use crate::server::{SharedState, identity};

/// `GET /api/items` - all items with relations, filters in the query string.
pub async fn list_items(
    State(state): State<SharedState>,
    Query(filters): Query<ListItemFilters>,
) -> Result<Json<Vec<ItemWithRelations>>, Error> {
    let items = item::list_items(&state.db, &filters).await?;
    Ok(Json(items))
}

/// `GET /api/items/:id`
pub async fn get_item(
    State(state): State<SharedState>,
    Path(item_id): Path<i64>,
) -> Result<Json<ItemWithRelations>, Error> {
    let item = item::get_item(&state.db, item_id).await?;
    Ok(Json(item))
}

/// `POST /api/items` - creates an item; the creator defaults to the
/// authenticated identity when the draft does not name one.
pub async fn create_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(mut draft): Json<CreateItem>,
) -> Result<(StatusCode, Json<ItemModel>), Error> {
    if draft.created_by.is_none() {
        draft.created_by = identity(&headers);
    }

    let created = item::create_item(&state.db, draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PATCH /api/items/:id`
pub async fn update_item(
    State(state): State<SharedState>,
    Path(item_id): Path<i64>,
    Json(patch): Json<UpdateItem>,
) -> Result<Json<ItemModel>, Error> {
    let updated = item::update_item(&state.db, item_id, patch).await?;
    Ok(Json(updated))
}

/// `DELETE /api/items/:id`
pub async fn delete_item(
    State(state): State<SharedState>,
    Path(item_id): Path<i64>,
) -> Result<StatusCode, Error> {
    item::delete_item(&state.db, item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Body for adding a single category association.
#[derive(Debug, Deserialize)]
pub struct AddCategory {
    pub category_id: i64,
}

/// Body for replacing the full category set.
#[derive(Debug, Deserialize)]
pub struct ReplaceCategories {
    pub category_ids: Vec<i64>,
}

/// `POST /api/items/:id/categories`
pub async fn add_category(
    State(state): State<SharedState>,
    Path(item_id): Path<i64>,
    Json(body): Json<AddCategory>,
) -> Result<(StatusCode, Json<ItemCategoryModel>), Error> {
    let join = item::add_item_to_category(&state.db, item_id, body.category_id).await?;
    Ok((StatusCode::CREATED, Json(join)))
}

/// `PUT /api/items/:id/categories` - replaces the full set atomically.
pub async fn replace_categories(
    State(state): State<SharedState>,
    Path(item_id): Path<i64>,
    Json(body): Json<ReplaceCategories>,
) -> Result<StatusCode, Error> {
    item::set_item_categories(&state.db, item_id, &body.category_ids).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/items/:id/categories`
pub async fn remove_all_categories(
    State(state): State<SharedState>,
    Path(item_id): Path<i64>,
) -> Result<StatusCode, Error> {
    item::remove_all_categories_from_item(&state.db, item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/items/:id/categories/:category_id`
pub async fn remove_category(
    State(state): State<SharedState>,
    Path((item_id, category_id)): Path<(i64, i64)>,
) -> Result<StatusCode, Error> {
    item::remove_item_from_category(&state.db, item_id, category_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Body for adding a single tag association.
#[derive(Debug, Deserialize)]
pub struct AddTag {
    pub tag_id: i64,
}

/// Body for replacing the full tag set.
#[derive(Debug, Deserialize)]
pub struct ReplaceTags {
    pub tag_ids: Vec<i64>,
}

/// `POST /api/items/:id/tags`
pub async fn add_tag(
    State(state): State<SharedState>,
    Path(item_id): Path<i64>,
    Json(body): Json<AddTag>,
) -> Result<(StatusCode, Json<ItemTagModel>), Error> {
    let join = item::add_tag_to_item(&state.db, item_id, body.tag_id).await?;
    Ok((StatusCode::CREATED, Json(join)))
}

/// `PUT /api/items/:id/tags` - replaces the full set atomically.
pub async fn replace_tags(
    State(state): State<SharedState>,
    Path(item_id): Path<i64>,
    Json(body): Json<ReplaceTags>,
) -> Result<StatusCode, Error> {
    item::set_item_tags(&state.db, item_id, &body.tag_ids).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/items/:id/tags`
pub async fn remove_all_tags(
    State(state): State<SharedState>,
    Path(item_id): Path<i64>,
) -> Result<StatusCode, Error> {
    item::remove_all_tags_from_item(&state.db, item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/items/:id/tags/:tag_id`
pub async fn remove_tag(
    State(state): State<SharedState>,
    Path((item_id, tag_id)): Path<(i64, i64)>,
) -> Result<StatusCode, Error> {
    item::remove_tag_from_item(&state.db, item_id, tag_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
