//! Tag handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};

use crate::core::tag::{self, CreateTag, UpdateTag};
use crate::entities::tag::Model as Tag;
use crate::errors::Error;
use crate::server::{SharedState, identity};

/// `GET /api/tags` - all tags, ordered by name.
pub async fn list_tags(State(state): State<SharedState>) -> Result<Json<Vec<Tag>>, Error> {
    let tags = tag::list_tags(&state.db).await?;
    Ok(Json(tags))
}

/// `GET /api/tags/:id`
pub async fn get_tag(
    State(state): State<SharedState>,
    Path(tag_id): Path<i64>,
) -> Result<Json<Tag>, Error> {
    let tag = tag::get_tag(&state.db, tag_id).await?;
    Ok(Json(tag))
}

/// `POST /api/tags`
pub async fn create_tag(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(mut draft): Json<CreateTag>,
) -> Result<(StatusCode, Json<Tag>), Error> {
    if draft.created_by.is_none() {
        draft.created_by = identity(&headers);
    }

    let created = tag::create_tag(&state.db, draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PATCH /api/tags/:id`
pub async fn update_tag(
    State(state): State<SharedState>,
    Path(tag_id): Path<i64>,
    Json(patch): Json<UpdateTag>,
) -> Result<Json<Tag>, Error> {
    let updated = tag::update_tag(&state.db, tag_id, patch).await?;
    Ok(Json(updated))
}

/// `DELETE /api/tags/:id`
pub async fn delete_tag(
    State(state): State<SharedState>,
    Path(tag_id): Path<i64>,
) -> Result<StatusCode, Error> {
    tag::delete_tag(&state.db, tag_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
