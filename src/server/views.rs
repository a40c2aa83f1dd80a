//! Derived-view handlers.
//!
//! Each handler fetches a fresh snapshot through the data-access layer and
//! runs the pure view computation over it; nothing is cached between
//! requests.

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Query, State},
};

use crate::core::category;
use crate::core::item::{self, ItemWithRelations, ListItemFilters};
use crate::core::views::{self, CategoryGroup, InventoryStats, ItemCriteria};
use crate::entities::ItemStatus;
use crate::errors::Error;
use crate::server::SharedState;

/// `GET /api/inventory/by-category`
pub async fn by_category(
    State(state): State<SharedState>,
) -> Result<Json<Vec<CategoryGroup>>, Error> {
    let items = item::list_items(&state.db, &ListItemFilters::default()).await?;
    let categories = category::list_categories(&state.db).await?;
    Ok(Json(views::group_by_category(&items, &categories)))
}

/// `GET /api/inventory/by-status`
pub async fn by_status(
    State(state): State<SharedState>,
) -> Result<Json<BTreeMap<ItemStatus, Vec<ItemWithRelations>>>, Error> {
    let items = item::list_items(&state.db, &ListItemFilters::default()).await?;
    Ok(Json(views::group_by_status(&items)))
}

/// `GET /api/inventory/low-stock`
pub async fn low_stock(
    State(state): State<SharedState>,
) -> Result<Json<Vec<ItemWithRelations>>, Error> {
    let items = item::list_items(&state.db, &ListItemFilters::default()).await?;
    Ok(Json(views::low_stock_items(&items)))
}

/// `GET /api/inventory/expiring`
pub async fn expiring(
    State(state): State<SharedState>,
) -> Result<Json<Vec<ItemWithRelations>>, Error> {
    let items = item::list_items(&state.db, &ListItemFilters::default()).await?;
    let today = chrono::Utc::now().date_naive();
    Ok(Json(views::expiring_soon_items(&items, today)))
}

/// `GET /api/inventory/stats`
pub async fn stats(State(state): State<SharedState>) -> Result<Json<InventoryStats>, Error> {
    let items = item::list_items(&state.db, &ListItemFilters::default()).await?;
    Ok(Json(views::inventory_stats(&items)))
}

/// `GET /api/inventory/search` - criteria filtering over the full snapshot.
pub async fn search(
    State(state): State<SharedState>,
    Query(criteria): Query<ItemCriteria>,
) -> Result<Json<Vec<ItemWithRelations>>, Error> {
    let items = item::list_items(&state.db, &ListItemFilters::default()).await?;
    Ok(Json(views::filter_items(&items, &criteria)))
}
