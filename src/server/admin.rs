//! Admin dashboard handlers. The guard middleware has already established
//! the admin role by the time these run.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::item::{self, ListItemFilters};
use crate::core::{category, views};
use crate::errors::Error;
use crate::server::SharedState;

/// Wire shape of `GET /admin/dashboard`.
#[derive(Debug, Serialize)]
pub struct Dashboard {
    /// Aggregate counts over the whole inventory
    pub stats: views::InventoryStats,
    /// Grouped inventory for the overview table
    pub by_category: Vec<views::CategoryGroup>,
}

/// `GET /admin/dashboard` - stats and groupings for the admin overview.
pub async fn dashboard(State(state): State<SharedState>) -> Result<Json<Dashboard>, Error> {
    let items = item::list_items(&state.db, &ListItemFilters::default()).await?;
    let categories = category::list_categories(&state.db).await?;

    Ok(Json(Dashboard {
        stats: views::inventory_stats(&items),
        by_category: views::group_by_category(&items, &categories),
    }))
}
