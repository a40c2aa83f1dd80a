//! HTTP surface - routers, handlers, and the admin guard middleware.
//!
//! The server is thin glue over [`crate::core`]: handlers deserialize the
//! request, call a core function with the shared database connection, and
//! serialize the result. Authentication happens in front of this service;
//! the authenticated identity (or nothing) arrives in the `x-user-id`
//! header.

/// Admin dashboard handlers
pub mod admin;
/// Nameday calendar endpoint
pub mod calendar;
/// Category CRUD handlers
pub mod categories;
/// Admin guard middleware
pub mod guard;
/// Item CRUD and association handlers
pub mod items;
/// Tag CRUD handlers
pub mod tags;
/// Current-user roles endpoint
pub mod users;
/// Derived-view handlers
pub mod views;
/// Weather proxy endpoint
pub mod weather;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    http::{HeaderMap, HeaderName, Method, StatusCode, header::CONTENT_TYPE},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use sea_orm::DatabaseConnection;
use tokio::{
    net::TcpListener,
    signal::{
        ctrl_c,
        unix::{SignalKind, signal},
    },
};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::settings::AppConfig;
use crate::errors::{Error, Result};

/// Header carrying the authenticated identity, set by the fronting auth
/// proxy. Absent for anonymous requests.
pub const IDENTITY_HEADER: &str = "x-user-id";

/// Shared data available to all handlers.
pub struct AppState {
    /// Database connection for all database operations
    pub db: DatabaseConnection,
    /// Outbound HTTP client for the weather proxy
    pub http: reqwest::Client,
    /// Runtime settings
    pub config: AppConfig,
}

/// The state handle handlers extract.
pub type SharedState = Arc<AppState>;

impl AppState {
    /// Creates the shared state for the router.
    #[must_use]
    pub fn new(db: DatabaseConnection, config: AppConfig) -> SharedState {
        Arc::new(Self {
            db,
            http: reqwest::Client::new(),
            config,
        })
    }
}

/// Reads the authenticated identity from the request headers, if any.
#[must_use]
pub fn identity(headers: &HeaderMap) -> Option<String> {
    headers
        .get(IDENTITY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Validation { .. } => StatusCode::BAD_REQUEST,
            Error::Upstream { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

/// Builds the application router with all routes and layers.
pub fn router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(IDENTITY_HEADER)])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route(
            "/api/items",
            get(items::list_items).post(items::create_item),
        )
        .route(
            "/api/items/:id",
            get(items::get_item)
                .patch(items::update_item)
                .delete(items::delete_item),
        )
        .route(
            "/api/items/:id/categories",
            axum::routing::post(items::add_category)
                .put(items::replace_categories)
                .delete(items::remove_all_categories),
        )
        .route(
            "/api/items/:id/categories/:category_id",
            axum::routing::delete(items::remove_category),
        )
        .route(
            "/api/items/:id/tags",
            axum::routing::post(items::add_tag)
                .put(items::replace_tags)
                .delete(items::remove_all_tags),
        )
        .route(
            "/api/items/:id/tags/:tag_id",
            axum::routing::delete(items::remove_tag),
        )
        .route(
            "/api/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/api/categories/:id",
            get(categories::get_category)
                .patch(categories::update_category)
                .delete(categories::delete_category),
        )
        .route("/api/tags", get(tags::list_tags).post(tags::create_tag))
        .route(
            "/api/tags/:id",
            get(tags::get_tag)
                .patch(tags::update_tag)
                .delete(tags::delete_tag),
        )
        .route("/api/inventory/by-category", get(views::by_category))
        .route("/api/inventory/by-status", get(views::by_status))
        .route("/api/inventory/low-stock", get(views::low_stock))
        .route("/api/inventory/expiring", get(views::expiring))
        .route("/api/inventory/stats", get(views::stats))
        .route("/api/inventory/search", get(views::search))
        .route("/api/me", get(users::me))
        .route("/api/calendar/nameday", get(calendar::nameday))
        .route("/api/weather", get(weather::weather))
        .route("/admin/dashboard", get(admin::dashboard))
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            guard::admin_guard,
        ))
        .layer(cors)
        .with_state(state)
}

/// Binds the listener and serves until a shutdown signal arrives.
pub async fn run_server(state: SharedState) -> Result<()> {
    let address = format!("0.0.0.0:{}", state.config.port);
    let app = router(state);

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
