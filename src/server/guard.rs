//! Admin guard middleware.
//!
//! Runs once per request. For paths under the restricted prefix the current
//! identity's roles are resolved and the pure guard decision applied; a
//! denial becomes a `303 See Other` to the public landing route, replacing
//! the navigation instead of stacking on it. All other paths pass through
//! without touching the database.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::core::guard::{GuardDecision, RESTRICTED_PREFIX, evaluate_navigation};
use crate::core::roles::{RoleSet, get_user_roles};
use crate::server::{SharedState, identity};

/// Middleware guarding the `/admin` section.
pub async fn admin_guard(
    State(state): State<SharedState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();

    let roles = if path.starts_with(RESTRICTED_PREFIX) {
        let user = identity(request.headers());
        match get_user_roles(&state.db, user.as_deref()).await {
            Ok(roles) => roles,
            Err(error) => return error.into_response(),
        }
    } else {
        RoleSet::default()
    };

    match evaluate_navigation(&path, &roles) {
        GuardDecision::Allowed => next.run(request).await,
        GuardDecision::Denied { redirect } => Redirect::to(&redirect).into_response(),
    }
}
