//! Current-user handlers.

use axum::{Json, extract::State, http::HeaderMap};
use serde::Serialize;

use crate::core::roles::{Capabilities, get_user_roles};
use crate::entities::Role;
use crate::errors::Error;
use crate::server::{SharedState, identity};

/// Wire shape of `GET /api/me`.
#[derive(Debug, Serialize)]
pub struct Me {
    /// The authenticated identity, if any
    pub user: Option<String>,
    /// Roles held (empty for anonymous or unassigned users)
    pub roles: Vec<Role>,
    /// Capability flags derived from the roles
    pub capabilities: Capabilities,
}

/// `GET /api/me` - roles and capabilities for the current identity.
///
/// Anonymous requests are not an error; they resolve to the empty role set
/// with every capability false.
pub async fn me(State(state): State<SharedState>, headers: HeaderMap) -> Result<Json<Me>, Error> {
    let user = identity(&headers);
    let roles = get_user_roles(&state.db, user.as_deref()).await?;
    let capabilities = Capabilities::from(&roles);

    Ok(Json(Me {
        user,
        roles: roles.roles(),
        capabilities,
    }))
}
