use std::sync::Arc;

use axum::http::HeaderMap;
use serde::Serialize;
use utoipa::ToSchema;

use crate::authz::{resolve_district, Identity, PolicyTable};
use crate::backend::Backend;
use crate::errors::{AppError, AppResult};
use crate::models::session::SessionResponse;
use crate::models::user::UserDoc;

/// Success verdict of a permission check: who the caller is and, when the
/// operation is district-scoped, which district they ended up with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AccessGrant {
    pub user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
}

/// Composes session resolution, the role policy, and district scoping into
/// the two checks exposed to callers. Holds no state of its own; every check
/// asks the backend afresh.
pub struct AuthService {
    backend: Arc<dyn Backend>,
    policy: Arc<PolicyTable>,
}

impl AuthService {
    pub fn new(backend: Arc<dyn Backend>, policy: Arc<PolicyTable>) -> Self {
        Self { backend, policy }
    }

    /// Establish who is calling. This is the only place an [`Identity`] is
    /// built from outside input; a session without a named user is treated
    /// the same as no session at all.
    async fn resolve_identity(&self, headers: &HeaderMap) -> AppResult<Identity> {
        let body = self
            .backend
            .get_json("/_session", headers)
            .await
            .map_err(|err| AppError::unauthorized(err.to_string()))?;

        serde_json::from_value::<SessionResponse>(body)
            .ok()
            .and_then(|session| session.user_ctx)
            .and_then(|ctx| match ctx.name {
                Some(name) if !name.is_empty() => {
                    Some(Identity::new(name).with_roles(ctx.roles))
                }
                _ => None,
            })
            .ok_or_else(|| AppError::unauthorized("Not logged in"))
    }

    async fn fetch_profile(&self, name: &str, headers: &HeaderMap) -> AppResult<UserDoc> {
        let path = format!("/_users/org.couchdb.user:{name}");
        let body = self
            .backend
            .get_json(&path, headers)
            .await
            .map_err(|err| AppError::upstream(err.to_string()))?;

        // A body without the expected fields (or not an object at all) is an
        // unrestricted profile, not an error.
        Ok(serde_json::from_value(body).unwrap_or_default())
    }

    /// Full permission + district-scope check. The profile fetch only
    /// happens once the permission check has passed; a denied caller must
    /// not trigger a profile read.
    pub async fn check_permission(
        &self,
        headers: &HeaderMap,
        permission: &str,
        district_request: Option<&str>,
    ) -> AppResult<AccessGrant> {
        let identity = self.resolve_identity(headers).await?;

        if identity.is_admin() {
            return Ok(AccessGrant {
                user: identity.name,
                district: None,
            });
        }

        if !self.policy.allows(&identity, permission) {
            tracing::debug!(
                user = %identity.name,
                permission = %permission,
                "permission denied"
            );
            return Err(AppError::forbidden("Insufficient privileges"));
        }

        let profile = self.fetch_profile(&identity.name, headers).await?;
        let district = resolve_district(district_request, profile.facility_id.as_deref())?;

        Ok(AccessGrant {
            user: identity.name,
            district,
        })
    }

    /// Reachability probe: whether `path` answers with the caller's
    /// credentials. The status code is handed back uninterpreted; the
    /// backend owns the permission semantics of arbitrary paths.
    pub async fn check_url(&self, headers: &HeaderMap, path: Option<&str>) -> AppResult<u16> {
        let path = match path {
            Some(path) if !path.is_empty() => path,
            _ => return Err(AppError::bad_request("No path given")),
        };

        self.backend
            .head(path, headers)
            .await
            .map_err(|err| AppError::upstream(err.to_string()))
    }
}
