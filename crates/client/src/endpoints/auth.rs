//! Authentication endpoints.

use payflow_auth::{Principal, Role};
use serde_json::json;

use crate::error::ApiResult;
use crate::gateway::ApiGateway;

impl ApiGateway {
    /// `POST /auth/login`.
    ///
    /// Returns the principal-shaped payload with roles normalized to the
    /// canonical enum. Persisting the session and deciding where to land
    /// is the caller's concern, not the gateway's.
    pub async fn login(&self, username: &str, password: &str, role: Role) -> ApiResult<Principal> {
        self.post_json(
            "/auth/login",
            // The login form submits the bare role spelling.
            &json!({
                "username": username,
                "password": password,
                "role": role.as_str(),
            }),
        )
        .await
    }

    /// `POST /auth/reset-password`. Success or failure only.
    pub async fn reset_password(&self, new_password: &str) -> ApiResult<()> {
        self.post_unit(
            "/auth/reset-password",
            &json!({ "newPassword": new_password }),
        )
        .await
    }
}
