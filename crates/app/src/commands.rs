//! UI-invokable flows: the shell's command layer.
//!
//! These flows are the only writers of the session store (login, reset,
//! logout); navigation decisions and session reads are synchronous with
//! respect to each other on the UI thread.

use std::sync::Arc;

use payflow_auth::{FileStorage, Principal, Role, SessionStore};
use payflow_client::{ApiGateway, ApiResult};

use crate::nav::{self, Navigation};
use crate::routes::Route;

/// Application state shared across UI commands.
#[derive(Debug, Clone)]
pub struct AppState {
    gateway: Arc<ApiGateway>,
    session: Arc<SessionStore>,
}

impl AppState {
    /// State over the per-user session file.
    pub fn new(api_url: impl Into<String>) -> anyhow::Result<Self> {
        let session = Arc::new(SessionStore::new(FileStorage::new()?));
        Ok(Self::with_session(api_url, session))
    }

    /// State over an injected session store (tests, alternate storage).
    pub fn with_session(api_url: impl Into<String>, session: Arc<SessionStore>) -> Self {
        let gateway = Arc::new(ApiGateway::new(api_url, session.clone()));
        Self { gateway, session }
    }

    pub fn gateway(&self) -> &ApiGateway {
        &self.gateway
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Rehydrate the persisted principal on app start.
    pub fn restore(&self) -> Option<Principal> {
        self.session.load()
    }

    /// Session-aware navigation resolution.
    pub fn navigate(&self, path: &str) -> Navigation {
        let principal = self.session.load();
        nav::resolve(path, principal.as_ref())
    }

    /// Log in and land on the role-appropriate home.
    ///
    /// The principal is persisted before navigating. A persist failure is
    /// logged and the in-memory flow continues; the session then simply
    /// does not survive a restart.
    pub async fn login(&self, username: &str, password: &str, role: Role) -> ApiResult<Route> {
        let principal = self.gateway.login(username, password, role).await?;

        if let Err(err) = self.session.save(&principal) {
            tracing::warn!("failed to persist session after login: {err:?}");
        }
        tracing::info!(username = %principal.username, "logged in");

        Ok(nav::landing_route(&principal))
    }

    /// Clear the session and return to the login entry point. Idempotent.
    pub fn logout(&self) -> Route {
        self.session.clear();
        tracing::info!("logged out");
        Route::Login
    }

    /// Change the password, then force a fresh login.
    pub async fn reset_password(&self, new_password: &str) -> ApiResult<Route> {
        self.gateway.reset_password(new_password).await?;
        Ok(self.logout())
    }
}
