//! Admin endpoints: dashboard stats and user management.

use serde_json::json;

use crate::dto::{AdminDashboardStats, NewUser, Page, PageQuery, UserRecord};
use crate::error::ApiResult;
use crate::gateway::ApiGateway;

impl ApiGateway {
    /// `GET /admin/dashboard/stats`.
    pub async fn admin_dashboard_stats(&self) -> ApiResult<AdminDashboardStats> {
        self.get_json("/admin/dashboard/stats").await
    }

    /// `GET /admin/users?page=..&size=..` (0-indexed pages).
    pub async fn list_users(&self, page: u32, size: u32) -> ApiResult<Page<UserRecord>> {
        self.get_json_with_query("/admin/users", &PageQuery { page, size })
            .await
    }

    /// `POST /admin/users`.
    pub async fn create_user(&self, user: &NewUser) -> ApiResult<UserRecord> {
        self.post_json("/admin/users", user).await
    }

    /// `PUT /admin/users/{id}/status`.
    pub async fn update_user_status(&self, user_id: i64, enabled: bool) -> ApiResult<UserRecord> {
        self.put_json(
            &format!("/admin/users/{user_id}/status"),
            &json!({ "enabled": enabled }),
        )
        .await
    }

    /// `GET /admin/users/export`. Raw CSV bytes, passed through untouched.
    pub async fn export_users_csv(&self) -> ApiResult<Vec<u8>> {
        self.get_bytes("/admin/users/export").await
    }
}
