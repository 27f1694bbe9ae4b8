//! Leave-workflow endpoints.

use serde_json::json;

use crate::dto::{LeaveBalance, LeaveRequest, LeaveStatus, NewLeaveRequest};
use crate::error::ApiResult;
use crate::gateway::ApiGateway;

impl ApiGateway {
    /// `GET /leave/my-balances`.
    pub async fn my_leave_balances(&self) -> ApiResult<Vec<LeaveBalance>> {
        self.get_json("/leave/my-balances").await
    }

    /// `GET /leave/my-requests`.
    pub async fn my_leave_requests(&self) -> ApiResult<Vec<LeaveRequest>> {
        self.get_json("/leave/my-requests").await
    }

    /// `POST /leave/requests`.
    pub async fn submit_leave_request(&self, request: &NewLeaveRequest) -> ApiResult<LeaveRequest> {
        self.post_json("/leave/requests", request).await
    }

    /// `GET /leave/requests/pending`.
    pub async fn pending_leave_requests(&self) -> ApiResult<Vec<LeaveRequest>> {
        self.get_json("/leave/requests/pending").await
    }

    /// `PUT /leave/requests/{id}/status`. Approval policy lives on the
    /// server; this is a plain status write.
    pub async fn update_leave_request_status(
        &self,
        request_id: i64,
        status: LeaveStatus,
    ) -> ApiResult<LeaveRequest> {
        self.put_json(
            &format!("/leave/requests/{request_id}/status"),
            &json!({ "status": status }),
        )
        .await
    }
}
