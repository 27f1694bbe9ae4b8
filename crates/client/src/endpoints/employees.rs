//! HR/Manager endpoints: dashboard stats and employee CRUD.

use crate::dto::{DashboardStats, EmployeeRecord, OnboardEmployee};
use crate::error::ApiResult;
use crate::gateway::ApiGateway;

impl ApiGateway {
    /// `GET /dashboard/stats`.
    pub async fn dashboard_stats(&self) -> ApiResult<DashboardStats> {
        self.get_json("/dashboard/stats").await
    }

    /// `GET /dashboard/employees`.
    pub async fn list_employees(&self) -> ApiResult<Vec<EmployeeRecord>> {
        self.get_json("/dashboard/employees").await
    }

    /// `POST /dashboard/employees`.
    pub async fn onboard_employee(&self, employee: &OnboardEmployee) -> ApiResult<EmployeeRecord> {
        self.post_json("/dashboard/employees", employee).await
    }

    /// `PUT /dashboard/employees/{id}`.
    pub async fn update_employee(
        &self,
        employee_id: i64,
        employee: &OnboardEmployee,
    ) -> ApiResult<EmployeeRecord> {
        self.put_json(&format!("/dashboard/employees/{employee_id}"), employee)
            .await
    }

    /// `DELETE /dashboard/employees/{id}`.
    pub async fn delete_employee(&self, employee_id: i64) -> ApiResult<()> {
        self.delete_unit(&format!("/dashboard/employees/{employee_id}"))
            .await
    }
}
