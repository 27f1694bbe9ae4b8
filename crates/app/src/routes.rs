//! Route table: URL paths, pages, and the guards protecting them.

use payflow_auth::{Role, RouteGuard};

/// Admin subtree (`/admin/**`).
pub const ADMIN_GUARD: RouteGuard = RouteGuard::new(&[Role::Admin]);

/// Shared HR/Manager subtree (`/dashboard/**`).
pub const STAFF_GUARD: RouteGuard = RouteGuard::new(&[Role::Hr, Role::Manager]);

/// Manager-only pages nested inside the shared HR/Manager subtree.
///
/// The nested requirement is strictly tighter than the subtree's, so a
/// single guard with the tighter set decides identically to evaluating
/// both in sequence.
pub const MANAGER_GUARD: RouteGuard = RouteGuard::new(&[Role::Manager]);

/// Employee subtree (`/employee/**`).
pub const EMPLOYEE_GUARD: RouteGuard = RouteGuard::new(&[Role::Employee]);

/// A navigable page of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    ResetPassword,
    AdminDashboard,
    ManageUsers,
    DashboardHome,
    EmployeeList,
    Onboarding,
    LeaveManagement,
    LeaveApproval,
    EmployeeLeave,
    MyLeaveRequests,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::ResetPassword => "/reset-password",
            Route::AdminDashboard => "/admin/dashboard",
            Route::ManageUsers => "/admin/manage-users",
            Route::DashboardHome => "/dashboard/home",
            Route::EmployeeList => "/dashboard/employees",
            Route::Onboarding => "/dashboard/onboard",
            Route::LeaveManagement => "/dashboard/leave",
            Route::LeaveApproval => "/dashboard/approve-leave",
            Route::EmployeeLeave => "/employee/leave",
            Route::MyLeaveRequests => "/employee/my-requests",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        match path {
            "/login" => Some(Route::Login),
            "/reset-password" => Some(Route::ResetPassword),
            "/admin/dashboard" => Some(Route::AdminDashboard),
            "/admin/manage-users" => Some(Route::ManageUsers),
            "/dashboard/home" => Some(Route::DashboardHome),
            "/dashboard/employees" => Some(Route::EmployeeList),
            "/dashboard/onboard" => Some(Route::Onboarding),
            "/dashboard/leave" => Some(Route::LeaveManagement),
            "/dashboard/approve-leave" => Some(Route::LeaveApproval),
            "/employee/leave" => Some(Route::EmployeeLeave),
            "/employee/my-requests" => Some(Route::MyLeaveRequests),
            _ => None,
        }
    }

    /// The guard protecting this route, `None` for public entry points.
    pub fn guard(&self) -> Option<RouteGuard> {
        match self {
            Route::Login | Route::ResetPassword => None,
            Route::AdminDashboard | Route::ManageUsers => Some(ADMIN_GUARD),
            Route::DashboardHome | Route::EmployeeList | Route::Onboarding => Some(STAFF_GUARD),
            Route::LeaveManagement | Route::LeaveApproval => Some(MANAGER_GUARD),
            Route::EmployeeLeave | Route::MyLeaveRequests => Some(EMPLOYEE_GUARD),
        }
    }
}

impl core::fmt::Display for Route {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.path())
    }
}
