//! Navigation resolution and the post-login redirect policy.

use payflow_auth::{GuardOutcome, Principal, Role};

use crate::routes::Route;

/// Result of resolving a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Render the destination page.
    Render(Route),
    /// Navigate to a different route instead.
    Redirect(Route),
}

impl Navigation {
    /// The route this navigation ends up pointing at, render or redirect.
    pub fn route(&self) -> Route {
        match self {
            Navigation::Render(route) | Navigation::Redirect(route) => *route,
        }
    }
}

/// Resolve `path` against the current principal.
///
/// Subtree index paths redirect to their default child; the caller
/// re-resolves the target on the next hop, exactly like a client-side
/// router following a redirect. Unknown paths collapse to the login entry
/// point (there is no dedicated not-found page).
pub fn resolve(path: &str, principal: Option<&Principal>) -> Navigation {
    let path = path.trim_end_matches('/');

    match path {
        "/admin" => return Navigation::Redirect(Route::AdminDashboard),
        "/dashboard" => return Navigation::Redirect(Route::DashboardHome),
        "/employee" => return Navigation::Redirect(Route::EmployeeLeave),
        _ => {}
    }

    let Some(route) = Route::from_path(path) else {
        return Navigation::Redirect(Route::Login);
    };

    let Some(guard) = route.guard() else {
        return Navigation::Render(route);
    };

    match guard.check(principal) {
        GuardOutcome::Render => Navigation::Render(route),
        GuardOutcome::RedirectToLogin => Navigation::Redirect(Route::Login),
        GuardOutcome::RedirectToPasswordReset => Navigation::Redirect(Route::ResetPassword),
    }
}

/// Where a fresh login lands.
///
/// A first-time login is forced into the password-reset flow before any
/// role-based destination. Role precedence is admin, then HR/manager,
/// then employee; a principal matching none of these goes back to login.
pub fn landing_route(principal: &Principal) -> Route {
    if principal.first_time_login {
        return Route::ResetPassword;
    }

    if principal.has_role(Role::Admin) {
        Route::AdminDashboard
    } else if principal.has_role(Role::Hr) || principal.has_role(Role::Manager) {
        Route::DashboardHome
    } else if principal.has_role(Role::Employee) {
        Route::EmployeeLeave
    } else {
        Route::Login
    }
}
