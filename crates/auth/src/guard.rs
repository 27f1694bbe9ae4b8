//! Access policy for protected routes.

use crate::{Principal, Role};

/// Required role set for a protected route subtree.
///
/// Stateless: defined once per subtree, evaluated per navigation against
/// the current principal, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteGuard {
    required: &'static [Role],
}

impl RouteGuard {
    pub const fn new(required: &'static [Role]) -> Self {
        Self { required }
    }

    pub fn required(&self) -> &'static [Role] {
        self.required
    }

    pub fn check(&self, principal: Option<&Principal>) -> GuardOutcome {
        decide(principal, self.required)
    }
}

/// Navigational outcome for a guarded route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the requested destination.
    Render,
    /// Send the visitor to the login entry point.
    ///
    /// There is deliberately no separate "forbidden" outcome: an
    /// authenticated principal with the wrong role collapses into the same
    /// redirect as an unauthenticated visitor.
    RedirectToLogin,
    /// Send the visitor to the forced password-reset entry point.
    RedirectToPasswordReset,
}

/// Decide the outcome of navigating to a route guarded by `required`.
///
/// Evaluated in order: absent principal redirects to login; a principal
/// whose roles do not intersect `required` redirects to login; a
/// first-time login redirects to password reset; otherwise render.
///
/// The role check runs before the first-login check: a principal lacking
/// every required role must never reach the reset page through a protected
/// subtree.
///
/// - No IO
/// - No panics
pub fn decide(principal: Option<&Principal>, required: &[Role]) -> GuardOutcome {
    let Some(principal) = principal else {
        return GuardOutcome::RedirectToLogin;
    };

    if !principal.has_any_role(required) {
        return GuardOutcome::RedirectToLogin;
    }

    if principal.first_time_login {
        return GuardOutcome::RedirectToPasswordReset;
    }

    GuardOutcome::Render
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn principal(roles: Vec<Role>, first_time_login: bool) -> Principal {
        Principal {
            token: "t1".to_string(),
            username: "jdoe".to_string(),
            email: None,
            roles,
            first_time_login,
        }
    }

    #[test]
    fn absent_principal_redirects_to_login() {
        assert_eq!(
            decide(None, &[Role::Admin]),
            GuardOutcome::RedirectToLogin
        );
        assert_eq!(
            decide(None, &[Role::Hr, Role::Manager]),
            GuardOutcome::RedirectToLogin
        );
    }

    #[test]
    fn disjoint_roles_redirect_to_login() {
        let p = principal(vec![Role::Employee], false);
        assert_eq!(
            decide(Some(&p), &[Role::Admin]),
            GuardOutcome::RedirectToLogin
        );
    }

    #[test]
    fn empty_role_set_is_never_authorized() {
        let p = principal(vec![], false);
        assert_eq!(
            decide(Some(&p), &[Role::Employee]),
            GuardOutcome::RedirectToLogin
        );
    }

    #[test]
    fn matching_role_renders() {
        let p = principal(vec![Role::Manager], false);
        assert_eq!(
            decide(Some(&p), &[Role::Hr, Role::Manager]),
            GuardOutcome::Render
        );
    }

    #[test]
    fn first_login_takes_precedence_over_render() {
        let p = principal(vec![Role::Admin], true);
        assert_eq!(
            decide(Some(&p), &[Role::Admin]),
            GuardOutcome::RedirectToPasswordReset
        );
    }

    #[test]
    fn role_check_runs_before_first_login_check() {
        // A first-time principal with the wrong role must not see the reset
        // page through this subtree.
        let p = principal(vec![Role::Employee], true);
        assert_eq!(
            decide(Some(&p), &[Role::Admin]),
            GuardOutcome::RedirectToLogin
        );
    }

    #[test]
    fn guard_descriptor_delegates_to_decide() {
        const GUARD: RouteGuard = RouteGuard::new(&[Role::Admin]);

        let p = principal(vec![Role::Admin], false);
        assert_eq!(GUARD.check(Some(&p)), GuardOutcome::Render);
        assert_eq!(GUARD.check(None), GuardOutcome::RedirectToLogin);
    }

    fn role_subset() -> impl Strategy<Value = Vec<Role>> {
        prop::sample::subsequence(Role::ALL.to_vec(), 0..=Role::ALL.len())
    }

    proptest! {
        /// For any principal whose roles are disjoint from the required set
        /// (including the empty set), the guard redirects to login, whatever
        /// the first-login flag says.
        #[test]
        fn disjoint_roles_always_redirect_to_login(
            held in role_subset(),
            required in role_subset(),
            first_time_login in any::<bool>(),
        ) {
            prop_assume!(!required.iter().any(|r| held.contains(r)));

            let p = principal(held, first_time_login);
            prop_assert_eq!(decide(Some(&p), &required), GuardOutcome::RedirectToLogin);
        }

        /// For any principal with an intersecting role set and the
        /// first-login flag set, the guard redirects to password reset.
        #[test]
        fn first_login_with_matching_roles_always_redirects_to_reset(
            held in role_subset(),
            required in role_subset(),
        ) {
            prop_assume!(required.iter().any(|r| held.contains(r)));

            let p = principal(held, true);
            prop_assert_eq!(decide(Some(&p), &required), GuardOutcome::RedirectToPasswordReset);
        }

        /// Intersecting roles without the first-login flag always render.
        #[test]
        fn matching_roles_without_first_login_always_render(
            held in role_subset(),
            required in role_subset(),
        ) {
            prop_assume!(required.iter().any(|r| held.contains(r)));

            let p = principal(held, false);
            prop_assert_eq!(decide(Some(&p), &required), GuardOutcome::Render);
        }
    }
}
