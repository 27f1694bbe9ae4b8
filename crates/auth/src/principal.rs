use serde::{Deserialize, Serialize};

use crate::Role;

/// The authenticated user's session record.
///
/// Created from a successful login response, persisted immediately, read
/// back on every app start, destroyed on logout. Exactly one principal is
/// active at a time (single-session client).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    /// Opaque bearer token for authenticated calls.
    pub token: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub roles: Vec<Role>,
    pub first_time_login: bool,
}

impl Principal {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// True when this principal holds at least one of `required`.
    ///
    /// An empty role set on either side never authorizes: a principal with
    /// no roles is not authorized for any protected route.
    pub fn has_any_role(&self, required: &[Role]) -> bool {
        required.iter().any(|role| self.roles.contains(role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(roles: Vec<Role>) -> Principal {
        Principal {
            token: "t1".to_string(),
            username: "jdoe".to_string(),
            email: None,
            roles,
            first_time_login: false,
        }
    }

    #[test]
    fn empty_role_set_matches_nothing() {
        let p = principal(vec![]);
        assert!(!p.has_any_role(&[Role::Admin]));
        assert!(!p.has_any_role(&Role::ALL));
        assert!(!p.has_any_role(&[]));
    }

    #[test]
    fn intersection_is_any_not_all() {
        let p = principal(vec![Role::Hr]);
        assert!(p.has_any_role(&[Role::Hr, Role::Manager]));
        assert!(!p.has_any_role(&[Role::Admin]));
    }

    #[test]
    fn deserializes_wire_payload() {
        let p: Principal = serde_json::from_str(
            r#"{"token":"t1","username":"jdoe","roles":["ROLE_EMPLOYEE"],"firstTimeLogin":false}"#,
        )
        .unwrap();

        assert_eq!(p.roles, vec![Role::Employee]);
        assert!(!p.first_time_login);
        assert_eq!(p.email, None);
    }
}
