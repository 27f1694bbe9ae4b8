//! `payflow-auth` — pure session/RBAC boundary.
//!
//! This crate is intentionally decoupled from HTTP and UI rendering.

pub mod guard;
pub mod principal;
pub mod roles;
pub mod session;

pub use guard::{GuardOutcome, RouteGuard, decide};
pub use principal::Principal;
pub use roles::{Role, RoleParseError};
pub use session::{FileStorage, MemoryStorage, SessionStorage, SessionStore};
