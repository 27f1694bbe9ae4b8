//! Gateway operations grouped by backend area, one module per area.

mod admin;
mod auth;
mod employees;
mod leave;
