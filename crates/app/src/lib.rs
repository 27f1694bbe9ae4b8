//! `payflow-app`
//!
//! **Responsibility:** thin shell around the PayFlow API.
//!
//! This crate provides:
//! - The route table and per-subtree access guards
//! - Navigation resolution and the post-login redirect policy
//! - Pagination bookkeeping for paged lists
//! - UI-invokable command flows over the gateway and session store
//!
//! Rendering stays in the embedding UI; everything here is framework-free.

pub mod commands;
pub mod nav;
pub mod pagination;
pub mod routes;

pub use commands::AppState;
pub use nav::{Navigation, landing_route, resolve};
pub use pagination::Pager;
pub use routes::Route;
