//! `payflow-client` — authenticated HTTP gateway to the PayFlow backend.
//!
//! One operation per backend capability; each is a direct request/response
//! mapping with no client-side business logic. Calls are fire-once: no
//! retries, no caching, no client-side timeouts beyond the transport's own.

pub mod dto;
pub mod endpoints;
pub mod error;
pub mod gateway;

pub use error::{ApiError, ApiResult};
pub use gateway::ApiGateway;
