//! HTTP API layer for the weather history backend.
//!
//! This crate focuses on:
//! - Route wiring and request/response DTOs
//! - Mapping core errors to client-facing payloads
//! - Server startup (flags, logging, listener)

pub mod cli;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
