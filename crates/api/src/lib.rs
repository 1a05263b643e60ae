//! Fire-severity classifier service library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! router) so integration tests, the dashboard's tests and the binary
//! entrypoint can all construct the same application.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
