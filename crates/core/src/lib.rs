//! Pure domain logic for the fire-severity classifier and its dashboard.
//!
//! Nothing in this crate performs I/O. The HTTP service and the dashboard
//! client both depend on it so the request/response contract is defined
//! exactly once.

pub mod classification;
pub mod history;
pub mod reading;
pub mod status;
pub mod summary;
pub mod types;
