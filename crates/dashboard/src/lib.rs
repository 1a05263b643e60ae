//! `firewatch-dashboard` library crate.
//!
//! Terminal presentation client for the fire detection service. Re-exports
//! internal modules for integration testing; the binary entrypoint lives in
//! `main.rs`.

pub mod app;
pub mod camera;
pub mod client;
pub mod config;
pub mod controls;
pub mod dashboard;
pub mod render;
