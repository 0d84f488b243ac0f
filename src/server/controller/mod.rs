//! HTTP request handlers.
//!
//! Controllers extract request data, call the matching service, and convert domain
//! models to DTOs. Each handler carries a `utoipa::path` annotation that the router
//! collects into the OpenAPI document.

pub mod command;
pub mod discord;
pub mod health;
