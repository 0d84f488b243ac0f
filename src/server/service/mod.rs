//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Turning raw request payloads into typed domain input
//! - **Orchestration**: Coordinating repository calls and external APIs
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod command;
pub mod discord;
