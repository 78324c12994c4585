//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into mapping service calls and formats
//! responses as the `{"status": ...}` JSON envelope.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication and request processing middleware
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
