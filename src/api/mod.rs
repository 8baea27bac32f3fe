//! HTTP layer translating requests into link service operations.
//!
//! # Modules
//!
//! - [`dto`] - Request/response payloads
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Rate limiting and request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
