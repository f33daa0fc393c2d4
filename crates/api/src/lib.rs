//! HTTP server for the webforge backend.
//!
//! Exposes project/file CRUD and the two AI-generation endpoints over
//! axum, with the middleware stack (CORS, request-id, tracing, timeout,
//! panic recovery) shared between the binary and integration tests.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
