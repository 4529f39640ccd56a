//! Middleware layers for the HTTP API.

pub mod tracing;
