//! Presentation Layer
//!
//! HTTP handlers and router for the API.

pub mod handlers;
pub mod router;
