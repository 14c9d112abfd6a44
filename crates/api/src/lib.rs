//! HTTP layer: axum routes, handlers, middleware stack, and the error
//! mapping from domain failures to status codes.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
