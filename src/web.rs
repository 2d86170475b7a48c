//! HTTP transport around the estimator: request decoding, interval check, JSON responses.

/// request handlers for `/`, `/calcular` and `/grupos`
pub mod handlers;
/// router and middleware
pub mod router;
/// shared application state
pub mod state;
