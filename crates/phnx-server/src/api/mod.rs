//! HTTP API handlers and router.

pub mod generate;
pub mod health;
pub mod router;

#[cfg(test)]
mod tests;

pub use router::{build_http_client, create_router, AppState};
