//! Estudio 12 API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! middleware, session store) so integration tests and the binary
//! entrypoint assemble the exact same application.

pub mod config;
pub mod error;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod sessions;
pub mod state;
