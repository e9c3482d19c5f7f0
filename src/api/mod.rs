//! HTTP surface: image upload, contact submission and the static frontend.
//!
//! The router is composable; `app_router()` returns a `Router` that
//! `server::serve` mounts on a bound listener.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::app_router;
pub use server::{serve, start_server_on, ApiServer};
pub use types::ApiContext;
