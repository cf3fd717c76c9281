//! Distributed server demo.
//!
//! Two JSON endpoints (`/` and `/health`) that report which instance served
//! the request. Run several copies behind a load balancer to see requests
//! spread across instances.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod state;
