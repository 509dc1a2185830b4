//! Edge Admin Gateway Library
//!
//! This crate provides a single-process HTTP gateway that:
//!
//! - **Proxies DNS record CRUD** against the Cloudflare v4 REST API,
//!   forwarding client-held credentials verbatim on every call
//! - **Serves the operator dashboard**, a static single page embedded in
//!   the binary
//! - **Stubs worker management, traffic analytics and deployment** with
//!   canned responses (no registry, no aggregation, no real deploys)
//!
//! The gateway owns no persistent state: every handler is a pure function
//! of its request, and the only suspension point is the outbound
//! Cloudflare call.
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading from environment variables
//! - [`cloudflare`]: Upstream Cloudflare REST client
//! - [`error`]: Custom error types with Axum integration
//! - [`handlers`]: HTTP route handlers
//! - [`router`]: The static route table
//! - [`state`]: Shared application state

pub mod cloudflare;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::{AppError, AppResult};
pub use router::build_router;
pub use state::AppState;
