//! # msgboard HTTP Server Module
//!
//! Boundary layer translating HTTP requests into record store operations.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/messages/*` - Messages JSON API
//! - `/web/messages/*` - Server-rendered pages over the messages store
//! - `/comments/*` - Map-style comments API
//! - `/deps/*` - Pagination dependency demo
//! - `/`, `/hello`, `/order`, `/user`, `/employee` - Path/query demo

pub mod basics_routes;
pub mod comments_routes;
pub mod config;
pub mod errors;
pub mod messages_routes;
pub mod observability_routes;
pub mod pages;
pub mod pagination_routes;
pub mod server;
pub mod web_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::{build_router, HttpServer, Stores};
