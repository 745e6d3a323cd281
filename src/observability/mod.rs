//! Observability for msgboard
//!
//! Structured logging via `tracing`. Handlers emit events; the CLI installs
//! the subscriber once at startup; tower-http adds a span per request.

mod logger;

pub use logger::{default_filter, init_logging};
