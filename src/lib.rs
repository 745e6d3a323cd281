//! msgboard - In-memory CRUD message board
//!
//! A record store with server-assigned ids, served over HTTP as a JSON API,
//! server-rendered pages, a map-style comments API and small routing demos.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
