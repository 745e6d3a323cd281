//! # Record Store
//!
//! In-memory ordered collection of records backing every handler set.
//!
//! # Invariants
//!
//! - Record ids are unique within a store
//! - A new record gets `max(existing ids) + 1`, or `0` when the store is empty
//! - Insertion order is preserved across deletes
//!
//! `RecordStore` is a plain single-owner value. Request handlers reach it
//! through `SharedStore`, which takes one exclusive lock per operation.

pub mod errors;
pub mod memory;
pub mod record;
pub mod shared;

pub use errors::{StoreError, StoreResult};
pub use memory::RecordStore;
pub use record::{Record, RecordId};
pub use shared::SharedStore;
