//! Record type

use serde::{Deserialize, Serialize};

/// Server-assigned record identifier
pub type RecordId = u64;

/// The unit of storage
///
/// `id` is fixed at creation; only `content` changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub content: String,
}

impl Record {
    pub fn new(id: RecordId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }
}
