//! Todo record definition

use serde::{Deserialize, Serialize};

/// A single stored todo entry.
///
/// `id` is assigned by the caller and never changes once stored. `title` and
/// `completed` are opaque strings replaced wholesale on upsert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub title: String,
    pub completed: String,
}

impl Record {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        completed: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed: completed.into(),
        }
    }
}
