//! Generated image gallery entries.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::ids::ImageId;
use crate::proofs::NonEmptyText;

/// One gallery entry. The url points at whatever the completion backend
/// produced; with the canned simulator it is a constant placeholder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedImage {
    id: ImageId,
    prompt: NonEmptyText,
    url: String,
    timestamp: SystemTime,
}

impl GeneratedImage {
    #[must_use]
    pub fn new(id: ImageId, prompt: NonEmptyText, url: String, timestamp: SystemTime) -> Self {
        Self {
            id,
            prompt,
            url,
            timestamp,
        }
    }

    #[must_use]
    pub fn id(&self) -> ImageId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        self.prompt.as_str()
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }
}
