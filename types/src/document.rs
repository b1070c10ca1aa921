//! Uploaded file bookkeeping.
//!
//! The documents panel never reads file contents; it tracks descriptors
//! (name, byte size) handed over by the file-selection surface.

use serde::{Deserialize, Serialize};

use crate::ids::FileId;

/// What the selection surface supplies: a name and a byte size, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    pub size_bytes: u64,
}

impl FileDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }
}

/// A descriptor that has been admitted to the panel and given an identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    id: FileId,
    name: String,
    size_bytes: u64,
}

impl UploadedFile {
    #[must_use]
    pub fn new(id: FileId, descriptor: FileDescriptor) -> Self {
        Self {
            id,
            name: descriptor.name,
            size_bytes: descriptor.size_bytes,
        }
    }

    #[must_use]
    pub fn id(&self) -> FileId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }
}
