//! Profile panel data.
//!
//! Local UI state only: nothing here is validated against a backend or
//! persisted anywhere.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub two_factor: bool,
    pub encryption: bool,
    pub access_control: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "User".to_string(),
            email: "user@example.com".to_string(),
            two_factor: false,
            encryption: true,
            access_control: true,
        }
    }
}

/// Aggregate counts shown read-only in the profile panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStats {
    pub messages: usize,
    pub images: usize,
    pub files: usize,
}
