//! Per-panel state containers.
//!
//! Each panel owns its collection exclusively and exposes only its own
//! mutations. Cross-panel reads (the profile panel's usage counts) go
//! through [`App`](crate::App), never sideways.

mod chat;
mod documents;
mod gallery;
mod profile;

pub use chat::ChatPanel;
pub use documents::DocumentsPanel;
pub use gallery::{ActiveGeneration, GalleryPanel};
pub use profile::ProfilePanel;
