//! Core domain types for Maquette.
//!
//! Everything in this crate is plain data: no IO, no async, no rendering.
//! The engine crate owns mutation; the TUI crate owns presentation.

mod document;
mod ids;
mod image;
mod message;
mod profile;
mod proofs;
mod tab;

pub use document::{FileDescriptor, UploadedFile};
pub use ids::{FileId, IdGen, ImageId, MessageId};
pub use image::GeneratedImage;
pub use message::{AssistantMessage, ChatMessage, Sender, UserMessage};
pub use profile::{Profile, UsageStats};
pub use proofs::{EmptyTextError, NonEmptyText};
pub use tab::Tab;
