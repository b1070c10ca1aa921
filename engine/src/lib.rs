//! View-model engine for Maquette.
//!
//! This crate contains the [`App`] state machine without TUI dependencies,
//! providing:
//!
//! - **Panel state**: one container per panel (chat, images, documents,
//!   profile), each exposing only its own mutation operations
//! - **Tab routing**: a single active-tab selection with no side effects on
//!   panel data
//! - **Simulated completions**: assistant replies and image generations are
//!   produced by a [`CompletionSimulator`] and delivered after its fixed
//!   delays, standing in for a real backend
//! - **Pending-operation tracking**: every scheduled completion carries an
//!   abort handle and a submission sequence number; completions are applied
//!   in submission order regardless of timer wakeup order
//!
//! # Architecture
//!
//! The [`App`] lives on the event-loop task. Scheduled completions run as
//! tokio timer tasks that send a completion event back over an mpsc
//! channel; the event loop drains the channel each frame via
//! [`App::process_completions`]. No panel ever touches another panel's
//! state, so a completion firing after unrelated interactions (tab switch,
//! further sends) cannot corrupt anything outside its own panel.
//!
//! The TUI layer (`maquette_tui`) reads state from `App` and forwards input
//! back to it. No rendering logic lives in this crate.

mod app;
mod completion;
mod config;
mod input;
mod panels;
mod simulator;
mod view;

pub use app::{App, AppOptions, GenerateOutcome, SendOutcome};
pub use config::{
    AppSection, ConfigError, MaquetteConfig, ProfileSection, SimulatorSection, UiOptions,
};
pub use input::DraftInput;
pub use panels::{
    ActiveGeneration, ChatPanel, DocumentsPanel, GalleryPanel, ProfilePanel,
};
pub use simulator::{Canned, Clock, CompletionSimulator, SystemClock, PLACEHOLDER_IMAGE_URL};
pub use view::{ProfileRow, ViewState};

#[cfg(test)]
mod tests;
