//! View-side state: cursors and transient edit buffers.
//!
//! Groups the state the renderer and key handler need that is not panel
//! data: which list row is selected, which profile field has focus, and the
//! small overlay drafts (attach path, profile field edit). Panel collections
//! never live here.

use crate::input::DraftInput;

/// Focusable rows of the profile panel, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileRow {
    #[default]
    Name,
    Email,
    TwoFactor,
    Encryption,
    AccessControl,
}

impl ProfileRow {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::TwoFactor,
        Self::Encryption,
        Self::AccessControl,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::TwoFactor => "Two-factor authentication",
            Self::Encryption => "Data encryption",
            Self::AccessControl => "Access control",
        }
    }

    #[must_use]
    pub const fn is_toggle(self) -> bool {
        matches!(self, Self::TwoFactor | Self::Encryption | Self::AccessControl)
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::TwoFactor,
            Self::TwoFactor => Self::Encryption,
            Self::Encryption => Self::AccessControl,
            Self::AccessControl => Self::Name,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Name => Self::AccessControl,
            Self::Email => Self::Name,
            Self::TwoFactor => Self::Email,
            Self::Encryption => Self::TwoFactor,
            Self::AccessControl => Self::Encryption,
        }
    }
}

#[derive(Debug, Default)]
pub struct ViewState {
    /// How far the chat transcript is scrolled back from the bottom, in
    /// rendered rows. Zero means pinned to the newest message.
    pub chat_scroll_back: u16,
    /// Selected row in the uploaded-files list.
    pub documents_selected: usize,
    /// Focused row in the profile panel.
    pub profile_row: ProfileRow,
    /// Open path prompt on the documents panel, if any.
    pub attach_draft: Option<DraftInput>,
    /// In-progress edit of the focused profile field, if any.
    pub profile_edit: Option<DraftInput>,
    /// One-shot notice for the status bar (e.g. a failed file lookup).
    pub notice: Option<String>,
}

impl ViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp the documents selection after the list shrank.
    pub fn clamp_documents_selection(&mut self, len: usize) {
        if len == 0 {
            self.documents_selected = 0;
        } else if self.documents_selected >= len {
            self.documents_selected = len - 1;
        }
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}
