//! The application view-model.
//!
//! `App` owns the four panel containers, the active tab, the input drafts,
//! and the pending-completion machinery. UI layers call the operations
//! below and read state back; they never mutate panel data directly.

use std::sync::Arc;
use std::time::SystemTime;

use futures_util::future::{AbortHandle, Abortable};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use maquette_types::{
    FileDescriptor, FileId, MessageId, NonEmptyText, Profile, Tab, UploadedFile, UsageStats,
};

use crate::completion::{CompletionEvent, FifoSequencer};
use crate::config::{MaquetteConfig, UiOptions};
use crate::input::DraftInput;
use crate::panels::{ChatPanel, DocumentsPanel, GalleryPanel, ProfilePanel};
use crate::simulator::{Canned, Clock, CompletionSimulator, SystemClock};
use crate::view::ViewState;

const DEFAULT_GREETING: &str = "Hi! I'm your demo assistant. How can I help?";

/// Result of a send attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// User message appended; one assistant reply scheduled.
    Sent(MessageId),
    /// Blank input; nothing changed.
    Skipped,
}

/// Result of a generate attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// Generation scheduled; the panel is now busy.
    Started,
    /// A generation is already in flight; the request was dropped.
    AlreadyGenerating,
    /// Blank prompt; nothing changed, busy flag untouched.
    Skipped,
}

/// Everything injectable at construction.
pub struct AppOptions {
    pub simulator: Arc<dyn CompletionSimulator>,
    pub clock: Arc<dyn Clock>,
    pub greeting: Option<String>,
    pub profile: Profile,
    pub ui_options: UiOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            simulator: Arc::new(Canned::default()),
            clock: Arc::new(SystemClock),
            greeting: None,
            profile: Profile::default(),
            ui_options: UiOptions::default(),
        }
    }
}

impl AppOptions {
    /// Options derived from a loaded config file (or defaults without one).
    #[must_use]
    pub fn from_config(config: Option<&MaquetteConfig>) -> Self {
        match config {
            None => Self::default(),
            Some(config) => Self {
                simulator: Arc::new(config.simulator()),
                clock: Arc::new(SystemClock),
                greeting: config.greeting().map(str::to_string),
                profile: config.profile(),
                ui_options: config.ui_options(),
            },
        }
    }
}

pub struct App {
    active_tab: Tab,
    chat: ChatPanel,
    gallery: GalleryPanel,
    documents: DocumentsPanel,
    profile: ProfilePanel,

    chat_draft: DraftInput,
    prompt_draft: DraftInput,
    view: ViewState,
    ui_options: UiOptions,

    simulator: Arc<dyn CompletionSimulator>,
    clock: Arc<dyn Clock>,

    completions_tx: mpsc::UnboundedSender<CompletionEvent>,
    completions_rx: mpsc::UnboundedReceiver<CompletionEvent>,
    chat_pending: FifoSequencer<CompletionEvent>,
    image_pending: FifoSequencer<CompletionEvent>,

    tick_count: usize,
}

impl App {
    /// Build the app and seed the transcript with the assistant greeting.
    ///
    /// Must be called from within a tokio runtime: completion timers are
    /// spawned on the current runtime.
    #[must_use]
    pub fn new(options: AppOptions) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        let mut app = Self {
            active_tab: Tab::default(),
            chat: ChatPanel::new(),
            gallery: GalleryPanel::new(),
            documents: DocumentsPanel::new(),
            profile: ProfilePanel::new(options.profile),
            chat_draft: DraftInput::default(),
            prompt_draft: DraftInput::default(),
            view: ViewState::new(),
            ui_options: options.ui_options,
            simulator: options.simulator,
            clock: options.clock,
            completions_tx,
            completions_rx,
            chat_pending: FifoSequencer::new(),
            image_pending: FifoSequencer::new(),
            tick_count: 0,
        };

        let greeting = options.greeting.unwrap_or_else(|| DEFAULT_GREETING.to_string());
        match NonEmptyText::new(greeting) {
            Ok(text) => {
                let now = app.clock.now();
                app.chat.push_assistant(text, now);
            }
            Err(_) => warn!("configured greeting is blank; starting with an empty transcript"),
        }
        app
    }

    // ------------------------------------------------------------------
    // Chat panel
    // ------------------------------------------------------------------

    /// Send the chat draft. Blank input is skipped and the draft is left
    /// untouched; otherwise the draft is cleared, one user message is
    /// appended, and one assistant reply is scheduled.
    pub fn send_message(&mut self) -> SendOutcome {
        let Ok(text) = NonEmptyText::new(self.chat_draft.text()) else {
            return SendOutcome::Skipped;
        };
        self.chat_draft.clear();
        self.submit_chat(text)
    }

    /// Append a user message and schedule its simulated reply. Bypasses the
    /// draft; the TUI path goes through [`send_message`](Self::send_message).
    pub fn submit_chat(&mut self, text: NonEmptyText) -> SendOutcome {
        let now = self.clock.now();
        let id = self.chat.push_user(text.clone(), now);

        match NonEmptyText::new(self.simulator.reply_to(text.as_str())) {
            Ok(reply) => {
                let delay = self.simulator.chat_delay();
                let (abort, registration) = AbortHandle::new_pair();
                let seq = self.chat_pending.begin(abort);
                let tx = self.completions_tx.clone();
                tokio::spawn(Abortable::new(
                    async move {
                        tokio::time::sleep(delay).await;
                        let _ = tx.send(CompletionEvent::ChatReply { seq, text: reply });
                    },
                    registration,
                ));
                debug!(message = %id, seq, ?delay, "scheduled assistant reply");
            }
            Err(_) => warn!(message = %id, "simulator produced a blank reply; none scheduled"),
        }

        SendOutcome::Sent(id)
    }

    // ------------------------------------------------------------------
    // Images panel
    // ------------------------------------------------------------------

    /// Generate from the prompt draft. Blank prompts are skipped without
    /// touching the busy flag; requests while busy are dropped, not queued.
    pub fn generate_image(&mut self) -> GenerateOutcome {
        let Ok(prompt) = NonEmptyText::new(self.prompt_draft.text()) else {
            return GenerateOutcome::Skipped;
        };
        if self.gallery.is_generating() {
            return GenerateOutcome::AlreadyGenerating;
        }

        let url = self.simulator.image_url(prompt.as_str());
        let delay = self.simulator.image_delay();
        let (abort, registration) = AbortHandle::new_pair();
        let seq = self.image_pending.begin(abort);
        self.gallery.start(prompt.clone(), seq, self.clock.now());

        let tx = self.completions_tx.clone();
        tokio::spawn(Abortable::new(
            async move {
                tokio::time::sleep(delay).await;
                let _ = tx.send(CompletionEvent::ImageReady { seq, prompt, url });
            },
            registration,
        ));
        debug!(seq, ?delay, "scheduled image generation");
        GenerateOutcome::Started
    }

    // ------------------------------------------------------------------
    // Documents panel
    // ------------------------------------------------------------------

    /// Append every selected descriptor. Returns how many were added.
    pub fn attach_files(&mut self, descriptors: Vec<FileDescriptor>) -> usize {
        let added = self.documents.attach(descriptors);
        debug!(added, total = self.documents.len(), "attached files");
        added
    }

    /// Delete one uploaded file by identity.
    pub fn remove_file(&mut self, id: FileId) -> Option<UploadedFile> {
        let removed = self.documents.remove(id);
        if removed.is_some() {
            self.view.clamp_documents_selection(self.documents.len());
        }
        removed
    }

    // ------------------------------------------------------------------
    // Tab router
    // ------------------------------------------------------------------

    /// Switch panels. Never mutates any panel's data and never cancels a
    /// pending completion.
    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.next();
    }

    pub fn previous_tab(&mut self) {
        self.active_tab = self.active_tab.previous();
    }

    // ------------------------------------------------------------------
    // Completion delivery
    // ------------------------------------------------------------------

    /// Drain arrived completions and apply them in submission order.
    /// Called once per frame by the event loop. Returns how many
    /// completions were applied.
    pub fn process_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.completions_rx.try_recv() {
            let seq = event.seq();
            let is_reply = matches!(event, CompletionEvent::ChatReply { .. });
            let ready = if is_reply {
                self.chat_pending.accept(seq, event)
            } else {
                self.image_pending.accept(seq, event)
            };
            for event in ready {
                self.apply_completion(event);
                applied += 1;
            }
        }
        applied
    }

    fn apply_completion(&mut self, event: CompletionEvent) {
        let now = self.clock.now();
        match event {
            CompletionEvent::ChatReply { seq, text } => {
                let id = self.chat.push_assistant(text, now);
                debug!(message = %id, seq, "applied assistant reply");
            }
            CompletionEvent::ImageReady { seq, prompt, url } => {
                let id = self.gallery.finish(prompt, url, now);
                // Prompt text stays visible while generating; it clears on
                // completion.
                self.prompt_draft.clear();
                debug!(image = %id, seq, "applied generated image");
            }
        }
    }

    /// Advance the frame counter. Drives spinner animation only.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick_count
    }

    /// Completions scheduled but not yet applied, across all panels.
    #[must_use]
    pub fn pending_completions(&self) -> usize {
        self.chat_pending.in_flight() + self.image_pending.in_flight()
    }

    /// Assistant replies scheduled but not yet applied.
    #[must_use]
    pub fn pending_replies(&self) -> usize {
        self.chat_pending.in_flight()
    }

    /// Abort every pending completion. Late timer wakeups are ignored.
    pub fn cancel_pending(&mut self) -> usize {
        let cancelled = self.chat_pending.cancel_all() + self.image_pending.cancel_all();
        self.gallery.cancel();
        if cancelled > 0 {
            info!(cancelled, "cancelled pending completions");
        }
        cancelled
    }

    /// Explicit teardown before the process exits.
    pub fn shutdown(&mut self) {
        self.cancel_pending();
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    #[must_use]
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    #[must_use]
    pub fn chat(&self) -> &ChatPanel {
        &self.chat
    }

    #[must_use]
    pub fn gallery(&self) -> &GalleryPanel {
        &self.gallery
    }

    #[must_use]
    pub fn documents(&self) -> &DocumentsPanel {
        &self.documents
    }

    #[must_use]
    pub fn profile(&self) -> &ProfilePanel {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut ProfilePanel {
        &mut self.profile
    }

    #[must_use]
    pub fn chat_draft(&self) -> &DraftInput {
        &self.chat_draft
    }

    pub fn chat_draft_mut(&mut self) -> &mut DraftInput {
        &mut self.chat_draft
    }

    #[must_use]
    pub fn prompt_draft(&self) -> &DraftInput {
        &self.prompt_draft
    }

    pub fn prompt_draft_mut(&mut self) -> &mut DraftInput {
        &mut self.prompt_draft
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    /// Aggregate counts for the profile panel.
    #[must_use]
    pub fn usage_stats(&self) -> UsageStats {
        UsageStats {
            messages: self.chat.len(),
            images: self.gallery.len(),
            files: self.documents.len(),
        }
    }

    #[must_use]
    pub fn now(&self) -> SystemTime {
        self.clock.now()
    }
}
