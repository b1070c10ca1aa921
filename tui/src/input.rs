//! Input handling for the Maquette TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

use maquette_engine::{App, DraftInput, GenerateOutcome, ProfileRow, SendOutcome};
use maquette_types::Tab;

use crate::picker;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking thread and feeds them to the event
/// loop over a bounded channel.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so the input thread unblocks if it is
        // currently backpressured on a send.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain queued input and apply it to the app. Returns `true` when the
/// user asked to quit.
pub fn handle_events(app: &mut App, pump: &mut InputPump) -> Result<bool> {
    for _ in 0..MAX_EVENTS_PER_FRAME {
        let msg = match pump.rx.try_recv() {
            Ok(msg) => msg,
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input thread terminated"));
            }
        };
        match msg {
            InputMsg::Error(e) => return Err(anyhow!("input error: {e}")),
            InputMsg::Event(event) => {
                if apply_event(app, event) {
                    return Ok(true);
                }
            }
        }
    }
    Ok(false)
}

fn apply_event(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
            apply_key(app, key)
        }
        Event::Paste(text) => {
            apply_paste(app, &text);
            false
        }
        _ => false,
    }
}

/// Whether an overlay edit (attach path, profile field) currently owns the
/// keyboard.
fn overlay_active(app: &App) -> bool {
    app.view().attach_draft.is_some() || app.view().profile_edit.is_some()
}

fn apply_key(app: &mut App, key: KeyEvent) -> bool {
    // Ctrl+C always quits, regardless of focus.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    // A notice describes the previous interaction; any new key retires it.
    let _ = app.view_mut().take_notice();

    if overlay_active(app) {
        apply_overlay_key(app, key);
        return false;
    }

    // Tab routing is global outside overlays.
    match key.code {
        KeyCode::Tab => {
            app.next_tab();
            return false;
        }
        KeyCode::BackTab => {
            app.previous_tab();
            return false;
        }
        _ => {}
    }

    match app.active_tab() {
        Tab::Chat => apply_chat_key(app, key),
        Tab::Images => apply_images_key(app, key),
        Tab::Documents => return apply_documents_key(app, key),
        Tab::Profile => return apply_profile_key(app, key),
    }
    false
}

fn apply_paste(app: &mut App, text: &str) {
    let text = text.replace(['\r', '\n'], " ");
    if let Some(draft) = app.view_mut().attach_draft.as_mut() {
        draft.enter_text(&text);
    } else if let Some(draft) = app.view_mut().profile_edit.as_mut() {
        draft.enter_text(&text);
    } else {
        match app.active_tab() {
            Tab::Chat => app.chat_draft_mut().enter_text(&text),
            Tab::Images => app.prompt_draft_mut().enter_text(&text),
            Tab::Documents | Tab::Profile => {}
        }
    }
}

/// Shared single-line editing keys. Returns `true` when the key was an
/// editing action.
fn edit_draft(draft: &mut DraftInput, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => draft.clear(),
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            draft.delete_word_backwards();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => draft.enter_char(c),
        KeyCode::Backspace => draft.delete_char(),
        KeyCode::Delete => draft.delete_char_forward(),
        KeyCode::Left => draft.move_cursor_left(),
        KeyCode::Right => draft.move_cursor_right(),
        KeyCode::Home => draft.move_cursor_start(),
        KeyCode::End => draft.move_cursor_end(),
        _ => return false,
    }
    true
}

fn apply_chat_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => match app.send_message() {
            SendOutcome::Sent(id) => {
                debug!(message = %id, "sent chat message");
                app.view_mut().chat_scroll_back = 0;
            }
            SendOutcome::Skipped => {}
        },
        KeyCode::Esc => app.chat_draft_mut().clear(),
        KeyCode::PageUp => {
            let view = app.view_mut();
            view.chat_scroll_back = view.chat_scroll_back.saturating_add(10);
        }
        KeyCode::PageDown => {
            let view = app.view_mut();
            view.chat_scroll_back = view.chat_scroll_back.saturating_sub(10);
        }
        KeyCode::Up => {
            let view = app.view_mut();
            view.chat_scroll_back = view.chat_scroll_back.saturating_add(1);
        }
        KeyCode::Down => {
            let view = app.view_mut();
            view.chat_scroll_back = view.chat_scroll_back.saturating_sub(1);
        }
        _ => {
            edit_draft(app.chat_draft_mut(), key);
        }
    }
}

fn apply_images_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => match app.generate_image() {
            GenerateOutcome::Started => debug!("image generation started"),
            GenerateOutcome::AlreadyGenerating => {
                app.view_mut().set_notice("Generation already in progress");
            }
            GenerateOutcome::Skipped => {}
        },
        KeyCode::Esc => app.prompt_draft_mut().clear(),
        _ => {
            edit_draft(app.prompt_draft_mut(), key);
        }
    }
}

fn apply_documents_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('o') | KeyCode::Char('a') => {
            app.view_mut().attach_draft = Some(DraftInput::default());
        }
        KeyCode::Up => {
            let view = app.view_mut();
            view.documents_selected = view.documents_selected.saturating_sub(1);
        }
        KeyCode::Down => {
            let len = app.documents().len();
            let view = app.view_mut();
            if len > 0 && view.documents_selected + 1 < len {
                view.documents_selected += 1;
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            let selected = app.view().documents_selected;
            let id = app.documents().files().get(selected).map(|file| file.id());
            if let Some(id) = id
                && let Some(removed) = app.remove_file(id)
            {
                app.view_mut()
                    .set_notice(format!("Removed {}", removed.name()));
            }
        }
        _ => {}
    }
    false
}

fn apply_profile_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Up => {
            let view = app.view_mut();
            view.profile_row = view.profile_row.previous();
        }
        KeyCode::Down => {
            let view = app.view_mut();
            view.profile_row = view.profile_row.next();
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let row = app.view().profile_row;
            match row {
                ProfileRow::TwoFactor => {
                    app.profile_mut().toggle_two_factor();
                }
                ProfileRow::Encryption => {
                    app.profile_mut().toggle_encryption();
                }
                ProfileRow::AccessControl => {
                    app.profile_mut().toggle_access_control();
                }
                ProfileRow::Name | ProfileRow::Email => {
                    let current = match row {
                        ProfileRow::Name => app.profile().profile().name.clone(),
                        _ => app.profile().profile().email.clone(),
                    };
                    let mut draft = DraftInput::default();
                    draft.set_text(current);
                    app.view_mut().profile_edit = Some(draft);
                }
            }
        }
        _ => {}
    }
    false
}

fn apply_overlay_key(app: &mut App, key: KeyEvent) {
    if app.view().attach_draft.is_some() {
        match key.code {
            KeyCode::Esc => {
                app.view_mut().attach_draft = None;
            }
            KeyCode::Enter => submit_attach(app),
            _ => {
                if let Some(draft) = app.view_mut().attach_draft.as_mut() {
                    edit_draft(draft, key);
                }
            }
        }
        return;
    }

    match key.code {
        KeyCode::Esc => {
            app.view_mut().profile_edit = None;
        }
        KeyCode::Enter => {
            if let Some(mut draft) = app.view_mut().profile_edit.take() {
                let text = draft.take_text();
                match app.view().profile_row {
                    ProfileRow::Name => app.profile_mut().set_name(text),
                    ProfileRow::Email => app.profile_mut().set_email(text),
                    // Toggle rows never open an edit overlay.
                    _ => {}
                }
            }
        }
        _ => {
            if let Some(draft) = app.view_mut().profile_edit.as_mut() {
                edit_draft(draft, key);
            }
        }
    }
}

fn submit_attach(app: &mut App) {
    let Some(mut draft) = app.view_mut().attach_draft.take() else {
        return;
    };
    let raw = draft.take_text();
    if raw.trim().is_empty() {
        return;
    }
    match picker::descriptor_from_path(&raw) {
        Ok(descriptor) => {
            let name = descriptor.name.clone();
            app.attach_files(vec![descriptor]);
            app.view_mut().set_notice(format!("Attached {name}"));
        }
        Err(e) => {
            // Keep the prompt open so the path can be corrected.
            let mut restored = DraftInput::default();
            restored.set_text(raw);
            let view = app.view_mut();
            view.attach_draft = Some(restored);
            view.set_notice(format!("Attach failed: {e}"));
        }
    }
}
