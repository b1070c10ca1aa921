//! Behavior tests for the view-model.

use std::sync::Arc;
use std::time::{Duration, SystemTime};

use maquette_types::{ChatMessage, FileDescriptor, Profile, Tab};

use crate::app::{App, AppOptions, GenerateOutcome, SendOutcome};
use crate::config::UiOptions;
use crate::simulator::{Canned, Clock};

const TEST_CHAT_DELAY: Duration = Duration::from_millis(25);
const TEST_IMAGE_DELAY: Duration = Duration::from_millis(40);
const TEST_IMAGE_URL: &str = "https://example.com/placeholder.png";

struct FixedClock(SystemTime);

impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        self.0
    }
}

fn test_app() -> App {
    App::new(AppOptions {
        simulator: Arc::new(Canned::new(
            TEST_CHAT_DELAY,
            TEST_IMAGE_DELAY,
            TEST_IMAGE_URL.to_string(),
        )),
        clock: Arc::new(FixedClock(SystemTime::UNIX_EPOCH + Duration::from_secs(1_000))),
        greeting: None,
        profile: Profile::default(),
        ui_options: UiOptions::default(),
    })
}

/// Drain completions until `count` have been applied or the deadline hits.
async fn wait_for_completions(app: &mut App, count: usize) -> usize {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    let mut applied = 0;
    while applied < count && tokio::time::Instant::now() < deadline {
        tokio::time::sleep(Duration::from_millis(5)).await;
        applied += app.process_completions();
    }
    applied
}

fn type_into_chat(app: &mut App, text: &str) {
    app.chat_draft_mut().enter_text(text);
}

fn type_into_prompt(app: &mut App, text: &str) {
    app.prompt_draft_mut().enter_text(text);
}

#[tokio::test]
async fn session_starts_with_one_greeting_message() {
    let app = test_app();
    assert_eq!(app.chat().len(), 1);
    assert!(app.chat().messages()[0].is_assistant());
}

#[tokio::test]
async fn send_appends_user_message_synchronously_and_reply_after_delay() {
    let mut app = test_app();
    type_into_chat(&mut app, "hello");

    let outcome = app.send_message();
    assert!(matches!(outcome, SendOutcome::Sent(_)));

    // User message is visible immediately; the reply is still pending.
    assert_eq!(app.chat().len(), 2);
    assert_eq!(app.chat().messages()[1].text(), "hello");
    assert_eq!(app.chat_draft().text(), "");
    assert_eq!(app.pending_completions(), 1);

    let applied = wait_for_completions(&mut app, 1).await;
    assert_eq!(applied, 1);
    assert_eq!(app.chat().len(), 3);
    let reply = &app.chat().messages()[2];
    assert!(reply.is_assistant());
    assert!(reply.text().contains("hello"));
    assert_eq!(app.pending_completions(), 0);
}

#[tokio::test]
async fn blank_send_mutates_nothing_and_keeps_the_draft() {
    let mut app = test_app();
    type_into_chat(&mut app, "   ");

    assert_eq!(app.send_message(), SendOutcome::Skipped);
    assert_eq!(app.chat().len(), 1);
    assert_eq!(app.chat_draft().text(), "   ");
    assert_eq!(app.pending_completions(), 0);
}

#[tokio::test]
async fn rapid_sends_get_replies_in_submission_order() {
    let mut app = test_app();
    for text in ["first", "second", "third"] {
        type_into_chat(&mut app, text);
        assert!(matches!(app.send_message(), SendOutcome::Sent(_)));
    }
    assert_eq!(app.pending_completions(), 3);

    let applied = wait_for_completions(&mut app, 3).await;
    assert_eq!(applied, 3);

    let replies: Vec<&str> = app
        .chat()
        .messages()
        .iter()
        .skip(4)
        .map(ChatMessage::text)
        .collect();
    assert!(replies[0].contains("first"));
    assert!(replies[1].contains("second"));
    assert!(replies[2].contains("third"));
}

#[tokio::test]
async fn message_ids_stay_monotonic_with_completions_in_flight() {
    let mut app = test_app();
    type_into_chat(&mut app, "one");
    app.send_message();
    type_into_chat(&mut app, "two");
    app.send_message();
    wait_for_completions(&mut app, 2).await;

    let ids: Vec<u64> = app
        .chat()
        .messages()
        .iter()
        .map(|m| m.id().value())
        .collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(ids, sorted, "ids must be unique and strictly increasing");
}

#[tokio::test]
async fn generation_sets_busy_then_prepends_and_clears() {
    let mut app = test_app();
    type_into_prompt(&mut app, "a sunset over mountains");

    assert_eq!(app.generate_image(), GenerateOutcome::Started);
    assert!(app.gallery().is_generating());
    assert_eq!(app.pending_completions(), 1);

    // Second request while busy is dropped, not queued.
    assert_eq!(app.generate_image(), GenerateOutcome::AlreadyGenerating);
    assert_eq!(app.pending_completions(), 1);

    let applied = wait_for_completions(&mut app, 1).await;
    assert_eq!(applied, 1);
    assert!(!app.gallery().is_generating());
    assert_eq!(app.gallery().len(), 1);
    let image = &app.gallery().images()[0];
    assert_eq!(image.prompt(), "a sunset over mountains");
    assert_eq!(image.url(), TEST_IMAGE_URL);
    assert_eq!(app.prompt_draft().text(), "");
}

#[tokio::test]
async fn newest_image_is_first() {
    let mut app = test_app();
    for prompt in ["older", "newer"] {
        type_into_prompt(&mut app, prompt);
        assert_eq!(app.generate_image(), GenerateOutcome::Started);
        wait_for_completions(&mut app, 1).await;
    }
    let prompts: Vec<&str> = app.gallery().images().iter().map(|i| i.prompt()).collect();
    assert_eq!(prompts, ["newer", "older"]);
}

#[tokio::test]
async fn blank_prompt_never_sets_busy() {
    let mut app = test_app();
    type_into_prompt(&mut app, "  \t ");
    assert_eq!(app.generate_image(), GenerateOutcome::Skipped);
    assert!(!app.gallery().is_generating());
    assert_eq!(app.pending_completions(), 0);
}

#[tokio::test]
async fn attaching_files_grows_the_list_by_exactly_n() {
    let mut app = test_app();
    let added = app.attach_files(vec![
        FileDescriptor::new("report.pdf", 4096),
        FileDescriptor::new("notes.txt", 120),
    ]);
    assert_eq!(added, 2);
    assert_eq!(app.documents().len(), 2);
    assert_eq!(app.documents().files()[0].name(), "report.pdf");
    assert_eq!(app.documents().files()[0].size_bytes(), 4096);
}

#[tokio::test]
async fn removing_a_file_clamps_the_selection() {
    let mut app = test_app();
    app.attach_files(vec![
        FileDescriptor::new("a", 1),
        FileDescriptor::new("b", 2),
    ]);
    app.view_mut().documents_selected = 1;

    let last = app.documents().files()[1].id();
    assert!(app.remove_file(last).is_some());
    assert_eq!(app.documents().len(), 1);
    assert_eq!(app.view().documents_selected, 0);
}

#[tokio::test]
async fn tab_switches_never_touch_panel_data() {
    let mut app = test_app();
    type_into_chat(&mut app, "hello");
    app.send_message();
    app.attach_files(vec![FileDescriptor::new("doc", 9)]);

    let before = app.usage_stats();
    for tab in Tab::ALL {
        app.set_active_tab(tab);
    }
    app.next_tab();
    app.previous_tab();
    assert_eq!(app.usage_stats(), before);

    // A pending reply still lands after all that navigation.
    wait_for_completions(&mut app, 1).await;
    assert_eq!(app.chat().len(), 3);
}

#[tokio::test]
async fn cancel_pending_suppresses_late_timers() {
    let mut app = test_app();
    type_into_chat(&mut app, "never answered");
    app.send_message();
    assert_eq!(app.pending_completions(), 1);

    assert_eq!(app.cancel_pending(), 1);
    assert_eq!(app.pending_completions(), 0);

    // Give the aborted timer a chance to have fired anyway.
    tokio::time::sleep(TEST_CHAT_DELAY + Duration::from_millis(30)).await;
    assert_eq!(app.process_completions(), 0);
    assert_eq!(app.chat().len(), 2);
}

#[tokio::test]
async fn profile_toggles_and_edits_are_local_state() {
    let mut app = test_app();
    assert!(app.profile_mut().toggle_two_factor());
    app.profile_mut().set_name("Grace".to_string());
    app.profile_mut().set_email("grace@example.com".to_string());

    let profile = app.profile().profile();
    assert!(profile.two_factor);
    assert_eq!(profile.name, "Grace");
    assert_eq!(profile.email, "grace@example.com");
}

#[tokio::test]
async fn usage_stats_aggregate_all_panels() {
    let mut app = test_app();
    type_into_chat(&mut app, "hi");
    app.send_message();
    app.attach_files(vec![FileDescriptor::new("f", 1)]);
    wait_for_completions(&mut app, 1).await;

    let stats = app.usage_stats();
    assert_eq!(stats.messages, 3);
    assert_eq!(stats.images, 0);
    assert_eq!(stats.files, 1);
}

/// The end-to-end scenario: seed greeting, send "hello", observe the user
/// message immediately and the referencing reply after the delay.
#[tokio::test]
async fn seed_send_reply_scenario() {
    let mut app = test_app();
    assert_eq!(app.chat().len(), 1);

    type_into_chat(&mut app, "hello");
    app.send_message();
    assert_eq!(app.chat().len(), 2);
    assert_eq!(app.chat().messages()[1].text(), "hello");

    wait_for_completions(&mut app, 1).await;
    assert_eq!(app.chat().len(), 3);
    assert!(app.chat().messages()[2].text().contains("hello"));
}
