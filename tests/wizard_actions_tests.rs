//! Wizard Action Tests
//!
//! Drives the request-tracking halves of the wizard actions with canned
//! backend results: session updates, alerts and success callbacks.

use leptos::prelude::*;
use any_spawner::Executor;
use talking_avatar_frontend::bindings::{ApiError, AssetRef, VoicePreview};
use talking_avatar_frontend::services::alert_service::AlertState;
use talking_avatar_frontend::services::request_status::RequestStatus;
use talking_avatar_frontend::services::wizard_state::{
    create_avatar_action, edit_character_action, generate_audio_action, generate_character_action,
    track_audio_request, track_avatar_request, track_character_request, track_voice_preview,
    SessionPatch, Stage, WizardContext,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn init_executor() {
    // Already set when another test got there first
    let _ = Executor::init_wasm_bindgen();
}

fn asset(url: &str) -> Result<AssetRef, ApiError> {
    Ok(AssetRef {
        url: url.to_string(),
        id: None,
    })
}

fn status_error(detail: &str) -> ApiError {
    ApiError::Status {
        status: 500,
        detail: Some(detail.to_string()),
    }
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                resolve.unchecked_ref(),
                ms,
            );
        }
    });
    let _ = JsFuture::from(promise).await;
}

/// Poll `done` for up to five seconds
async fn wait_until(done: impl Fn() -> bool) -> bool {
    for _ in 0..250 {
        if done() {
            return true;
        }
        sleep(20).await;
    }
    done()
}

fn ready_context() -> WizardContext {
    let ctx = WizardContext::new();
    ctx.update_state(SessionPatch::character("/storage/characters/c.png"));
    ctx.update_state(SessionPatch::audio("/storage/audio/a.mp3"));
    ctx.go_to(Stage::Generate);
    ctx
}

// ============================================================================
// Character
// ============================================================================

#[wasm_bindgen_test]
async fn test_generated_character_unlocks_audio_and_clears_prompt() {
    init_executor();
    let ctx = WizardContext::new();
    let alerts = AlertState::new();
    let prompt = RwSignal::new("A smiling man".to_string());

    let started = track_character_request(
        ctx,
        alerts,
        async { asset("/storage/characters/man.png") },
        "Failed to generate character",
        move || prompt.set(String::new()),
    );

    assert!(started);
    assert!(ctx.character_status.get_untracked().is_pending());
    assert!(wait_until(|| !ctx.character_status.get_untracked().is_pending()).await);

    assert_eq!(ctx.character_url().as_deref(), Some("/storage/characters/man.png"));
    assert_eq!(prompt.get_untracked(), "");
    assert!(ctx.can_enter(Stage::Audio));
    assert_eq!(alerts.current(), None);
}

#[wasm_bindgen_test]
async fn test_failed_character_alerts_and_keeps_prompt() {
    init_executor();
    let ctx = WizardContext::new();
    let alerts = AlertState::new();
    let prompt = RwSignal::new("A smiling man".to_string());

    track_character_request(
        ctx,
        alerts,
        async { Err(ApiError::Network("offline".to_string())) },
        "Failed to generate character",
        move || prompt.set(String::new()),
    );

    assert!(wait_until(|| ctx.character_status.get_untracked().is_failed()).await);
    assert_eq!(alerts.current().as_deref(), Some("Failed to generate character"));
    assert_eq!(prompt.get_untracked(), "A smiling man");
    assert_eq!(ctx.character_url(), None);
    assert!(!ctx.can_enter(Stage::Audio));
}

#[wasm_bindgen_test]
fn test_character_request_refused_while_pending() {
    let ctx = WizardContext::new();
    ctx.character_status.set(RequestStatus::Pending);

    let started = track_character_request(
        ctx,
        AlertState::new(),
        async { asset("/c.png") },
        "Failed to edit character",
        || {},
    );

    assert!(!started);
}

// ============================================================================
// Audio
// ============================================================================

#[wasm_bindgen_test]
async fn test_generated_audio_overwrites_previous_clip() {
    init_executor();
    let ctx = ready_context();
    let alerts = AlertState::new();
    let text = RwSignal::new("Hello there".to_string());

    track_audio_request(ctx, alerts, async { asset("/storage/audio/b.mp3") }, move || {
        text.set(String::new())
    });

    assert!(wait_until(|| ctx.audio_status.get_untracked() == RequestStatus::Succeeded).await);
    assert_eq!(ctx.audio_url().as_deref(), Some("/storage/audio/b.mp3"));
    assert_eq!(text.get_untracked(), "");
}

#[wasm_bindgen_test]
async fn test_failed_audio_alerts() {
    init_executor();
    let ctx = ready_context();
    let alerts = AlertState::new();

    track_audio_request(ctx, alerts, async { Err(status_error("quota exceeded")) }, || {});

    assert!(wait_until(|| ctx.audio_status.get_untracked().is_failed()).await);
    assert_eq!(alerts.current().as_deref(), Some("Failed to generate audio"));
    assert_eq!(ctx.audio_url().as_deref(), Some("/storage/audio/a.mp3"));
}

// ============================================================================
// Avatar
// ============================================================================

#[wasm_bindgen_test]
async fn test_composed_avatar_is_stored() {
    init_executor();
    let ctx = ready_context();
    let alerts = AlertState::new();

    track_avatar_request(ctx, alerts, async { asset("/storage/avatars/v.mp4") });

    assert!(wait_until(|| ctx.avatar_status.get_untracked() == RequestStatus::Succeeded).await);
    assert_eq!(ctx.video_url().as_deref(), Some("/storage/avatars/v.mp4"));
    assert!(ctx.session.get_untracked().is_complete());
}

#[wasm_bindgen_test]
async fn test_rejected_avatar_shows_detail_and_keeps_session() {
    init_executor();
    let ctx = ready_context();
    let alerts = AlertState::new();
    let before = ctx.session.get_untracked();

    track_avatar_request(ctx, alerts, async { Err(status_error("character not found")) });

    assert!(wait_until(|| ctx.avatar_status.get_untracked().is_failed()).await);
    assert_eq!(alerts.current().as_deref(), Some("Error: character not found"));
    assert_eq!(ctx.session.get_untracked(), before);
}

#[wasm_bindgen_test]
async fn test_rejected_avatar_without_detail_uses_generic_text() {
    init_executor();
    let ctx = ready_context();
    let alerts = AlertState::new();

    track_avatar_request(ctx, alerts, async {
        Err(ApiError::Status {
            status: 502,
            detail: None,
        })
    });

    assert!(wait_until(|| ctx.avatar_status.get_untracked().is_failed()).await);
    assert_eq!(alerts.current().as_deref(), Some("Error: Failed to generate avatar"));
}

// ============================================================================
// Voice Preview
// ============================================================================

#[wasm_bindgen_test]
async fn test_failed_preview_fetch_clears_busy_voice() {
    init_executor();
    let ctx = WizardContext::new();

    track_voice_preview(ctx, "Aria".to_string(), async {
        Err::<VoicePreview, _>(ApiError::Network("offline".to_string()))
    });

    assert_eq!(ctx.previewing_voice.get_untracked().as_deref(), Some("Aria"));
    assert!(wait_until(|| ctx.previewing_voice.get_untracked().is_none()).await);
}

#[wasm_bindgen_test]
async fn test_unplayable_preview_clears_busy_voice() {
    init_executor();
    let ctx = WizardContext::new();

    track_voice_preview(ctx, "Aria".to_string(), async {
        Ok(VoicePreview {
            audio_url: "data:,not-audio".to_string(),
        })
    });

    assert!(wait_until(|| ctx.previewing_voice.get_untracked().is_none()).await);
}

// ============================================================================
// Input Guards
// ============================================================================

#[wasm_bindgen_test]
fn test_blank_inputs_issue_no_request() {
    let ctx = WizardContext::new();
    let alerts = AlertState::new();

    assert!(!generate_character_action(ctx, alerts, "   ".to_string(), "imagen4".to_string(), || {}));
    assert!(!generate_audio_action(ctx, alerts, "\n".to_string(), || {}));
    assert_eq!(ctx.character_status.get_untracked(), RequestStatus::Idle);
    assert_eq!(ctx.audio_status.get_untracked(), RequestStatus::Idle);
}

#[wasm_bindgen_test]
fn test_actions_need_their_inputs() {
    let ctx = WizardContext::new();
    let alerts = AlertState::new();

    assert!(!edit_character_action(ctx, alerts, "Add sunglasses".to_string(), || {}));

    ctx.update_state(SessionPatch::character("/c.png"));
    assert!(!create_avatar_action(ctx, alerts, "My Talking Avatar".to_string()));
    assert_eq!(ctx.avatar_status.get_untracked(), RequestStatus::Idle);
}
