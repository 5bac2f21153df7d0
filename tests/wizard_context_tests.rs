//! Wizard Context Tests
//!
//! Reactive session updates, stage navigation and reset through
//! `WizardContext`.

use leptos::prelude::*;
use talking_avatar_frontend::services::request_status::RequestStatus;
use talking_avatar_frontend::services::wizard_state::{Session, SessionPatch, Stage, WizardContext};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn ready_context() -> WizardContext {
    let ctx = WizardContext::new();
    ctx.update_state(SessionPatch::character("/storage/characters/c.png"));
    ctx.update_state(SessionPatch::audio("/storage/audio/a.mp3"));
    ctx
}

// ============================================================================
// Initial State
// ============================================================================

#[wasm_bindgen_test]
fn test_context_starts_empty() {
    let ctx = WizardContext::new();

    assert_eq!(ctx.session.get(), Session::default());
    assert_eq!(ctx.stage(), Stage::Character);
    assert_eq!(ctx.character_status.get(), RequestStatus::Idle);
    assert_eq!(ctx.audio_status.get(), RequestStatus::Idle);
    assert_eq!(ctx.avatar_status.get(), RequestStatus::Idle);
    assert_eq!(ctx.previewing_voice.get(), None);
}

// ============================================================================
// update_state
// ============================================================================

#[wasm_bindgen_test]
fn test_update_state_merges_fields() {
    let ctx = WizardContext::new();

    ctx.update_state(SessionPatch::character("/c1.png"));
    ctx.update_state(SessionPatch::audio("/a.mp3"));
    ctx.update_state(SessionPatch::character("/c2.png"));

    assert_eq!(ctx.character_url().as_deref(), Some("/c2.png"));
    assert_eq!(ctx.audio_url().as_deref(), Some("/a.mp3"));
    assert_eq!(ctx.video_url(), None);
}

#[wasm_bindgen_test]
fn test_clear_audio_keeps_stage_and_character() {
    let ctx = ready_context();
    assert!(ctx.go_to(Stage::Audio));

    ctx.update_state(SessionPatch::clear_audio());

    assert_eq!(ctx.stage(), Stage::Audio);
    assert_eq!(ctx.audio_url(), None);
    assert!(ctx.character_url().is_some());
    assert!(!ctx.can_enter(Stage::Generate));
}

// ============================================================================
// Navigation
// ============================================================================

#[wasm_bindgen_test]
fn test_go_to_locked_stage_is_ignored() {
    let ctx = WizardContext::new();
    ctx.update_state(SessionPatch::character("/c.png"));

    assert!(!ctx.go_to(Stage::Generate));
    assert_eq!(ctx.stage(), Stage::Character);

    assert!(ctx.go_to(Stage::Audio));
    assert_eq!(ctx.stage(), Stage::Audio);
}

#[wasm_bindgen_test]
fn test_go_to_back_and_forth() {
    let ctx = ready_context();

    assert!(ctx.go_to(Stage::Generate));
    assert!(ctx.go_to(Stage::Audio));
    assert!(ctx.go_to(Stage::Character));
    assert_eq!(ctx.stage(), Stage::Character);
}

#[wasm_bindgen_test]
fn test_advance_and_back_follow_stage_order() {
    let ctx = ready_context();

    assert!(ctx.advance());
    assert_eq!(ctx.stage(), Stage::Audio);
    assert!(ctx.advance());
    assert_eq!(ctx.stage(), Stage::Generate);
    assert!(!ctx.advance());

    assert!(ctx.back());
    assert_eq!(ctx.stage(), Stage::Audio);
}

#[wasm_bindgen_test]
fn test_advance_respects_gating() {
    let ctx = WizardContext::new();

    assert!(!ctx.advance());
    assert!(!ctx.back());
    assert_eq!(ctx.stage(), Stage::Character);
}

// ============================================================================
// Start Over
// ============================================================================

#[wasm_bindgen_test]
fn test_start_over_resets_everything() {
    let ctx = ready_context();
    ctx.go_to(Stage::Generate);
    ctx.update_state(SessionPatch::video("/storage/avatars/v.mp4"));
    assert!(ctx.session.get().is_complete());

    ctx.start_over();

    assert_eq!(ctx.session.get(), Session::default());
}

// ============================================================================
// Voice Preview Indicator
// ============================================================================

#[wasm_bindgen_test]
fn test_finish_preview_only_clears_matching_voice() {
    let ctx = WizardContext::new();
    ctx.previewing_voice.set(Some("Aria".to_string()));

    ctx.finish_preview("Rachel");
    assert_eq!(ctx.previewing_voice.get().as_deref(), Some("Aria"));

    ctx.finish_preview("Aria");
    assert_eq!(ctx.previewing_voice.get(), None);
}
