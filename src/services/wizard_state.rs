//! Talking Avatar Wizard State
//!
//! Provides the session record behind the three-stage creation wizard and
//! the actions that fill it from the backend.
//!
//! # Architecture
//! - `Session` / `SessionPatch` - plain values with a last-write-wins merge
//! - `can_enter` - stage gating as a pure predicate
//! - `WizardContext` - reactive container provided to the component tree
//! - `*_action` functions - backend calls that update the context

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::{Deserialize, Serialize};

use crate::bindings::{
    create_avatar, edit_character, generate_audio, generate_character, preview_voice,
    upload_character, ApiError, AssetRef, VoicePreview,
};
use crate::config::{use_config, AppConfig};
use crate::services::alert_service::AlertState;
use crate::services::playback::play_once;
use crate::services::request_status::{track_request, RequestStatus};

// ============================================================================
// Types
// ============================================================================

/// Wizard stage, in the order the user passes through them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[default]
    Character,
    Audio,
    Generate,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Character => "Character",
            Stage::Audio => "Audio",
            Stage::Generate => "Generate",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Stage::Character => "Generate or upload a face",
            Stage::Audio => "Write and voice the speech",
            Stage::Generate => "Render the talking video",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Stage::Character => 0,
            Stage::Audio => 1,
            Stage::Generate => 2,
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Stage::Character, Stage::Audio, Stage::Generate]
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            Stage::Character => Some(Stage::Audio),
            Stage::Audio => Some(Stage::Generate),
            Stage::Generate => None,
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self {
            Stage::Character => None,
            Stage::Audio => Some(Stage::Character),
            Stage::Generate => Some(Stage::Audio),
        }
    }
}

/// The client-held record of the current wizard run
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    pub stage: Stage,
    pub character_url: Option<String>,
    pub audio_url: Option<String>,
    pub video_url: Option<String>,
}

/// Partial update of a [`Session`].
///
/// `None` leaves a field untouched. For the URL fields `Some(None)` clears
/// the field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionPatch {
    pub stage: Option<Stage>,
    pub character_url: Option<Option<String>>,
    pub audio_url: Option<Option<String>>,
    pub video_url: Option<Option<String>>,
}

impl SessionPatch {
    pub fn stage(stage: Stage) -> Self {
        Self {
            stage: Some(stage),
            ..Default::default()
        }
    }

    pub fn character(url: impl Into<String>) -> Self {
        Self {
            character_url: Some(Some(url.into())),
            ..Default::default()
        }
    }

    pub fn audio(url: impl Into<String>) -> Self {
        Self {
            audio_url: Some(Some(url.into())),
            ..Default::default()
        }
    }

    pub fn clear_audio() -> Self {
        Self {
            audio_url: Some(None),
            ..Default::default()
        }
    }

    pub fn video(url: impl Into<String>) -> Self {
        Self {
            video_url: Some(Some(url.into())),
            ..Default::default()
        }
    }

    /// Patch that returns every field to its initial value
    pub fn start_over() -> Self {
        Self {
            stage: Some(Stage::Character),
            character_url: Some(None),
            audio_url: Some(None),
            video_url: Some(None),
        }
    }
}

impl Session {
    /// Shallow merge: every field present in `patch` overwrites ours
    pub fn apply(mut self, patch: SessionPatch) -> Self {
        if let Some(stage) = patch.stage {
            self.stage = stage;
        }
        if let Some(url) = patch.character_url {
            self.character_url = url;
        }
        if let Some(url) = patch.audio_url {
            self.audio_url = url;
        }
        if let Some(url) = patch.video_url {
            self.video_url = url;
        }
        self
    }

    pub fn can_enter(&self, stage: Stage) -> bool {
        match stage {
            Stage::Character => true,
            Stage::Audio => self.character_url.is_some(),
            Stage::Generate => self.character_url.is_some() && self.audio_url.is_some(),
        }
    }

    /// A composed video exists
    pub fn is_complete(&self) -> bool {
        self.video_url.is_some()
    }
}

/// Merge `patch` into a copy of `session`
pub fn apply(session: &Session, patch: SessionPatch) -> Session {
    session.clone().apply(patch)
}

/// Whether the artifacts `stage` depends on already exist
pub fn can_enter(stage: Stage, session: &Session) -> bool {
    session.can_enter(stage)
}

/// Alert text for a failed avatar composition
pub fn avatar_failure_message(err: &ApiError) -> String {
    format!("Error: {}", err.detail().unwrap_or("Failed to generate avatar"))
}

// ============================================================================
// Wizard Context - Reactive State Management
// ============================================================================

#[derive(Clone, Copy)]
pub struct WizardContext {
    pub session: RwSignal<Session>,
    /// Shared by generate, upload and edit
    pub character_status: RwSignal<RequestStatus>,
    pub audio_status: RwSignal<RequestStatus>,
    pub avatar_status: RwSignal<RequestStatus>,
    /// Voice picked for speech synthesis; survives stage changes
    pub voice: RwSignal<String>,
    /// Voice whose sample is loading or playing
    pub previewing_voice: RwSignal<Option<String>>,
}

impl WizardContext {
    pub fn new() -> Self {
        Self::with_voice(AppConfig::default().default_voice)
    }

    pub fn with_voice(voice: impl Into<String>) -> Self {
        Self {
            session: RwSignal::new(Session::default()),
            character_status: RwSignal::new(RequestStatus::Idle),
            audio_status: RwSignal::new(RequestStatus::Idle),
            avatar_status: RwSignal::new(RequestStatus::Idle),
            voice: RwSignal::new(voice.into()),
            previewing_voice: RwSignal::new(None),
        }
    }

    /// Merge a patch into the session. No gating is applied here.
    pub fn update_state(&self, patch: SessionPatch) {
        self.session.update(|s| *s = s.clone().apply(patch));
    }

    /// Move to `stage` if its prerequisites exist. Returns whether it moved.
    ///
    /// The generate stage cannot be left while the avatar is being composed.
    pub fn go_to(&self, stage: Stage) -> bool {
        if !self.session.get_untracked().can_enter(stage) {
            log::debug!("Ignoring navigation to locked stage {:?}", stage);
            return false;
        }
        if stage != Stage::Generate && self.avatar_status.get_untracked().is_pending() {
            log::debug!("Ignoring navigation to {:?} while composing", stage);
            return false;
        }
        self.update_state(SessionPatch::stage(stage));
        true
    }

    /// Step forward one stage, subject to the same gating as `go_to`
    pub fn advance(&self) -> bool {
        let next = self.session.with_untracked(|s| s.stage.next());
        next.is_some_and(|stage| self.go_to(stage))
    }

    /// Step back one stage
    pub fn back(&self) -> bool {
        let previous = self.session.with_untracked(|s| s.stage.previous());
        previous.is_some_and(|stage| self.go_to(stage))
    }

    pub fn start_over(&self) {
        self.update_state(SessionPatch::start_over());
    }

    pub fn stage(&self) -> Stage {
        self.session.with(|s| s.stage)
    }

    pub fn can_enter(&self, stage: Stage) -> bool {
        self.session.with(|s| s.can_enter(stage))
    }

    pub fn character_url(&self) -> Option<String> {
        self.session.with(|s| s.character_url.clone())
    }

    pub fn audio_url(&self) -> Option<String> {
        self.session.with(|s| s.audio_url.clone())
    }

    pub fn video_url(&self) -> Option<String> {
        self.session.with(|s| s.video_url.clone())
    }

    /// Clear the preview indicator if it still belongs to `voice`
    pub fn finish_preview(&self, voice: &str) {
        self.previewing_voice.update(|current| {
            if current.as_deref() == Some(voice) {
                *current = None;
            }
        });
    }
}

impl Default for WizardContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the wizard context, starting from the configured default voice
pub fn provide_wizard_context() {
    provide_context(WizardContext::with_voice(use_config().default_voice));
}

pub fn use_wizard_context() -> WizardContext {
    expect_context::<WizardContext>()
}

// ============================================================================
// Request Tracking - results into the session
// ============================================================================

/// Store the character produced by `request`.
///
/// Generate, upload and edit differ only in the request and in
/// `failure_alert`. `on_success` runs after the session is updated.
pub fn track_character_request<Fut>(
    ctx: WizardContext,
    alerts: AlertState,
    request: Fut,
    failure_alert: &'static str,
    on_success: impl FnOnce() + 'static,
) -> bool
where
    Fut: Future<Output = Result<AssetRef, ApiError>> + 'static,
{
    track_request(
        ctx.character_status,
        request,
        move |asset| {
            ctx.update_state(SessionPatch::character(asset.url));
            on_success();
        },
        move |e| {
            log::error!("{}: {}", failure_alert, e);
            alerts.alert(failure_alert);
        },
    )
}

/// Store the speech track produced by `request`
pub fn track_audio_request<Fut>(
    ctx: WizardContext,
    alerts: AlertState,
    request: Fut,
    on_success: impl FnOnce() + 'static,
) -> bool
where
    Fut: Future<Output = Result<AssetRef, ApiError>> + 'static,
{
    track_request(
        ctx.audio_status,
        request,
        move |asset| {
            ctx.update_state(SessionPatch::audio(asset.url));
            on_success();
        },
        move |e| {
            log::error!("Error generating audio: {}", e);
            alerts.alert("Failed to generate audio");
        },
    )
}

/// Store the video produced by `request`. The session is left alone on
/// failure.
pub fn track_avatar_request<Fut>(ctx: WizardContext, alerts: AlertState, request: Fut) -> bool
where
    Fut: Future<Output = Result<AssetRef, ApiError>> + 'static,
{
    track_request(
        ctx.avatar_status,
        request,
        move |asset| {
            ctx.update_state(SessionPatch::video(asset.url));
        },
        move |e| {
            log::error!("Error generating avatar: {}", e);
            alerts.alert(avatar_failure_message(&e));
        },
    )
}

/// Play the sample fetched by `request`, marking `voice` busy until the
/// sample ends or anything along the way fails. Failures are logged only.
pub fn track_voice_preview<Fut>(ctx: WizardContext, voice: String, request: Fut)
where
    Fut: Future<Output = Result<VoicePreview, ApiError>> + 'static,
{
    ctx.previewing_voice.set(Some(voice.clone()));

    spawn_local(async move {
        let preview = match request.await {
            Ok(preview) => preview,
            Err(e) => {
                log::error!("Error previewing voice {}: {}", voice, e);
                ctx.finish_preview(&voice);
                return;
            }
        };

        let finished = voice.clone();
        if let Err(e) = play_once(&preview.audio_url, move || ctx.finish_preview(&finished)).await {
            log::error!("Error playing preview for {}: {}", voice, e);
            ctx.finish_preview(&voice);
        }
    });
}

// ============================================================================
// Wizard Actions - Async operations
// ============================================================================

/// Generate a character from a prompt. `on_success` runs after the session
/// is updated.
pub fn generate_character_action(
    ctx: WizardContext,
    alerts: AlertState,
    prompt: String,
    model: String,
    on_success: impl FnOnce() + 'static,
) -> bool {
    if prompt.trim().is_empty() {
        return false;
    }

    track_character_request(
        ctx,
        alerts,
        generate_character(prompt, model),
        "Failed to generate character",
        on_success,
    )
}

pub fn upload_character_action(
    ctx: WizardContext,
    alerts: AlertState,
    file: web_sys::File,
    name: String,
    on_success: impl FnOnce() + 'static,
) -> bool {
    track_character_request(
        ctx,
        alerts,
        upload_character(file, name),
        "Failed to upload character",
        on_success,
    )
}

/// Edit the current character. Does nothing until a character exists.
pub fn edit_character_action(
    ctx: WizardContext,
    alerts: AlertState,
    prompt: String,
    on_success: impl FnOnce() + 'static,
) -> bool {
    let Some(image_url) = ctx.session.get_untracked().character_url else {
        return false;
    };
    if prompt.trim().is_empty() {
        return false;
    }

    track_character_request(
        ctx,
        alerts,
        edit_character(image_url, prompt),
        "Failed to edit character",
        on_success,
    )
}

/// Synthesize `text` with the selected voice
pub fn generate_audio_action(
    ctx: WizardContext,
    alerts: AlertState,
    text: String,
    on_success: impl FnOnce() + 'static,
) -> bool {
    if text.trim().is_empty() {
        return false;
    }

    let voice = ctx.voice.get_untracked();
    track_audio_request(ctx, alerts, generate_audio(text, voice), on_success)
}

/// Fetch and play a voice sample
pub fn preview_voice_action(ctx: WizardContext, voice: String) {
    track_voice_preview(ctx, voice.clone(), preview_voice(voice));
}

/// Compose the session's character and audio into the final video
pub fn create_avatar_action(ctx: WizardContext, alerts: AlertState, name: String) -> bool {
    let session = ctx.session.get_untracked();
    let (Some(character_url), Some(audio_url)) = (session.character_url, session.audio_url) else {
        return false;
    };

    track_avatar_request(ctx, alerts, create_avatar(character_url, audio_url, name))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn full_session() -> Session {
        Session {
            stage: Stage::Generate,
            character_url: Some("/storage/characters/c.png".to_string()),
            audio_url: Some("/storage/audio/a.mp3".to_string()),
            video_url: Some("/storage/avatars/v.mp4".to_string()),
        }
    }

    #[test]
    fn test_stage_navigation() {
        assert_eq!(Stage::Character.next(), Some(Stage::Audio));
        assert_eq!(Stage::Generate.next(), None);
        assert_eq!(Stage::Character.previous(), None);
        assert_eq!(Stage::Generate.previous(), Some(Stage::Audio));
        for (i, stage) in Stage::all().iter().enumerate() {
            assert_eq!(stage.index(), i);
        }
    }

    #[test]
    fn test_initial_session() {
        let session = Session::default();
        assert_eq!(session.stage, Stage::Character);
        assert!(session.character_url.is_none());
        assert!(session.audio_url.is_none());
        assert!(!session.is_complete());
    }

    #[test]
    fn test_patch_last_write_wins() {
        let patches = vec![
            SessionPatch::character("/c1.png"),
            SessionPatch::audio("/a1.mp3"),
            SessionPatch::character("/c2.png"),
            SessionPatch::stage(Stage::Audio),
            SessionPatch::clear_audio(),
            SessionPatch::stage(Stage::Character),
        ];
        let session = patches
            .into_iter()
            .fold(Session::default(), |s, p| apply(&s, p));

        assert_eq!(session.character_url.as_deref(), Some("/c2.png"));
        assert_eq!(session.audio_url, None);
        assert_eq!(session.stage, Stage::Character);
    }

    #[test]
    fn test_patch_leaves_absent_fields() {
        let before = full_session();
        let after = apply(&before, SessionPatch::stage(Stage::Audio));
        assert_eq!(after.stage, Stage::Audio);
        assert_eq!(after.character_url, before.character_url);
        assert_eq!(after.audio_url, before.audio_url);
        assert_eq!(after.video_url, before.video_url);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let before = full_session();
        assert_eq!(apply(&before, SessionPatch::default()), before);
    }

    #[test]
    fn test_can_enter_gating() {
        let mut session = Session::default();
        assert!(can_enter(Stage::Character, &session));
        assert!(!can_enter(Stage::Audio, &session));
        assert!(!can_enter(Stage::Generate, &session));

        session.character_url = Some("/c.png".to_string());
        assert!(can_enter(Stage::Audio, &session));
        assert!(!can_enter(Stage::Generate, &session));

        session.audio_url = Some("/a.mp3".to_string());
        assert!(can_enter(Stage::Generate, &session));
    }

    #[test]
    fn test_audio_without_character_does_not_unlock_generate() {
        let session = Session {
            audio_url: Some("/a.mp3".to_string()),
            ..Default::default()
        };
        assert!(!can_enter(Stage::Generate, &session));
    }

    #[test]
    fn test_start_over_resets_everything() {
        let reset = apply(&full_session(), SessionPatch::start_over());
        assert_eq!(reset, Session::default());
        assert_eq!(apply(&Session::default(), SessionPatch::start_over()), Session::default());
    }

    #[test]
    fn test_context_go_to_locked_stage_is_noop() {
        let ctx = WizardContext::new();
        ctx.update_state(SessionPatch::character("/c.png"));

        assert!(!ctx.go_to(Stage::Generate));
        assert_eq!(ctx.session.get_untracked().stage, Stage::Character);

        assert!(ctx.go_to(Stage::Audio));
        assert_eq!(ctx.session.get_untracked().stage, Stage::Audio);

        assert!(ctx.go_to(Stage::Character));
        assert_eq!(ctx.session.get_untracked().stage, Stage::Character);
    }

    #[test]
    fn test_generate_stage_is_held_while_composing() {
        let ctx = WizardContext::new();
        ctx.update_state(SessionPatch::character("/c.png"));
        ctx.update_state(SessionPatch::audio("/a.mp3"));
        assert!(ctx.go_to(Stage::Generate));
        ctx.avatar_status.set(RequestStatus::Pending);

        assert!(!ctx.go_to(Stage::Audio));
        assert!(!ctx.go_to(Stage::Character));
        assert!(!ctx.back());
        assert_eq!(ctx.session.get_untracked().stage, Stage::Generate);
        assert!(ctx.go_to(Stage::Generate));

        ctx.avatar_status.set(RequestStatus::Failed("timeout".to_string()));
        assert!(ctx.go_to(Stage::Audio));
    }

    #[test]
    fn test_voice_survives_stage_changes() {
        let ctx = WizardContext::with_voice("Rachel");
        ctx.update_state(SessionPatch::character("/c.png"));
        ctx.go_to(Stage::Audio);
        ctx.voice.set("Aria".to_string());

        ctx.go_to(Stage::Character);
        ctx.go_to(Stage::Audio);
        assert_eq!(ctx.voice.get_untracked(), "Aria");

        ctx.update_state(SessionPatch::clear_audio());
        ctx.start_over();
        assert_eq!(ctx.voice.get_untracked(), "Aria");
    }

    #[test]
    fn test_finish_preview_only_clears_matching_voice() {
        let ctx = WizardContext::new();
        ctx.previewing_voice.set(Some("Aria".to_string()));

        ctx.finish_preview("Rachel");
        assert_eq!(ctx.previewing_voice.get_untracked().as_deref(), Some("Aria"));

        ctx.finish_preview("Aria");
        assert_eq!(ctx.previewing_voice.get_untracked(), None);
    }

    #[test]
    fn test_avatar_failure_message_uses_detail() {
        let err = ApiError::Status {
            status: 500,
            detail: Some("character not found".to_string()),
        };
        assert_eq!(avatar_failure_message(&err), "Error: character not found");
    }

    #[test]
    fn test_avatar_failure_message_generic() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(avatar_failure_message(&err), "Error: Failed to generate avatar");
    }
}
