//! Stage Indicator Component
//!
//! Segment rail showing the three wizard stages. Segments whose artifacts
//! are missing are locked and ignore clicks.

use leptos::prelude::*;
use phosphor_leptos::{Icon, MAGIC_WAND, MUSIC_NOTES, VIDEO_CAMERA};

use crate::services::wizard_state::{use_wizard_context, Session, Stage};

/// How a segment renders for a given session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentState {
    Current,
    /// Before the current stage
    Completed,
    /// Ahead of the current stage but enterable
    Unlocked,
    Locked,
}

impl SegmentState {
    pub fn of(stage: Stage, session: &Session) -> Self {
        if stage == session.stage {
            SegmentState::Current
        } else if stage.index() < session.stage.index() {
            SegmentState::Completed
        } else if session.can_enter(stage) {
            SegmentState::Unlocked
        } else {
            SegmentState::Locked
        }
    }

    pub fn is_clickable(&self) -> bool {
        !matches!(self, SegmentState::Locked)
    }

    fn circle_class(&self) -> &'static str {
        match self {
            SegmentState::Current => {
                "bg-gradient-to-br from-violet-600 to-fuchsia-600 text-white border-transparent shadow-lg shadow-violet-700/50"
            }
            SegmentState::Completed => "bg-violet-600/20 border-violet-500 text-violet-300",
            SegmentState::Unlocked => "bg-white/5 border-violet-500/40 text-white/80",
            SegmentState::Locked => "bg-white/5 border-white/20 text-white/40",
        }
    }
}

fn stage_icon(stage: Stage) -> impl IntoView {
    let icon = match stage {
        Stage::Character => MAGIC_WAND,
        Stage::Audio => MUSIC_NOTES,
        Stage::Generate => VIDEO_CAMERA,
    };
    view! { <Icon icon=icon size="24px" /> }
}

#[component]
fn StageSegment(stage: Stage) -> impl IntoView {
    let ctx = use_wizard_context();
    let state = Signal::derive(move || ctx.session.with(|s| SegmentState::of(stage, s)));

    let handle_click = move |_| {
        ctx.go_to(stage);
    };

    view! {
        <button
            type="button"
            class=move || format!(
                "relative flex flex-col items-center p-4 rounded-xl transition-all focus:outline-none focus:ring-2 focus:ring-violet-500 {}",
                match state.get() {
                    SegmentState::Current => "bg-white/10",
                    SegmentState::Locked => "cursor-not-allowed",
                    _ => "hover:bg-white/5 cursor-pointer",
                }
            )
            aria-disabled=move || (!state.get().is_clickable()).to_string()
            aria-current=move || (state.get() == SegmentState::Current).then_some("step")
            title=stage.description()
            on:click=handle_click
        >
            <div class=move || format!(
                "w-16 h-16 rounded-full flex items-center justify-center border-2 transition-all {}",
                state.get().circle_class()
            )>
                {stage_icon(stage)}
            </div>
            <span class=move || format!(
                "mt-2 text-sm font-medium {}",
                if state.get() == SegmentState::Current { "text-white" } else { "text-white/60" }
            )>
                {stage.label()}
            </span>
        </button>
    }
}

/// Connector bar, filled once the stage before it is completed
#[component]
fn StageConnector(after: Stage) -> impl IntoView {
    let ctx = use_wizard_context();
    let filled = Signal::derive(move || {
        ctx.session.with(|s| SegmentState::of(after, s) == SegmentState::Completed)
    });

    view! {
        <div class="w-24 h-0.5 bg-white/10 mx-2">
            <div class=move || format!(
                "h-full bg-gradient-to-r from-violet-600 to-fuchsia-600 transition-all duration-500 {}",
                if filled.get() { "w-full" } else { "w-0" }
            ) />
        </div>
    }
}

#[component]
pub fn StageIndicator() -> impl IntoView {
    let stages = Stage::all();
    let last = stages.len() - 1;

    view! {
        <div class="flex items-center justify-center space-x-4">
            {stages.into_iter().enumerate().map(|(i, stage)| {
                view! {
                    <div class="flex items-center">
                        <StageSegment stage=stage />
                        {(i < last).then(|| view! { <StageConnector after=stage /> })}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_segments() {
        let session = Session::default();
        assert_eq!(SegmentState::of(Stage::Character, &session), SegmentState::Current);
        assert_eq!(SegmentState::of(Stage::Audio, &session), SegmentState::Locked);
        assert_eq!(SegmentState::of(Stage::Generate, &session), SegmentState::Locked);
    }

    #[test]
    fn test_character_unlocks_audio_segment() {
        let session = Session {
            character_url: Some("/c.png".to_string()),
            ..Default::default()
        };
        assert_eq!(SegmentState::of(Stage::Audio, &session), SegmentState::Unlocked);
        assert!(SegmentState::of(Stage::Audio, &session).is_clickable());
        assert!(!SegmentState::of(Stage::Generate, &session).is_clickable());
    }

    #[test]
    fn test_earlier_stages_completed() {
        let session = Session {
            stage: Stage::Generate,
            character_url: Some("/c.png".to_string()),
            audio_url: Some("/a.mp3".to_string()),
            video_url: None,
        };
        assert_eq!(SegmentState::of(Stage::Character, &session), SegmentState::Completed);
        assert_eq!(SegmentState::of(Stage::Audio, &session), SegmentState::Completed);
        assert_eq!(SegmentState::of(Stage::Generate, &session), SegmentState::Current);
    }

    #[test]
    fn test_earlier_stage_stays_clickable_after_audio_cleared() {
        let session = Session {
            stage: Stage::Audio,
            character_url: Some("/c.png".to_string()),
            ..Default::default()
        };
        assert_eq!(SegmentState::of(Stage::Character, &session), SegmentState::Completed);
        assert!(SegmentState::of(Stage::Character, &session).is_clickable());
    }
}
