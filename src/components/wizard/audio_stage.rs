//! Audio Stage
//!
//! Write the speech, pick a voice (with optional samples) and synthesize it.

use leptos::ev;
use leptos::prelude::*;
use phosphor_leptos::{Icon, ARROW_LEFT, ARROW_RIGHT, MUSIC_NOTES, PLAY};

use crate::bindings::{find_voice, Voice, VOICES};
use crate::components::design_system::{
    Button, ButtonSize, ButtonVariant, CardBody, CardDescription, CardHeader, CardTitle,
    LoadingSpinner, TextArea,
};
use crate::services::alert_service::use_alert_state;
use crate::services::wizard_state::{
    generate_audio_action, preview_voice_action, use_wizard_context, SessionPatch,
};

#[component]
fn VoiceOption(voice: &'static Voice) -> impl IntoView {
    let ctx = use_wizard_context();
    let selected = ctx.voice;
    let is_previewing =
        Signal::derive(move || ctx.previewing_voice.with(|v| v.as_deref() == Some(voice.id)));
    let input_id = format!("voice-{}", voice.id);

    view! {
        <div class="relative flex items-center space-x-3 bg-white/5 border border-white/10 rounded-lg p-4 hover:bg-white/10 transition-colors">
            <input
                type="radio"
                name="voice"
                id=input_id.clone()
                class="accent-violet-500"
                value=voice.id
                prop:checked=move || selected.with(|s| s == voice.id)
                on:change=move |_| selected.set(voice.id.to_string())
            />
            <label for=input_id class="flex-1 cursor-pointer">
                <div class="font-medium">{voice.name}</div>
                <div class="text-sm text-white/60">{voice.description}</div>
            </label>
            <Button
                on_click=move |_| preview_voice_action(ctx, voice.id.to_string())
                variant=ButtonVariant::Ghost
                size=ButtonSize::Icon
                disabled=is_previewing
                title=format!("Preview {}", voice.name)
            >
                {move || if is_previewing.get() {
                    view! { <LoadingSpinner size="sm" /> }.into_any()
                } else {
                    view! { <Icon icon=PLAY size="16px" /> }.into_any()
                }}
            </Button>
        </div>
    }
}

#[component]
fn SpeechForm() -> impl IntoView {
    let ctx = use_wizard_context();
    let alerts = use_alert_state();
    let text = RwSignal::new(String::new());
    let busy = Signal::derive(move || ctx.audio_status.get().is_pending());

    let generate = move |_: ev::MouseEvent| {
        generate_audio_action(
            ctx,
            alerts,
            text.get_untracked(),
            move || text.set(String::new()),
        );
    };

    view! {
        <div class="space-y-6">
            <div class="space-y-4">
                <label for="speech-text" class="text-lg font-medium">"Speech Text"</label>
                <TextArea
                    id="speech-text"
                    value=text
                    placeholder="Hello! I'm your AI avatar. I can speak any text you give me with a natural, expressive voice."
                />
            </div>

            <div class="space-y-4">
                <span class="text-lg font-medium">"Choose a Voice"</span>
                <div class="grid grid-cols-2 gap-4" role="radiogroup">
                    {VOICES.iter().map(|voice| view! {
                        <VoiceOption voice=voice />
                    }).collect_view()}
                </div>
            </div>

            <Button
                on_click=generate
                size=ButtonSize::Large
                class="w-full"
                disabled=Signal::derive(move || text.with(|t| t.trim().is_empty()))
                loading=busy
            >
                {move || if busy.get() {
                    view! { "Generating Audio..." }.into_any()
                } else {
                    view! { <Icon icon=MUSIC_NOTES size="16px" /> "Generate Audio" }.into_any()
                }}
            </Button>
        </div>
    }
}

#[component]
fn AudioResult() -> impl IntoView {
    let ctx = use_wizard_context();

    view! {
        <div class="space-y-6">
            <div class="bg-white/5 border border-white/10 p-6 rounded-xl">
                <p class="text-white/60 mb-4">{move || {
                    let id = ctx.voice.get();
                    let name = find_voice(&id).map(|v| v.name.to_string()).unwrap_or(id);
                    format!("Voice: {}", name)
                }}</p>
                <audio src=move || ctx.audio_url().unwrap_or_default() controls=true class="w-full" />
            </div>

            <Button
                on_click=move |_| ctx.update_state(SessionPatch::clear_audio())
                variant=ButtonVariant::Secondary
                size=ButtonSize::Large
                class="w-full mb-4"
            >
                <Icon icon=MUSIC_NOTES size="16px" />
                "Generate Another Audio"
            </Button>

            <div class="flex gap-4">
                <Button
                    on_click=move |_| { ctx.back(); }
                    variant=ButtonVariant::Secondary
                    size=ButtonSize::Large
                    class="flex-1"
                >
                    <Icon icon=ARROW_LEFT size="16px" />
                    "Back to Character"
                </Button>
                <Button
                    on_click=move |_| { ctx.advance(); }
                    size=ButtonSize::Large
                    class="flex-1"
                >
                    "Continue to Generate"
                    <Icon icon=ARROW_RIGHT size="16px" />
                </Button>
            </div>
        </div>
    }
}

#[component]
pub fn AudioStage() -> impl IntoView {
    let ctx = use_wizard_context();
    let has_audio = Signal::derive(move || ctx.session.with(|s| s.audio_url.is_some()));

    view! {
        <div class="p-8">
            <CardHeader>
                <CardTitle class="text-3xl">"Generate Speech"</CardTitle>
                <CardDescription class="text-lg">
                    "Write what your character should say and choose a voice"
                    <br />
                    <span class="text-sm text-yellow-400/80 mt-2 inline-block">
                        "Tip: Keep your speech under 15 seconds for best results"
                    </span>
                </CardDescription>
            </CardHeader>

            <CardBody class="space-y-6">
                <Show
                    when=move || has_audio.get()
                    fallback=|| view! { <SpeechForm /> }
                >
                    <AudioResult />
                </Show>
            </CardBody>
        </div>
    }
}
