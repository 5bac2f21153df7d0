//! Generate Stage
//!
//! Compose the character and audio into the final video.

use leptos::ev;
use leptos::prelude::*;
use phosphor_leptos::{Icon, ARROW_CLOCKWISE, ARROW_LEFT, DOWNLOAD_SIMPLE, VIDEO_CAMERA};

use crate::bindings::download_file;
use crate::components::design_system::{
    Button, ButtonSize, ButtonVariant, CardBody, CardDescription, CardHeader, CardTitle,
};
use crate::config::use_config;
use crate::services::alert_service::use_alert_state;
use crate::services::wizard_state::{create_avatar_action, use_wizard_context};

const VIDEO_FILE_NAME: &str = "talking-avatar.mp4";

#[component]
fn ComposeForm() -> impl IntoView {
    let ctx = use_wizard_context();
    let alerts = use_alert_state();
    let config = use_config();
    let busy = Signal::derive(move || ctx.avatar_status.get().is_pending());

    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-2 gap-4">
                <div class="bg-white/5 border border-white/10 p-4 rounded-xl">
                    <p class="text-sm text-white/60 mb-2">"Character"</p>
                    <img
                        src=move || ctx.character_url().unwrap_or_default()
                        alt="Character"
                        class="w-full aspect-square object-cover rounded-lg"
                    />
                </div>
                <div class="bg-white/5 border border-white/10 p-4 rounded-xl flex flex-col">
                    <p class="text-sm text-white/60 mb-2">"Audio"</p>
                    <div class="flex-1 flex items-center">
                        <audio src=move || ctx.audio_url().unwrap_or_default() controls=true class="w-full" />
                    </div>
                </div>
            </div>

            <Button
                on_click=move |_| {
                    create_avatar_action(ctx, alerts, config.avatar_name.clone());
                }
                size=ButtonSize::Large
                class="w-full"
                loading=busy
            >
                {move || if busy.get() {
                    view! { "Creating Your Avatar..." }.into_any()
                } else {
                    view! { <Icon icon=VIDEO_CAMERA size="16px" /> "Generate Talking Avatar" }.into_any()
                }}
            </Button>

            <Button
                on_click=move |_| { ctx.back(); }
                variant=ButtonVariant::Secondary
                size=ButtonSize::Large
                class="w-full"
                disabled=busy
            >
                <Icon icon=ARROW_LEFT size="16px" />
                "Back to Audio"
            </Button>
        </div>
    }
}

#[component]
fn VideoResult() -> impl IntoView {
    let ctx = use_wizard_context();

    let download = move |_: ev::MouseEvent| {
        let Some(url) = ctx.video_url() else {
            return;
        };
        if let Err(e) = download_file(&url, VIDEO_FILE_NAME) {
            log::error!("Failed to download video: {}", e);
        }
    };

    view! {
        <div class="space-y-6">
            <div class="bg-white/5 border border-white/10 p-4 rounded-xl">
                <video
                    src=move || ctx.video_url().unwrap_or_default()
                    controls=true
                    class="w-full rounded-lg"
                />
            </div>

            <div class="flex gap-4">
                <Button on_click=download size=ButtonSize::Large class="flex-1">
                    <Icon icon=DOWNLOAD_SIMPLE size="16px" />
                    "Download Video"
                </Button>
                <Button
                    on_click=move |_| ctx.start_over()
                    variant=ButtonVariant::Secondary
                    size=ButtonSize::Large
                    class="flex-1"
                >
                    <Icon icon=ARROW_CLOCKWISE size="16px" />
                    "Create Another"
                </Button>
            </div>
        </div>
    }
}

#[component]
pub fn GenerateStage() -> impl IntoView {
    let ctx = use_wizard_context();
    let has_video = Signal::derive(move || ctx.session.with(|s| s.video_url.is_some()));

    view! {
        <div class="p-8">
            <CardHeader>
                <CardTitle class="text-3xl">"Create Talking Avatar"</CardTitle>
                <CardDescription class="text-lg">
                    "Bring your character to life with the generated speech"
                </CardDescription>
            </CardHeader>

            <CardBody class="space-y-6">
                <Show when=move || has_video.get() fallback=|| view! { <ComposeForm /> }>
                    <VideoResult />
                </Show>
            </CardBody>
        </div>
    }
}
