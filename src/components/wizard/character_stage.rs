//! Character Stage
//!
//! Generate a character from a prompt or upload an image; once one exists,
//! refine it with edit prompts and continue to the audio stage.

use leptos::ev;
use leptos::prelude::*;
use phosphor_leptos::{Icon, ARROW_RIGHT, MAGIC_WAND, PENCIL_SIMPLE, UPLOAD_SIMPLE};
use wasm_bindgen::JsCast;

use crate::components::design_system::{
    Button, ButtonSize, ButtonVariant, CardBody, CardDescription, CardHeader, CardTitle, TextArea,
};
use crate::config::use_config;
use crate::services::alert_service::use_alert_state;
use crate::services::wizard_state::{
    edit_character_action, generate_character_action, upload_character_action,
    use_wizard_context,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum CharacterTab {
    #[default]
    Generate,
    Upload,
}

#[component]
fn TabButton(tab: CharacterTab, active: RwSignal<CharacterTab>, label: &'static str) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || format!(
                "py-2 rounded-md text-sm font-medium transition-colors {}",
                if active.get() == tab { "bg-white/15 text-white" } else { "text-white/60 hover:text-white" }
            )
            on:click=move |_| active.set(tab)
        >
            {label}
        </button>
    }
}

#[component]
fn GenerateForm() -> impl IntoView {
    let ctx = use_wizard_context();
    let alerts = use_alert_state();
    let config = use_config();
    let prompt = RwSignal::new(String::new());
    let busy = Signal::derive(move || ctx.character_status.get().is_pending());

    let generate = move |_: ev::MouseEvent| {
        generate_character_action(
            ctx,
            alerts,
            prompt.get_untracked(),
            config.image_model.clone(),
            move || prompt.set(String::new()),
        );
    };

    view! {
        <div class="space-y-4">
            <TextArea
                value=prompt
                placeholder="A professional businesswoman with shoulder-length brown hair, wearing a blue blazer, warm smile"
            />
            <Button
                on_click=generate
                size=ButtonSize::Large
                class="w-full"
                disabled=Signal::derive(move || prompt.with(|p| p.trim().is_empty()))
                loading=busy
            >
                {move || if busy.get() {
                    view! { "Generating..." }.into_any()
                } else {
                    view! { <Icon icon=MAGIC_WAND size="16px" /> "Generate Character" }.into_any()
                }}
            </Button>
        </div>
    }
}

#[component]
fn UploadForm() -> impl IntoView {
    let ctx = use_wizard_context();
    let alerts = use_alert_state();
    let config = use_config();
    let file = RwSignal::new_local(None::<web_sys::File>);
    let busy = Signal::derive(move || ctx.character_status.get().is_pending());

    let on_file_change = move |ev: ev::Event| {
        let selected = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        file.set(selected);
    };

    let upload = move |_: ev::MouseEvent| {
        let Some(selected) = file.get_untracked() else {
            return;
        };
        upload_character_action(
            ctx,
            alerts,
            selected,
            config.upload_name.clone(),
            move || file.set(None),
        );
    };

    view! {
        <div class="space-y-4">
            <label class="w-full h-64 rounded-lg bg-white/5 border-2 border-dashed border-white/20 flex flex-col items-center justify-center cursor-pointer hover:bg-white/10 transition-colors">
                <span class="mb-4 text-white/40">
                    <Icon icon=UPLOAD_SIMPLE size="48px" />
                </span>
                <p class="text-white/60 mb-2">"Click to upload an image"</p>
                <p class="text-sm text-white/40">"PNG, JPG up to 10MB"</p>
                <input type="file" accept="image/*" class="hidden" on:change=on_file_change />
            </label>
            {move || file.with(|f| f.as_ref().map(|f| f.name())).map(|name| view! {
                <p class="text-sm text-white/60 text-center">{format!("Selected: {}", name)}</p>
            })}
            <Button
                on_click=upload
                size=ButtonSize::Large
                class="w-full"
                disabled=Signal::derive(move || file.with(|f| f.is_none()))
                loading=busy
            >
                {move || if busy.get() {
                    view! { "Uploading..." }.into_any()
                } else {
                    view! { <Icon icon=UPLOAD_SIMPLE size="16px" /> "Upload Character" }.into_any()
                }}
            </Button>
        </div>
    }
}

#[component]
fn EditForm() -> impl IntoView {
    let ctx = use_wizard_context();
    let alerts = use_alert_state();
    let edit_prompt = RwSignal::new(String::new());
    let busy = Signal::derive(move || ctx.character_status.get().is_pending());

    let edit = move |_: ev::MouseEvent| {
        edit_character_action(
            ctx,
            alerts,
            edit_prompt.get_untracked(),
            move || edit_prompt.set(String::new()),
        );
    };

    view! {
        <div class="space-y-6">
            <div class="bg-white/5 border border-white/10 p-6 rounded-xl space-y-4">
                <h3 class="text-xl font-semibold">"Edit Your Character (Optional)"</h3>
                <div class="flex gap-3">
                    <input
                        type="text"
                        placeholder="Add sunglasses and a smile"
                        class="flex-1 px-4 py-2 rounded-lg bg-white/5 border border-white/10 text-white placeholder-white/40 focus:outline-none focus:ring-2 focus:ring-violet-500"
                        prop:value=move || edit_prompt.get()
                        on:input=move |ev| edit_prompt.set(event_target_value(&ev))
                    />
                    <Button
                        on_click=edit
                        variant=ButtonVariant::Secondary
                        disabled=Signal::derive(move || edit_prompt.with(|p| p.trim().is_empty()))
                        loading=busy
                        title="Apply edit"
                    >
                        {move || (!busy.get()).then(|| view! { <Icon icon=PENCIL_SIMPLE size="16px" /> })}
                    </Button>
                </div>
            </div>

            <Button
                on_click=move |_| { ctx.advance(); }
                size=ButtonSize::Large
                class="w-full"
            >
                "Continue to Audio"
                <Icon icon=ARROW_RIGHT size="16px" />
            </Button>
        </div>
    }
}

#[component]
pub fn CharacterStage() -> impl IntoView {
    let ctx = use_wizard_context();
    let tab = RwSignal::new(CharacterTab::default());
    let has_character = Signal::derive(move || ctx.session.with(|s| s.character_url.is_some()));

    view! {
        <div class="p-8">
            <CardHeader>
                <CardTitle class="text-3xl">"Create Your Character"</CardTitle>
                <CardDescription class="text-lg">
                    "Generate an AI character or upload your own image"
                    <br />
                    <span class="text-sm text-yellow-400/80 mt-2 inline-block">
                        "Tip: Works best with human-like characters with visible faces"
                    </span>
                </CardDescription>
            </CardHeader>

            <CardBody class="space-y-6">
                <Show
                    when=move || has_character.get()
                    fallback=move || view! {
                        <div class="w-full space-y-4">
                            <div class="grid w-full grid-cols-2 gap-1 p-1 rounded-lg bg-white/5">
                                <TabButton tab=CharacterTab::Generate active=tab label="Generate with AI" />
                                <TabButton tab=CharacterTab::Upload active=tab label="Upload Image" />
                            </div>
                            {move || match tab.get() {
                                CharacterTab::Generate => view! { <GenerateForm /> }.into_any(),
                                CharacterTab::Upload => view! { <UploadForm /> }.into_any(),
                            }}
                        </div>
                    }
                >
                    <EditForm />
                </Show>
            </CardBody>
        </div>
    }
}
