//! Preview column beside the wizard

use leptos::prelude::*;
use phosphor_leptos::{Icon, IMAGE, SPEAKER_HIGH};

use crate::components::design_system::{Card, CardBody, CardHeader, CardTitle};
use crate::services::wizard_state::use_wizard_context;

#[component]
pub fn SidePanel() -> impl IntoView {
    let ctx = use_wizard_context();
    let is_empty = Signal::derive(move || {
        ctx.session
            .with(|s| s.character_url.is_none() && s.audio_url.is_none())
    });

    view! {
        <aside class="w-80 shrink-0 space-y-4">
            <Show
                when=move || !is_empty.get()
                fallback=|| view! {
                    <Card>
                        <CardBody class="pt-6 text-center text-white/40">
                            "Your creations will appear here"
                        </CardBody>
                    </Card>
                }
            >
                {move || ctx.character_url().map(|url| view! {
                    <Card>
                        <CardHeader>
                            <CardTitle class="flex items-center gap-2 text-base">
                                <Icon icon=IMAGE size="16px" />
                                "Character"
                            </CardTitle>
                        </CardHeader>
                        <CardBody>
                            <img src=url alt="Character preview" class="w-full aspect-square object-cover rounded-lg" />
                        </CardBody>
                    </Card>
                })}
                {move || ctx.audio_url().map(|url| view! {
                    <Card>
                        <CardHeader>
                            <CardTitle class="flex items-center gap-2 text-base">
                                <Icon icon=SPEAKER_HIGH size="16px" />
                                "Audio"
                            </CardTitle>
                        </CardHeader>
                        <CardBody>
                            <audio src=url controls=true class="w-full" />
                        </CardBody>
                    </Card>
                })}
            </Show>
        </aside>
    }
}
