use leptos::prelude::*;

use super::audio_stage::AudioStage;
use super::character_stage::CharacterStage;
use super::generate_stage::GenerateStage;
use super::side_panel::SidePanel;
use super::stage_indicator::StageIndicator;
use crate::components::design_system::Card;
use crate::services::wizard_state::{use_wizard_context, Stage};

/// The create view: header, stage rail, the active stage and its previews
#[component]
pub fn CreateView() -> impl IntoView {
    let ctx = use_wizard_context();
    let stage = Memo::new(move |_| ctx.stage());

    view! {
        <main class="flex-1 px-8 pt-24 pb-12">
            <div class="max-w-6xl mx-auto space-y-8">
                <header class="text-center space-y-2">
                    <h1 class="text-5xl font-bold bg-gradient-to-r from-violet-400 to-fuchsia-400 bg-clip-text text-transparent">
                        "Talking Avatar"
                    </h1>
                    <p class="text-white/60">"Create a speaking character in three steps"</p>
                </header>

                <StageIndicator />

                <div class="flex gap-8 items-start">
                    <Card class="flex-1">
                        {move || match stage.get() {
                            Stage::Character => view! { <CharacterStage /> }.into_any(),
                            Stage::Audio => view! { <AudioStage /> }.into_any(),
                            Stage::Generate => view! { <GenerateStage /> }.into_any(),
                        }}
                    </Card>
                    <SidePanel />
                </div>
            </div>
        </main>
    }
}
