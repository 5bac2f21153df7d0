//! Blocking alert dialog
//!
//! Renders the message held by [`AlertState`] over the whole page until the
//! user acknowledges it.

use leptos::prelude::*;

use crate::components::design_system::Button;
use crate::services::alert_service::use_alert_state;

#[component]
pub fn AlertDialog() -> impl IntoView {
    let alerts = use_alert_state();

    view! {
        <Show when=move || alerts.message.get().is_some()>
            <div
                class="fixed inset-0 z-50 bg-black/60 backdrop-blur-sm flex items-center justify-center"
                role="alertdialog"
                aria-modal="true"
            >
                <div class="w-full max-w-md mx-4 p-6 rounded-2xl bg-zinc-900 border border-white/10 shadow-2xl flex flex-col gap-6">
                    <p class="text-white text-base break-words">
                        {move || alerts.message.get().unwrap_or_default()}
                    </p>
                    <div class="flex justify-end">
                        <Button on_click=move |_| alerts.dismiss()>
                            "OK"
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
