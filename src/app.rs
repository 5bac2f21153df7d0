use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::alert_dialog::AlertDialog;
use crate::components::gallery::Gallery;
use crate::components::layout::main_shell::MainShell;
use crate::components::wizard::CreateView;
use crate::config::{provide_config, AppConfig};
use crate::services::alert_service::provide_alert_state;
use crate::services::wizard_state::provide_wizard_context;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide global services
    provide_config(config);
    provide_wizard_context();
    provide_alert_state();

    view! {
        <Router>
            <MainShell>
                <Routes fallback=|| view! { <div class="m-auto text-white/60">"404 - Page Not Found"</div> }>
                    <Route path=path!("/") view=CreateView />
                    <Route path=path!("/gallery") view=Gallery />
                </Routes>
            </MainShell>

            <AlertDialog />
        </Router>
    }
}
