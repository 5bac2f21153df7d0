use leptos::ev;
use leptos::prelude::*;

/// A styled multi-line text input bound to a signal
#[component]
pub fn TextArea(
    /// The current value (two-way binding signal)
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(into, optional)]
    placeholder: String,
    /// Whether the input is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// HTML id, for labels
    #[prop(into, optional)]
    id: String,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let base_class = "w-full h-32 px-4 py-3 rounded-lg bg-white/5 border border-white/10 text-white placeholder-white/40 focus:outline-none focus:ring-2 focus:ring-violet-500 disabled:opacity-50 resize-none";
    let full_class = format!("{base_class} {class}");

    let handle_input = move |evt: ev::Event| {
        value.set(event_target_value(&evt));
    };

    view! {
        <textarea
            id=id
            class=full_class
            placeholder=placeholder
            prop:value=move || value.get()
            disabled=move || disabled.get()
            on:input=handle_input
        />
    }
}
