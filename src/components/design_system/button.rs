use leptos::ev;
use leptos::prelude::*;

use super::loading::LoadingSpinner;

/// Button variant styles
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    pub(crate) fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-gradient-to-r from-violet-600 to-fuchsia-600 hover:from-violet-500 hover:to-fuchsia-500 text-white shadow-lg shadow-violet-900/40 border border-transparent"
            }
            ButtonVariant::Secondary => {
                "bg-white/10 hover:bg-white/20 text-white border border-white/10"
            }
            ButtonVariant::Ghost => {
                "bg-transparent hover:bg-white/10 text-white/70 hover:text-white border border-transparent"
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Large,
    Icon,
}

impl ButtonSize {
    pub(crate) fn class(&self) -> &'static str {
        match self {
            ButtonSize::Default => "px-4 py-2 text-sm",
            ButtonSize::Large => "px-6 py-3 text-base",
            ButtonSize::Icon => "w-9 h-9 p-0",
        }
    }
}

/// A styled button component with multiple variants
#[component]
pub fn Button<F>(
    /// The visual variant of the button
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    #[prop(default = ButtonSize::Default)]
    size: ButtonSize,
    /// Click handler - accepts any closure taking MouseEvent
    on_click: F,
    /// Whether the button is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Whether to show a loading spinner
    #[prop(into, default = Signal::stored(false))]
    loading: Signal<bool>,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Title/tooltip text
    #[prop(into, optional)]
    title: String,
    /// Button content
    children: Children,
) -> impl IntoView
where
    F: Fn(ev::MouseEvent) + 'static,
{
    let base_class = "rounded-lg transition-all duration-200 flex items-center justify-center gap-2 font-medium focus:outline-none focus:ring-2 focus:ring-violet-500";
    let variant_class = variant.class();
    let size_class = size.class();

    let is_disabled = move || disabled.get() || loading.get();

    let state_class = move || {
        if is_disabled() {
            "opacity-50 cursor-not-allowed"
        } else {
            "cursor-pointer active:scale-95"
        }
    };

    let full_class = move || format!("{base_class} {variant_class} {size_class} {} {class}", state_class());

    let handle_click = move |evt: ev::MouseEvent| {
        if !is_disabled() {
            on_click(evt);
        }
    };

    view! {
        <button
            type="button"
            class=full_class
            on:click=handle_click
            disabled=is_disabled
            title=title
        >
            {move || loading.get().then(|| view! { <LoadingSpinner size="sm" /> })}
            {children()}
        </button>
    }
}
