use leptos::prelude::*;

/// Spinning ring, optionally followed by a status line
#[component]
pub fn LoadingSpinner(
    /// Size: "sm", "md", or "lg"
    #[prop(default = "md")]
    size: &'static str,
    /// Text shown next to the ring and announced to screen readers
    #[prop(optional)]
    label: Option<&'static str>,
) -> impl IntoView {
    let ring = match size {
        "sm" => "w-4 h-4 border-2",
        "lg" => "w-12 h-12 border-4",
        _ => "w-6 h-6 border-2",
    };

    view! {
        <div class="inline-flex items-center gap-3" role="status" aria-label=label.unwrap_or("Loading")>
            <div class=format!("{ring} animate-spin rounded-full border-white/20 border-t-violet-400")></div>
            {label.map(|text| view! { <span class="text-sm text-white/60">{text}</span> })}
        </div>
    }
}
