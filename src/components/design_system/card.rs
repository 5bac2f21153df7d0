use leptos::prelude::*;

/// A styled card container component
#[component]
pub fn Card(
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Card content
    children: Children,
) -> impl IntoView {
    let base_class = "bg-white/5 backdrop-blur border border-white/10 rounded-2xl shadow-xl overflow-hidden";
    let full_class = format!("{base_class} {class}");

    view! {
        <div class=full_class>
            {children()}
        </div>
    }
}

#[component]
pub fn CardHeader(
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    let full_class = format!("flex flex-col gap-1.5 p-6 {class}");

    view! {
        <div class=full_class>
            {children()}
        </div>
    }
}

/// Card body section with padding
#[component]
pub fn CardBody(
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Body content
    children: Children,
) -> impl IntoView {
    let full_class = format!("px-6 pb-6 {class}");

    view! {
        <div class=full_class>
            {children()}
        </div>
    }
}

#[component]
pub fn CardTitle(
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <h3 class=format!("font-semibold leading-none tracking-tight {class}")>
            {children()}
        </h3>
    }
}

#[component]
pub fn CardDescription(
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <p class=format!("text-white/60 {class}")>
            {children()}
        </p>
    }
}
