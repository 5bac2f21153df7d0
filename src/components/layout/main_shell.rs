//! Main Shell Component
//!
//! Page chrome shared by the create and gallery views: animated backdrop,
//! logo and the view switcher.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use phosphor_leptos::{Icon, SPARKLE, SQUARES_FOUR};

/// Top-level view reachable from the switcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Create,
    Gallery,
}

impl View {
    pub fn path(&self) -> &'static str {
        match self {
            View::Create => "/",
            View::Gallery => "/gallery",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Create => "Create",
            View::Gallery => "Gallery",
        }
    }

    pub fn from_path(path: &str) -> Self {
        if path.trim_end_matches('/').ends_with("/gallery") {
            View::Gallery
        } else {
            View::Create
        }
    }
}

#[component]
fn NavLink(target: View) -> impl IntoView {
    let location = use_location();
    let is_active = Signal::derive(move || View::from_path(&location.pathname.get()) == target);

    let icon = match target {
        View::Create => SPARKLE,
        View::Gallery => SQUARES_FOUR,
    };

    view! {
        <a
            href=target.path()
            class=move || format!(
                "px-4 py-2 rounded-lg flex items-center gap-2 text-sm font-medium transition-colors {}",
                if is_active.get() {
                    "bg-gradient-to-r from-violet-600 to-fuchsia-600 text-white"
                } else {
                    "bg-white/10 text-white/80 hover:bg-white/20"
                }
            )
        >
            <Icon icon=icon size="16px" />
            {target.label()}
        </a>
    }
}

#[component]
pub fn MainShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-zinc-950 text-white relative overflow-hidden">
            <div class="absolute inset-0 pointer-events-none">
                <div class="absolute top-0 -left-20 w-96 h-96 bg-violet-600/20 rounded-full blur-3xl animate-pulse" />
                <div class="absolute bottom-0 right-0 w-[600px] h-[600px] bg-fuchsia-600/20 rounded-full blur-3xl animate-pulse" />
            </div>

            <div class="relative z-10 flex min-h-screen">
                <div class="absolute top-6 left-6 z-20">
                    <img src="/logo.svg" alt="Talking Avatar" class="w-12 h-12" />
                </div>

                <nav class="absolute top-6 right-6 z-20 flex gap-3">
                    <NavLink target=View::Create />
                    <NavLink target=View::Gallery />
                </nav>

                {children()}
            </div>
        </div>
    }
}
