//! Gallery View
//!
//! Browses every stored character, audio clip and avatar. The three lists
//! load together on entry; audio clips share one playback controller so only
//! one plays at a time.

use leptos::prelude::*;
use leptos::task::spawn_local;
use phosphor_leptos::{Icon, DOWNLOAD_SIMPLE, PAUSE, PLAY};

use crate::bindings::{download_file, fetch_gallery, AssetKind, GalleryItem, GalleryListing};
use crate::components::design_system::{Button, ButtonSize, ButtonVariant, Card, LoadingSpinner};
use crate::services::playback::{HtmlAudioPlayer, PlaybackController};
use crate::utils::formatting::{download_name, format_count, format_created};

/// Gallery-wide playback state: the controller owns the players, `playing`
/// mirrors its active id for rendering.
#[derive(Clone, Copy)]
struct GalleryPlayback {
    controller: StoredValue<PlaybackController<HtmlAudioPlayer>, LocalStorage>,
    playing: RwSignal<Option<String>>,
}

impl GalleryPlayback {
    fn new() -> Self {
        Self {
            controller: StoredValue::new_local(PlaybackController::new()),
            playing: RwSignal::new(None),
        }
    }

    fn toggle(&self, item: &GalleryItem) {
        let this = *self;
        let id = item.id.clone();
        let url = item.url.clone();

        let mut result = Ok(());
        let mut now_playing = None;
        self.controller.update_value(|controller| {
            result = controller.toggle(&item.id, || {
                HtmlAudioPlayer::new(&url, move || this.ended(&id))
            });
            now_playing = controller.playing().map(str::to_string);
        });

        if let Err(e) = result {
            log::error!("Failed to create audio player for {}: {}", item.id, e);
        }
        self.playing.set(now_playing);
    }

    fn ended(&self, id: &str) {
        let mut now_playing = None;
        self.controller.update_value(|controller| {
            controller.ended(id);
            now_playing = controller.playing().map(str::to_string);
        });
        self.playing.set(now_playing);
    }

    /// Runs on cleanup, when the stored controller may already be gone
    fn stop(&self) {
        self.controller.try_update_value(|controller| controller.stop());
        self.playing.try_set(None);
    }
}

fn download(item: &GalleryItem) {
    if let Err(e) = download_file(&item.url, &download_name(&item.name, &item.url)) {
        log::error!("Failed to download {}: {}", item.name, e);
    }
}

#[component]
fn DownloadButton(item: GalleryItem) -> impl IntoView {
    let title = format!("Download {}", item.name);

    view! {
        <Button
            on_click=move |_| download(&item)
            variant=ButtonVariant::Ghost
            size=ButtonSize::Icon
            title=title
        >
            <Icon icon=DOWNLOAD_SIMPLE size="16px" />
        </Button>
    }
}

#[component]
fn ItemCaption(item: GalleryItem) -> impl IntoView {
    view! {
        <div class="min-w-0">
            <p class="font-medium truncate">{item.name.clone()}</p>
            <p class="text-xs text-white/40">{format_created(&item.created)}</p>
        </div>
    }
}

#[component]
fn CharacterTile(item: GalleryItem) -> impl IntoView {
    view! {
        <Card>
            <img src=item.url.clone() alt=item.name.clone() class="w-full aspect-square object-cover" />
            <div class="p-4 flex items-center justify-between gap-2">
                <ItemCaption item=item.clone() />
                <DownloadButton item=item />
            </div>
        </Card>
    }
}

#[component]
fn AudioRow(item: GalleryItem, playback: GalleryPlayback) -> impl IntoView {
    let id = item.id.clone();
    let is_playing = Signal::derive(move || playback.playing.with(|p| p.as_deref() == Some(id.as_str())));
    let toggle_item = item.clone();

    view! {
        <Card>
            <div class="p-4 flex items-center gap-4">
                <Button
                    on_click=move |_| playback.toggle(&toggle_item)
                    size=ButtonSize::Icon
                    title="Play or pause"
                >
                    {move || if is_playing.get() {
                        view! { <Icon icon=PAUSE size="16px" /> }.into_any()
                    } else {
                        view! { <Icon icon=PLAY size="16px" /> }.into_any()
                    }}
                </Button>
                <div class="flex-1">
                    <ItemCaption item=item.clone() />
                </div>
                <DownloadButton item=item />
            </div>
        </Card>
    }
}

#[component]
fn AvatarTile(item: GalleryItem) -> impl IntoView {
    view! {
        <Card>
            <video src=item.url.clone() controls=true class="w-full aspect-video bg-black" />
            <div class="p-4 flex items-center justify-between gap-2">
                <ItemCaption item=item.clone() />
                <DownloadButton item=item />
            </div>
        </Card>
    }
}

#[component]
fn KindPanel(kind: AssetKind, listing: GalleryListing, playback: GalleryPlayback) -> impl IntoView {
    if let Some(message) = listing.empty_state(kind) {
        return view! {
            <div class="py-24 text-center text-white/40">{message}</div>
        }
        .into_any();
    }

    let items = listing.items(kind).to_vec();
    match kind {
        AssetKind::Character => view! {
            <div class="grid grid-cols-3 gap-6">
                {items.into_iter().map(|item| view! { <CharacterTile item=item /> }).collect_view()}
            </div>
        }
        .into_any(),
        AssetKind::Audio => view! {
            <div class="space-y-3">
                {items.into_iter().map(|item| view! { <AudioRow item=item playback=playback /> }).collect_view()}
            </div>
        }
        .into_any(),
        AssetKind::Avatar => view! {
            <div class="grid grid-cols-2 gap-6">
                {items.into_iter().map(|item| view! { <AvatarTile item=item /> }).collect_view()}
            </div>
        }
        .into_any(),
    }
}

#[component]
fn GalleryTabs(active: RwSignal<AssetKind>, listing: GalleryListing) -> impl IntoView {
    view! {
        <div class="grid grid-cols-3 gap-1 p-1 rounded-lg bg-white/5">
            {AssetKind::all().into_iter().map(|kind| {
                let label = format_count(kind.label(), listing.items(kind).len());
                view! {
                    <button
                        type="button"
                        class=move || format!(
                            "py-2 rounded-md text-sm font-medium transition-colors {}",
                            if active.get() == kind { "bg-white/15 text-white" } else { "text-white/60 hover:text-white" }
                        )
                        on:click=move |_| active.set(kind)
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn Gallery() -> impl IntoView {
    let listing = RwSignal::new(None::<GalleryListing>);
    let active = RwSignal::new(AssetKind::default());
    let playback = GalleryPlayback::new();

    spawn_local(async move {
        let loaded = fetch_gallery().await;
        log::debug!(
            "Gallery loaded: {} characters, {} audio, {} avatars",
            loaded.characters.len(),
            loaded.audio.len(),
            loaded.avatars.len()
        );
        listing.try_set(Some(loaded));
    });

    on_cleanup(move || playback.stop());

    view! {
        <main class="flex-1 px-8 pt-24 pb-12">
            <div class="max-w-6xl mx-auto space-y-8">
                <header class="space-y-2">
                    <h1 class="text-4xl font-bold">"Gallery"</h1>
                    <p class="text-white/60">"Everything you have created so far"</p>
                </header>

                {move || match listing.get() {
                    None => view! {
                        <div class="py-24 flex justify-center">
                            <LoadingSpinner size="lg" label="Loading gallery..." />
                        </div>
                    }
                    .into_any(),
                    Some(loaded) => {
                        let tabs_listing = loaded.clone();
                        view! {
                            <div class="space-y-6">
                                <GalleryTabs active=active listing=tabs_listing />
                                {move || view! {
                                    <KindPanel kind=active.get() listing=loaded.clone() playback=playback />
                                }}
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>
        </main>
    }
}
