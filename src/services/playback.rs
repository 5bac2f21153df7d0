//! Audio playback for the gallery and voice previews
//!
//! `PlaybackController` keeps at most one item playing. Players are created
//! the first time an item is played and reused afterwards.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use js_sys::Promise;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

pub trait AudioPlayer {
    fn play(&self);
    fn pause(&self);
}

pub struct PlaybackController<P> {
    players: HashMap<String, P>,
    playing: Option<String>,
}

impl<P: AudioPlayer> PlaybackController<P> {
    pub fn new() -> Self {
        Self {
            players: HashMap::new(),
            playing: None,
        }
    }

    /// Id of the item currently playing
    pub fn playing(&self) -> Option<&str> {
        self.playing.as_deref()
    }

    pub fn is_playing(&self, id: &str) -> bool {
        self.playing.as_deref() == Some(id)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Pause `id` if it is playing, otherwise pause whatever is playing and
    /// start `id`. `create` runs only the first time `id` is seen.
    pub fn toggle<E>(&mut self, id: &str, create: impl FnOnce() -> Result<P, E>) -> Result<(), E> {
        if self.is_playing(id) {
            if let Some(player) = self.players.get(id) {
                player.pause();
            }
            self.playing = None;
            return Ok(());
        }

        if !self.players.contains_key(id) {
            let player = create()?;
            self.players.insert(id.to_string(), player);
        }

        if let Some(current) = self.playing.take() {
            if let Some(player) = self.players.get(&current) {
                player.pause();
            }
        }

        if let Some(player) = self.players.get(id) {
            player.play();
            self.playing = Some(id.to_string());
        }
        Ok(())
    }

    /// A player reached its end on its own
    pub fn ended(&mut self, id: &str) {
        if self.is_playing(id) {
            self.playing = None;
        }
    }

    /// Pause whatever is playing
    pub fn stop(&mut self) {
        if let Some(current) = self.playing.take() {
            if let Some(player) = self.players.get(&current) {
                player.pause();
            }
        }
    }
}

impl<P: AudioPlayer> Default for PlaybackController<P> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Browser Players
// ============================================================================

fn js_message(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Wait for a `play()` call to settle. A rejected promise (autoplay blocked,
/// unsupported or missing source) is an error.
async fn settle_play(started: Result<Promise, JsValue>) -> Result<(), String> {
    let promise = started.map_err(js_message)?;
    JsFuture::from(promise).await.map_err(js_message)?;
    Ok(())
}

/// `<audio>` element with an `ended` listener that lives as long as the player.
///
/// The listener also runs when playback fails to start, so whoever tracks
/// the active item never waits on a silent one.
pub struct HtmlAudioPlayer {
    element: HtmlAudioElement,
    on_ended: Rc<RefCell<dyn FnMut()>>,
    _listener: Closure<dyn FnMut()>,
}

impl HtmlAudioPlayer {
    pub fn new(src: &str, on_ended: impl FnMut() + 'static) -> Result<Self, String> {
        let element = HtmlAudioElement::new_with_src(src).map_err(js_message)?;
        let on_ended: Rc<RefCell<dyn FnMut()>> = Rc::new(RefCell::new(on_ended));

        let callback = Rc::clone(&on_ended);
        let listener = Closure::<dyn FnMut()>::new(move || (&mut *callback.borrow_mut())());
        element.set_onended(Some(listener.as_ref().unchecked_ref()));

        Ok(Self {
            element,
            on_ended,
            _listener: listener,
        })
    }
}

impl AudioPlayer for HtmlAudioPlayer {
    fn play(&self) {
        // Settles on the task queue, never inside the caller's update
        let started = self.element.play();
        let element = self.element.clone();
        let on_ended = Rc::clone(&self.on_ended);
        spawn_local(async move {
            if let Err(e) = settle_play(started).await {
                log::error!("Failed to play audio: {}", e);
                // A pause right after play also rejects; a replay since then
                // leaves the element running
                if element.paused() {
                    (&mut *on_ended.borrow_mut())();
                }
            }
        });
    }

    fn pause(&self) {
        if let Err(e) = self.element.pause() {
            log::error!("Failed to pause audio: {:?}", e);
        }
    }
}

impl Drop for HtmlAudioPlayer {
    fn drop(&mut self) {
        self.element.set_onended(None);
        let _ = self.element.pause();
    }
}

/// Play `src` once and call `on_ended` when it finishes.
///
/// Resolves once playback has started; an error means `on_ended` will never
/// run.
pub async fn play_once(src: &str, on_ended: impl FnOnce() + 'static) -> Result<(), String> {
    let element = HtmlAudioElement::new_with_src(src).map_err(js_message)?;
    let callback = Closure::once_into_js(on_ended);
    element.set_onended(Some(callback.unchecked_ref()));
    settle_play(element.play()).await
}
