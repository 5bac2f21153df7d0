use leptos::prelude::*;

/// Blocking alert shown by [`crate::components::alert_dialog::AlertDialog`].
///
/// Only one alert is visible at a time; a newer one replaces it.
#[derive(Clone, Copy)]
pub struct AlertState {
    pub message: RwSignal<Option<String>>,
}

impl AlertState {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
        }
    }

    pub fn alert(&self, message: impl Into<String>) {
        self.message.set(Some(message.into()));
    }

    pub fn dismiss(&self) {
        self.message.set(None);
    }

    pub fn current(&self) -> Option<String> {
        self.message.get_untracked()
    }
}

impl Default for AlertState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_alert_state() {
    provide_context(AlertState::new());
}

pub fn use_alert_state() -> AlertState {
    expect_context::<AlertState>()
}
