//! Alert Service Tests

use leptos::prelude::*;
use talking_avatar_frontend::services::alert_service::AlertState;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_alert_state_starts_hidden() {
    let alerts = AlertState::new();
    assert_eq!(alerts.current(), None);
    assert!(alerts.message.get().is_none());
}

#[wasm_bindgen_test]
fn test_alert_and_dismiss() {
    let alerts = AlertState::new();

    alerts.alert("Failed to generate audio");
    assert_eq!(alerts.current().as_deref(), Some("Failed to generate audio"));

    alerts.dismiss();
    assert_eq!(alerts.current(), None);
}

#[wasm_bindgen_test]
fn test_newer_alert_replaces_older() {
    let alerts = AlertState::new();

    alerts.alert("Failed to upload character");
    alerts.alert("Error: character not found");

    assert_eq!(alerts.current().as_deref(), Some("Error: character not found"));
}
