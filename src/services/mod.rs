pub mod alert_service;
pub mod playback;
pub mod request_status;
pub mod wizard_state;
