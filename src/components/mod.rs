pub mod alert_dialog;
pub mod design_system;
pub mod gallery;
pub mod layout;
pub mod wizard;
