//! Design System Components for Leptos
//!
//! Reusable building blocks shared by the wizard stages and the gallery.

mod button;
mod card;
mod loading;
mod text_area;


pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardBody, CardDescription, CardHeader, CardTitle};
pub use loading::LoadingSpinner;
pub use text_area::TextArea;
