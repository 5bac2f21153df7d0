//! Talking avatar creation wizard
//!
//! Three stages share one [`WizardContext`](crate::services::wizard_state::WizardContext):
//! character image, speech audio, and the final composed video.

pub mod audio_stage;
pub mod character_stage;
pub mod create_view;
pub mod generate_stage;
pub mod side_panel;
pub mod stage_indicator;

pub use create_view::CreateView;
