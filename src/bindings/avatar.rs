use super::core::{post_form, ApiError, AssetRef, MultipartForm};

/// Compose a character image and a speech track into a talking-head video
pub async fn create_avatar(
    character_url: String,
    audio_url: String,
    name: String,
) -> Result<AssetRef, ApiError> {
    let form = MultipartForm::new()?
        .text("character_url", &character_url)?
        .text("audio_url", &audio_url)?
        .text("name", &name)?;
    post_form("/api/avatar/create", form).await
}
