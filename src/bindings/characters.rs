use super::core::{post_form, ApiError, AssetRef, MultipartForm};

// ============================================================================
// Character Images
// ============================================================================

/// Generate a character image from a text prompt
pub async fn generate_character(prompt: String, model: String) -> Result<AssetRef, ApiError> {
    let form = MultipartForm::new()?
        .text("prompt", &prompt)?
        .text("model", &model)?;
    post_form("/api/characters/generate", form).await
}

/// Upload a user-provided character image
pub async fn upload_character(file: web_sys::File, name: String) -> Result<AssetRef, ApiError> {
    let form = MultipartForm::new()?
        .file("file", &file)?
        .text("name", &name)?;
    post_form("/api/characters/upload", form).await
}

/// Edit an existing character image with a prompt
pub async fn edit_character(image_url: String, prompt: String) -> Result<AssetRef, ApiError> {
    let form = MultipartForm::new()?
        .text("image_url", &image_url)?
        .text("prompt", &prompt)?;
    post_form("/api/characters/edit", form).await
}
