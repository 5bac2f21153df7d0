use serde::Deserialize;

use super::core::{post_form, ApiError, AssetRef, MultipartForm};

// ============================================================================
// Voice Catalogue
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Voice {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Voices offered by the speech backend
pub const VOICES: &[Voice] = &[
    Voice { id: "Rachel", name: "Rachel", description: "Female, American" },
    Voice { id: "Aria", name: "Aria", description: "Female, American" },
    Voice { id: "Sarah", name: "Sarah", description: "Female, American" },
    Voice { id: "Laura", name: "Laura", description: "Female, British" },
    Voice { id: "Charlotte", name: "Charlotte", description: "Female, Swedish" },
    Voice { id: "Lily", name: "Lily", description: "Female, British" },
    Voice { id: "Roger", name: "Roger", description: "Male, American" },
    Voice { id: "Charlie", name: "Charlie", description: "Male, Australian" },
    Voice { id: "George", name: "George", description: "Male, British" },
    Voice { id: "Callum", name: "Callum", description: "Male, American" },
    Voice { id: "Liam", name: "Liam", description: "Male, American" },
    Voice { id: "Bill", name: "Bill", description: "Male, American" },
];

pub fn find_voice(id: &str) -> Option<&'static Voice> {
    VOICES.iter().find(|v| v.id == id)
}

// ============================================================================
// Speech Synthesis
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VoicePreview {
    pub audio_url: String,
}

/// Synthesize speech for `text` with the given voice
pub async fn generate_audio(text: String, voice: String) -> Result<AssetRef, ApiError> {
    let form = MultipartForm::new()?
        .text("text", &text)?
        .text("voice", &voice)?;
    post_form("/api/audio/generate", form).await
}

/// Fetch a short sample of a voice
pub async fn preview_voice(voice: String) -> Result<VoicePreview, ApiError> {
    let form = MultipartForm::new()?.text("voice", &voice)?;
    post_form("/api/audio/preview", form).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::parse_json;
    use std::collections::HashSet;

    #[test]
    fn test_voice_ids_unique() {
        let ids: HashSet<_> = VOICES.iter().map(|v| v.id).collect();
        assert_eq!(ids.len(), VOICES.len());
        assert_eq!(VOICES.len(), 12);
    }

    #[test]
    fn test_find_voice() {
        assert_eq!(find_voice("Charlie").map(|v| v.description), Some("Male, Australian"));
        assert!(find_voice("Nobody").is_none());
    }

    #[test]
    fn test_default_voice_in_catalogue() {
        let config = crate::config::AppConfig::default();
        assert!(find_voice(&config.default_voice).is_some());
    }

    #[test]
    fn test_parse_voice_preview() {
        let preview: VoicePreview =
            parse_json(r#"{"audio_url": "https://cdn.example.com/rachel.mp3"}"#).unwrap();
        assert_eq!(preview.audio_url, "https://cdn.example.com/rachel.mp3");
    }
}
