use serde::{Deserialize, Serialize};

use super::core::{get_json, ApiError};

// ============================================================================
// Gallery Types
// ============================================================================

/// Persisted asset as listed by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    pub url: String,
    pub name: String,
    /// ISO-8601 timestamp, usually without an offset
    pub created: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AssetKind {
    #[default]
    Character,
    Audio,
    Avatar,
}

impl AssetKind {
    pub fn all() -> [Self; 3] {
        [AssetKind::Character, AssetKind::Audio, AssetKind::Avatar]
    }

    pub fn list_path(&self) -> &'static str {
        match self {
            AssetKind::Character => "/api/characters/list",
            AssetKind::Audio => "/api/audio/list",
            AssetKind::Avatar => "/api/avatars/list",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Character => "Characters",
            AssetKind::Audio => "Audio",
            AssetKind::Avatar => "Avatars",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            AssetKind::Character => "No characters created yet",
            AssetKind::Audio => "No audio files created yet",
            AssetKind::Avatar => "No avatars created yet",
        }
    }
}

/// All three asset lists, fetched together
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryListing {
    pub characters: Vec<GalleryItem>,
    pub audio: Vec<GalleryItem>,
    pub avatars: Vec<GalleryItem>,
}

impl GalleryListing {
    pub fn items(&self, kind: AssetKind) -> &[GalleryItem] {
        match kind {
            AssetKind::Character => &self.characters,
            AssetKind::Audio => &self.audio,
            AssetKind::Avatar => &self.avatars,
        }
    }

    /// Empty-state message for `kind`, or `None` when it has items
    pub fn empty_state(&self, kind: AssetKind) -> Option<&'static str> {
        self.items(kind).is_empty().then(|| kind.empty_message())
    }

    /// Build a listing from per-kind results. Failed lists count as empty.
    pub fn from_results(
        characters: Result<Vec<GalleryItem>, ApiError>,
        audio: Result<Vec<GalleryItem>, ApiError>,
        avatars: Result<Vec<GalleryItem>, ApiError>,
    ) -> Self {
        fn or_empty(kind: AssetKind, result: Result<Vec<GalleryItem>, ApiError>) -> Vec<GalleryItem> {
            result.unwrap_or_else(|e| {
                log::error!("Error fetching {} list: {}", kind.label(), e);
                Vec::new()
            })
        }

        Self {
            characters: or_empty(AssetKind::Character, characters),
            audio: or_empty(AssetKind::Audio, audio),
            avatars: or_empty(AssetKind::Avatar, avatars),
        }
    }
}

// ============================================================================
// Gallery Commands
// ============================================================================

/// List stored assets of one kind
pub async fn list_assets(kind: AssetKind) -> Result<Vec<GalleryItem>, ApiError> {
    get_json(kind.list_path()).await
}

/// Fetch all three lists concurrently and wait for every one of them
pub async fn fetch_gallery() -> GalleryListing {
    let (characters, audio, avatars) = futures::join!(
        list_assets(AssetKind::Character),
        list_assets(AssetKind::Audio),
        list_assets(AssetKind::Avatar),
    );
    GalleryListing::from_results(characters, audio, avatars)
}
