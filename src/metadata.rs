use serde::Deserialize;

/// Platform the metadata was resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataPlatform {
    YouTube,
    TikTok,
    Instagram,
    Twitter,
    Facebook,
}

/// Kind of post the URL points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataType {
    Video,
    Image,
    Carousel,
    Post,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetadataAuthor {
    #[serde(default, rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, rename = "avatarUrl")]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub verified: bool,
}

/// Engagement counters. Platforms that hide a counter leave it `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct MetadataStats {
    #[serde(default)]
    pub likes: Option<u64>,
    #[serde(default)]
    pub comments: Option<u64>,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub shares: Option<u64>,
}

/// One entry of a carousel post.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaItem {
    #[serde(rename = "type")]
    pub kind: MetadataType,
    #[serde(default)]
    pub url: Option<String>,
    /// Seconds, for video items.
    #[serde(default)]
    pub duration: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetadataMedia {
    #[serde(rename = "type")]
    pub kind: MetadataType,
    /// Seconds.
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default, rename = "thumbnailUrl")]
    pub thumbnail_url: Option<String>,
    /// Populated for carousel posts.
    #[serde(default)]
    pub items: Vec<MediaItem>,
}

/// Platform-tagged metadata for a social media URL.
#[derive(Debug, Clone, Deserialize)]
pub struct Metadata {
    pub platform: MetadataPlatform,
    #[serde(rename = "type")]
    pub kind: MetadataType,
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub author: MetadataAuthor,
    pub stats: MetadataStats,
    pub media: MetadataMedia,
    #[serde(default)]
    pub tags: Vec<String>,
    /// ISO 8601.
    #[serde(default, rename = "createdAt")]
    pub created_at: String,
    /// Platform-specific extras the API passes through verbatim.
    #[serde(default, rename = "additionalData")]
    pub additional_data: Option<serde_json::Value>,
}
