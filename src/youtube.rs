use serde::{Deserialize, Serialize};

use crate::errors::ApiErrorBody;
use crate::transcript::JobStatus;

/// A YouTube video.
#[derive(Debug, Clone, Deserialize)]
pub struct YoutubeVideo {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Seconds.
    #[serde(default)]
    pub duration: f64,
    #[serde(default, rename = "channel")]
    pub channel: Option<YoutubeChannelRef>,
    #[serde(default, rename = "viewCount")]
    pub view_count: Option<u64>,
    #[serde(default, rename = "likeCount")]
    pub like_count: Option<u64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// ISO 8601.
    #[serde(default, rename = "uploadDate")]
    pub upload_date: Option<String>,
    /// Languages a transcript is available in.
    #[serde(default, rename = "transcriptLanguages")]
    pub transcript_languages: Vec<String>,
}

/// Minimal channel reference embedded in video and search results.
#[derive(Debug, Clone, Deserialize)]
pub struct YoutubeChannelRef {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A YouTube channel.
#[derive(Debug, Clone, Deserialize)]
pub struct YoutubeChannel {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "subscriberCount")]
    pub subscriber_count: Option<u64>,
    #[serde(default, rename = "videoCount")]
    pub video_count: Option<u64>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub banner: Option<String>,
}

/// A YouTube playlist.
#[derive(Debug, Clone, Deserialize)]
pub struct YoutubePlaylist {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "videoCount")]
    pub video_count: Option<u64>,
    #[serde(default, rename = "viewCount")]
    pub view_count: Option<u64>,
    /// ISO 8601.
    #[serde(default, rename = "lastUpdated")]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub channel: Option<YoutubeChannelRef>,
}

/// Video kinds a channel listing can be filtered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoType {
    Video,
    Short,
    Live,
}

impl VideoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoType::Video => "video",
            VideoType::Short => "short",
            VideoType::Live => "live",
        }
    }
}

/// Parameters for [`Client::youtube_channel_videos`](crate::Client::youtube_channel_videos).
#[derive(Debug, Clone, Default)]
pub struct ChannelVideosParams {
    /// Channel identifier or handle. Required.
    pub id: String,
    /// Maximum number of ids to return.
    pub limit: Option<u32>,
    /// Restrict to these kinds. Sent as repeated `type` query entries;
    /// empty means the server returns all kinds.
    pub video_types: Vec<VideoType>,
}

impl ChannelVideosParams {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// Video ids of a channel, grouped by kind.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelVideos {
    #[serde(default, rename = "videoIds")]
    pub video_ids: Vec<String>,
    #[serde(default, rename = "shortIds")]
    pub short_ids: Vec<String>,
    #[serde(default, rename = "liveIds")]
    pub live_ids: Vec<String>,
}

/// Search result filters. Sent as repeated `features` query entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFeature {
    Hd,
    Live,
    Subtitles,
    FourK,
}

impl SearchFeature {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchFeature::Hd => "hd",
            SearchFeature::Live => "live",
            SearchFeature::Subtitles => "subtitles",
            SearchFeature::FourK => "4k",
        }
    }
}

/// Upload recency filter for search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadDate {
    Hour,
    Today,
    Week,
    Month,
    Year,
}

impl UploadDate {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadDate::Hour => "hour",
            UploadDate::Today => "today",
            UploadDate::Week => "week",
            UploadDate::Month => "month",
            UploadDate::Year => "year",
        }
    }
}

/// Parameters for [`Client::youtube_search`](crate::Client::youtube_search).
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    /// Search query. Required.
    pub query: String,
    pub limit: Option<u32>,
    pub upload_date: Option<UploadDate>,
    pub features: Vec<SearchFeature>,
}

impl SearchParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}

/// One search hit.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Seconds; absent for channel and playlist hits.
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub channel: Option<YoutubeChannelRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub results: Vec<SearchItem>,
}

/// JSON body of a batch start request.
///
/// Exactly one of `video_ids`, `playlist_id`, or `channel_id` selects the
/// source; the server rejects bodies that set none or several.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchRequest {
    #[serde(skip_serializing_if = "Option::is_none", rename = "videoIds")]
    pub video_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "playlistId")]
    pub playlist_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "channelId")]
    pub channel_id: Option<String>,
    /// Cap on how many videos from a playlist or channel source to process.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Transcript language, for transcript batches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// Return plain text instead of timed segments, for transcript batches.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub text: bool,
}

impl BatchRequest {
    pub fn videos(ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            video_ids: Some(ids.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn playlist(id: impl Into<String>) -> Self {
        Self {
            playlist_id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn channel(id: impl Into<String>) -> Self {
        Self {
            channel_id: Some(id.into()),
            ..Self::default()
        }
    }
}

/// Handle for a started batch job.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchJob {
    #[serde(rename = "jobId")]
    pub job_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchStats {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub succeeded: u64,
    #[serde(default)]
    pub failed: u64,
}

/// Response of a batch job poll.
///
/// `results` elements are videos or transcripts depending on which batch
/// operation started the job, so they are exposed as raw JSON values.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchResult {
    pub status: JobStatus,
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
    #[serde(default)]
    pub stats: Option<BatchStats>,
    /// ISO 8601.
    #[serde(default, rename = "completedAt")]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}
