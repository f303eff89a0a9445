use serde::Deserialize;

use crate::errors::ApiErrorBody;

/// One caption segment of a transcript.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,

    /// Milliseconds from media start.
    #[serde(default)]
    pub offset: f64,

    /// Segment length in milliseconds.
    #[serde(default)]
    pub duration: f64,

    /// Per-segment language tag, when it differs from the overall language.
    #[serde(default)]
    pub lang: Option<String>,
}

/// Transcript content returned directly in the fetch response.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncTranscript {
    #[serde(default)]
    pub content: Vec<TranscriptSegment>,

    /// Language of the returned transcript.
    #[serde(default)]
    pub lang: String,

    /// Other languages the transcript is available in.
    #[serde(default, rename = "availableLangs")]
    pub available_langs: Vec<String>,
}

/// Handle for a transcript job the server deferred to background processing.
/// Poll it with [`Client::transcript_result`](crate::Client::transcript_result).
#[derive(Debug, Clone, Deserialize)]
pub struct AsyncTranscript {
    #[serde(rename = "jobId")]
    pub job_id: String,
}

/// Result of a transcript fetch.
///
/// The server returns either the transcript itself or a job handle, with no
/// explicit type tag; the client decides by probing the payload for a `jobId`
/// key. Modeled as an enum so exactly one of the two shapes exists.
#[derive(Debug, Clone)]
pub enum Transcript {
    /// The transcript was available immediately.
    Sync(SyncTranscript),
    /// The server queued a job; poll for the result.
    Async(AsyncTranscript),
}

impl Transcript {
    /// `true` if the server deferred the transcript to a background job.
    pub fn is_async(&self) -> bool {
        matches!(self, Transcript::Async(_))
    }

    /// The transcript content, if it was returned synchronously.
    pub fn as_sync(&self) -> Option<&SyncTranscript> {
        match self {
            Transcript::Sync(sync) => Some(sync),
            Transcript::Async(_) => None,
        }
    }

    /// The job identifier, if the transcript was deferred.
    pub fn job_id(&self) -> Option<&str> {
        match self {
            Transcript::Sync(_) => None,
            Transcript::Async(job) => Some(&job.job_id),
        }
    }
}

/// How the server should source the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptMode {
    /// Only return captions uploaded with the media.
    Native,
    /// Prefer native captions, fall back to generated ones.
    Auto,
    /// Always generate the transcript.
    Generate,
}

impl TranscriptMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranscriptMode::Native => "native",
            TranscriptMode::Auto => "auto",
            TranscriptMode::Generate => "generate",
        }
    }
}

/// Parameters for [`Client::transcript`](crate::Client::transcript).
///
/// Only `url` is required; every other field is omitted from the request when
/// unset, except `mode`, which is sent as `"auto"` when `None`.
#[derive(Debug, Clone, Default)]
pub struct TranscriptParams {
    /// Media URL to fetch the transcript for. Required.
    pub url: String,
    /// Preferred transcript language (ISO 639-1).
    pub lang: Option<String>,
    /// Return plain text instead of timed segments.
    pub text: bool,
    /// Maximum characters per segment.
    pub chunk_size: Option<u32>,
    pub mode: Option<TranscriptMode>,
}

impl TranscriptParams {
    /// Parameters for the given URL with everything else left at defaults.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

/// State of an asynchronous transcript job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Queued,
    Active,
    Completed,
    Failed,
}

/// Response of a transcript job poll.
///
/// `status` is the discriminant: `completed` populates the content fields,
/// `failed` populates `error`, and the queued/active states carry nothing.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptJobResult {
    pub status: JobStatus,
    #[serde(default)]
    pub content: Vec<TranscriptSegment>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default, rename = "availableLangs")]
    pub available_langs: Vec<String>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}
