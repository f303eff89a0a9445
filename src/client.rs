use std::time::Duration;

use reqwest::header::USER_AGENT;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::account::AccountInfo;
use crate::errors::{ApiErrorBody, Result, SupadataError};
use crate::metadata::Metadata;
use crate::transcript::{
    AsyncTranscript, SyncTranscript, Transcript, TranscriptJobResult, TranscriptMode,
    TranscriptParams,
};
use crate::web::{CrawlJob, CrawlRequest, CrawlResult, MapParams, MapResult, ScrapeParams, ScrapeResult};
use crate::youtube::{
    BatchJob, BatchRequest, BatchResult, ChannelVideos, ChannelVideosParams, SearchParams,
    SearchResults, YoutubeChannel, YoutubePlaylist, YoutubeVideo,
};

const DEFAULT_BASE_URL: &str = "https://api.supadata.ai/v1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const API_KEY_ENV: &str = "SUPADATA_API_KEY";
const API_KEY_HEADER: &str = "x-api-key";
const USER_AGENT_VALUE: &str = "supadata-rust/0.1.0";

/// Builder for constructing a [`Client`] with custom configuration.
///
/// Options apply in the order given; a later call to the same option wins.
///
/// # Example
///
/// ```no_run
/// use supadata::ClientBuilder;
/// use std::time::Duration;
///
/// # fn example() -> supadata::Result<()> {
/// let client = ClientBuilder::new()
///     .api_key("sd_live_abc123")
///     .base_url("https://custom.example.com/v1")
///     .timeout(Duration::from_secs(120))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            http: None,
        }
    }

    /// Set the API key for authentication.
    ///
    /// An explicit key always takes precedence over the `SUPADATA_API_KEY`
    /// environment variable.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the base URL (defaults to `https://api.supadata.ai/v1`).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the HTTP request timeout (defaults to 60 seconds).
    ///
    /// Ignored when a custom transport is supplied via
    /// [`http_client`](Self::http_client), which owns its own timeout.
    pub fn timeout(mut self, d: Duration) -> Self {
        self.timeout = d;
        self
    }

    /// Replace the HTTP transport wholesale, e.g. to configure proxies or
    /// connection pooling.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the [`Client`].
    ///
    /// If no API key was set via [`api_key`](Self::api_key), the builder
    /// reads the `SUPADATA_API_KEY` environment variable, falling back to an
    /// empty key. No validation happens here: a missing or wrong key
    /// surfaces on first use as an `unauthorized` API error.
    ///
    /// Fails only if the underlying HTTP transport cannot be constructed.
    pub fn build(self) -> Result<Client> {
        let api_key = self
            .api_key
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .unwrap_or_default();

        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(SupadataError::Http)?,
        };

        Ok(Client {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            api_key,
            http,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The Supadata API client.
///
/// Use [`Client::new`] for quick construction or [`ClientBuilder`] for full
/// control. The client is immutable after construction and can be shared
/// across tasks; the underlying transport handles connection reuse.
///
/// # Example
///
/// ```no_run
/// use supadata::{Client, Transcript, TranscriptParams};
///
/// # async fn example() -> supadata::Result<()> {
/// let client = Client::new("sd_live_abc123");
///
/// let params = TranscriptParams::new("https://youtube.com/watch?v=dQw4w9WgXcQ");
/// match client.transcript(&params).await? {
///     Transcript::Sync(t) => println!("{} segments in {}", t.content.len(), t.lang),
///     Transcript::Async(job) => println!("queued as {}", job.job_id),
/// }
/// # Ok(())
/// # }
/// ```
pub struct Client {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl Client {
    /// Create a new client with the given API key and default settings.
    ///
    /// For customization, use [`ClientBuilder`] instead.
    pub fn new(api_key: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            http,
        }
    }

    /// Fetch the transcript of a video or social media post.
    ///
    /// The server answers in one of two shapes: the transcript itself, or a
    /// job handle when it defers the work. The returned [`Transcript`] enum
    /// tags which one arrived; for the async case, poll with
    /// [`transcript_result`](Self::transcript_result).
    ///
    /// If `params.mode` is unset, an explicit `mode=auto` is sent -- the
    /// server treats an omitted mode differently.
    pub async fn transcript(&self, params: &TranscriptParams) -> Result<Transcript> {
        let mut query: Vec<(&str, String)> = vec![("url", params.url.clone())];
        if let Some(lang) = &params.lang {
            query.push(("lang", lang.clone()));
        }
        if params.text {
            query.push(("text", "true".into()));
        }
        if let Some(size) = params.chunk_size {
            query.push(("chunkSize", size.to_string()));
        }
        let mode = params.mode.unwrap_or(TranscriptMode::Auto);
        query.push(("mode", mode.as_str().into()));

        let (status, bytes) = self.get_raw("/transcript", &query).await?;
        resolve_error(status, &bytes)?;

        // The two success shapes share no field, so probe the payload for the
        // jobId discriminant before committing to a decode target. jobId
        // presence wins even if sync-looking fields are also present.
        let probe: serde_json::Value = serde_json::from_slice(&bytes)?;
        if probe.get("jobId").is_some() {
            let job: AsyncTranscript = serde_json::from_slice(&bytes)?;
            Ok(Transcript::Async(job))
        } else {
            let sync: SyncTranscript = serde_json::from_slice(&bytes)?;
            Ok(Transcript::Sync(sync))
        }
    }

    /// Check the state of a transcript job started by [`transcript`](Self::transcript).
    ///
    /// Single-shot: callers decide whether and when to poll again.
    pub async fn transcript_result(&self, job_id: &str) -> Result<TranscriptJobResult> {
        self.get(&format!("/transcript/{job_id}"), &[]).await
    }

    /// Fetch platform-tagged metadata for a video or social media URL.
    pub async fn metadata(&self, url: &str) -> Result<Metadata> {
        self.get("/metadata", &[("url", url.to_string())]).await
    }

    /// Retrieve the authenticated organization's plan and credit usage.
    pub async fn me(&self) -> Result<AccountInfo> {
        self.get("/me", &[]).await
    }

    /// Scrape one web page into markdown.
    pub async fn scrape(&self, params: &ScrapeParams) -> Result<ScrapeResult> {
        let mut query: Vec<(&str, String)> = vec![("url", params.url.clone())];
        if params.no_links {
            query.push(("noLinks", "true".into()));
        }
        if let Some(lang) = &params.lang {
            query.push(("lang", lang.clone()));
        }
        self.get("/web/scrape", &query).await
    }

    /// List every URL discovered on a site.
    pub async fn map(&self, params: &MapParams) -> Result<MapResult> {
        let mut query: Vec<(&str, String)> = vec![("url", params.url.clone())];
        if params.no_links {
            query.push(("noLinks", "true".into()));
        }
        if let Some(lang) = &params.lang {
            query.push(("lang", lang.clone()));
        }
        self.get("/web/map", &query).await
    }

    /// Start a crawl job and return its handle immediately.
    pub async fn crawl(&self, request: &CrawlRequest) -> Result<CrawlJob> {
        self.post("/web/crawl", request).await
    }

    /// Check the state of a crawl job, reading pages from `skip` onwards.
    ///
    /// `skip` is omitted from the request when zero.
    pub async fn crawl_result(&self, job_id: &str, skip: u32) -> Result<CrawlResult> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if skip > 0 {
            query.push(("skip", skip.to_string()));
        }
        self.get(&format!("/web/crawl/{job_id}"), &query).await
    }

    /// Fetch a YouTube video by its identifier.
    pub async fn youtube_video(&self, id: &str) -> Result<YoutubeVideo> {
        self.get("/youtube/video", &[("id", id.to_string())]).await
    }

    /// Fetch a YouTube channel by its identifier or handle.
    pub async fn youtube_channel(&self, id: &str) -> Result<YoutubeChannel> {
        self.get("/youtube/channel", &[("id", id.to_string())]).await
    }

    /// Fetch a YouTube playlist by its identifier.
    pub async fn youtube_playlist(&self, id: &str) -> Result<YoutubePlaylist> {
        self.get("/youtube/playlist", &[("id", id.to_string())]).await
    }

    /// List the video ids of a channel, optionally filtered by kind.
    ///
    /// Kind filters are sent as repeated `type` query entries, one per kind.
    pub async fn youtube_channel_videos(
        &self,
        params: &ChannelVideosParams,
    ) -> Result<ChannelVideos> {
        let mut query: Vec<(&str, String)> = vec![("id", params.id.clone())];
        if let Some(limit) = params.limit {
            query.push(("limit", limit.to_string()));
        }
        for kind in &params.video_types {
            query.push(("type", kind.as_str().into()));
        }
        self.get("/youtube/channel/videos", &query).await
    }

    /// Search YouTube.
    ///
    /// Feature filters are sent as repeated `features` query entries.
    pub async fn youtube_search(&self, params: &SearchParams) -> Result<SearchResults> {
        let mut query: Vec<(&str, String)> = vec![("q", params.query.clone())];
        if let Some(limit) = params.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(upload_date) = params.upload_date {
            query.push(("uploadDate", upload_date.as_str().into()));
        }
        for feature in &params.features {
            query.push(("features", feature.as_str().into()));
        }
        self.get("/youtube/search", &query).await
    }

    /// Start a batch job fetching video details for many videos at once.
    pub async fn youtube_video_batch(&self, request: &BatchRequest) -> Result<BatchJob> {
        self.post("/youtube/video/batch", request).await
    }

    /// Start a batch job fetching transcripts for many videos at once.
    pub async fn youtube_transcript_batch(&self, request: &BatchRequest) -> Result<BatchJob> {
        self.post("/youtube/transcript/batch", request).await
    }

    /// Check the state of a YouTube batch job.
    pub async fn youtube_batch_result(&self, job_id: &str) -> Result<BatchResult> {
        self.get(&format!("/youtube/batch/{job_id}"), &[]).await
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Join the base URL and endpoint path, failing before any network I/O
    /// when the result is not a parseable URL.
    fn endpoint(&self, path: &str) -> Result<reqwest::Url> {
        reqwest::Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| SupadataError::InvalidUrl(e.to_string()))
    }

    /// GET `path`, returning the raw status and body for callers that need
    /// to inspect the payload before choosing a decode target.
    async fn get_raw(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<(StatusCode, Vec<u8>)> {
        let url = self.endpoint(path)?;
        let response = self
            .http
            .get(url)
            .query(query)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(SupadataError::Http)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(SupadataError::Http)?;
        Ok((status, bytes.to_vec()))
    }

    /// GET `path` and decode the response into `T`.
    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let (status, bytes) = self.get_raw(path, query).await?;
        decode_response(status, &bytes)
    }

    /// POST `body` as JSON to `path` and decode the response into `T`.
    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.endpoint(path)?;
        let response = self
            .http
            .post(url)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(SupadataError::Http)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(SupadataError::Http)?;
        decode_response(status, &bytes)
    }
}

/// Resolve a completed exchange into a decoded success value or an error.
fn decode_response<T: DeserializeOwned>(status: StatusCode, bytes: &[u8]) -> Result<T> {
    resolve_error(status, bytes)?;
    serde_json::from_slice(bytes).map_err(SupadataError::Decode)
}

/// Map any status >= 400 to a typed error. A body that decodes as the API
/// error shape becomes [`SupadataError::Api`]; anything else (e.g. a
/// gateway's plaintext page) degrades to [`SupadataError::Status`].
fn resolve_error(status: StatusCode, bytes: &[u8]) -> Result<()> {
    if status.as_u16() < 400 {
        return Ok(());
    }
    match serde_json::from_slice::<ApiErrorBody>(bytes) {
        Ok(body) => Err(body.into()),
        Err(_) => Err(SupadataError::Status(status.as_u16())),
    }
}
