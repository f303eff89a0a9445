//! # Supadata SDK for Rust
//!
//! Rust client for the [Supadata](https://supadata.ai) API: fetch video
//! transcripts, resolve social media metadata, and scrape, map, or crawl
//! websites -- all with idiomatic async Rust.
//!
//! ## Quick start
//!
//! ```no_run
//! use supadata::{Client, Transcript, TranscriptParams};
//!
//! #[tokio::main]
//! async fn main() -> supadata::Result<()> {
//!     // ClientBuilder::new().build()? instead picks up SUPADATA_API_KEY
//!     // from the environment.
//!     let client = Client::new("sd_live_your_api_key");
//!
//!     let params = TranscriptParams::new("https://youtube.com/watch?v=dQw4w9WgXcQ");
//!     match client.transcript(&params).await? {
//!         Transcript::Sync(transcript) => {
//!             for segment in &transcript.content {
//!                 println!("[{:.0}ms] {}", segment.offset, segment.text);
//!             }
//!         }
//!         Transcript::Async(job) => {
//!             // The server queued the work; check on it later.
//!             let status = client.transcript_result(&job.job_id).await?;
//!             println!("job {} is {:?}", job.job_id, status.status);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! Every API failure carries one of eight closed identifiers; match on
//! [`SupadataError::Api`] to branch:
//!
//! ```no_run
//! use supadata::{Client, ErrorCode, SupadataError};
//!
//! # async fn example(client: Client) {
//! match client.me().await {
//!     Ok(account) => println!("{} credits left", account.remaining_credits()),
//!     Err(SupadataError::Api { code: ErrorCode::Unauthorized, .. }) => {
//!         eprintln!("check your API key");
//!     }
//!     Err(err) => eprintln!("{err}"),
//! }
//! # }
//! ```

mod account;
mod client;
mod errors;
mod metadata;
mod transcript;
mod web;
mod youtube;

pub use account::AccountInfo;
pub use client::{Client, ClientBuilder};
pub use errors::{ApiErrorBody, ErrorCode, Result, SupadataError};
pub use metadata::{
    MediaItem, Metadata, MetadataAuthor, MetadataMedia, MetadataPlatform, MetadataStats,
    MetadataType,
};
pub use transcript::{
    AsyncTranscript, JobStatus, SyncTranscript, Transcript, TranscriptJobResult, TranscriptMode,
    TranscriptParams, TranscriptSegment,
};
pub use web::{
    CrawlJob, CrawlPage, CrawlRequest, CrawlResult, CrawlStatus, MapParams, MapResult,
    ScrapeParams, ScrapeResult,
};
pub use youtube::{
    BatchJob, BatchRequest, BatchResult, BatchStats, ChannelVideos, ChannelVideosParams,
    SearchFeature, SearchItem, SearchParams, SearchResults, UploadDate, VideoType,
    YoutubeChannel, YoutubeChannelRef, YoutubePlaylist, YoutubeVideo,
};
