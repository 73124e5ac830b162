use log::{debug, info, warn};

use crate::config::Config;
use crate::error::{ExtractError, SummarizeError};
use crate::{Transcript, extract_video_id, summarize, youtube};

/// Fixed result when no transcript could be retrieved.
pub const NO_TRANSCRIPT_SENTINEL: &str = "Transcript not available for this video.";

/// Fixed result when the summarization call failed.
pub const SUMMARIZE_FAILED_SENTINEL: &str = "Error summarizing.";

/// Caption retrieval seam. The production impl hits the InnerTube API;
/// every failure cause collapses to `None`.
pub trait CaptionSource {
    async fn fetch(&self, video_id: &str, languages: &[String]) -> Option<Transcript>;
}

/// Summarization seam over the generative-text service.
pub trait SummaryBackend {
    async fn summarize(&self, title: &str, transcript_text: &str) -> Result<String, SummarizeError>;
}

pub struct InnerTubeCaptions {
    client: reqwest::Client,
}

impl InnerTubeCaptions {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl CaptionSource for InnerTubeCaptions {
    async fn fetch(&self, video_id: &str, languages: &[String]) -> Option<Transcript> {
        match youtube::fetch_captions(&self.client, video_id, languages).await {
            Ok(transcript) => Some(transcript),
            Err(e) => {
                debug!("caption fetch failed for {video_id}: {e}");
                None
            }
        }
    }
}

pub struct GeminiBackend {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiBackend {
    pub fn new(config: &Config, client: reqwest::Client) -> Self {
        Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }
}

impl SummaryBackend for GeminiBackend {
    async fn summarize(&self, title: &str, transcript_text: &str) -> Result<String, SummarizeError> {
        summarize::summarize(&self.client, &self.api_key, &self.model, title, transcript_text).await
    }
}

/// How a pipeline run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No usable caption track, in any requested language, for any reason.
    NoTranscript,
    Summarized { transcript_text: String, summary: String },
    SummarizeFailed { transcript_text: String },
}

/// Display-ready result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub video_id: String,
    pub watch_url: String,
    pub outcome: Outcome,
}

impl Report {
    /// The summary string, or the matching sentinel.
    pub fn summary_text(&self) -> &str {
        match &self.outcome {
            Outcome::NoTranscript => NO_TRANSCRIPT_SENTINEL,
            Outcome::Summarized { summary, .. } => summary,
            Outcome::SummarizeFailed { .. } => SUMMARIZE_FAILED_SENTINEL,
        }
    }

    /// The flattened transcript, if one was retrieved.
    pub fn transcript_text(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::NoTranscript => None,
            Outcome::Summarized { transcript_text, .. }
            | Outcome::SummarizeFailed { transcript_text } => Some(transcript_text),
        }
    }
}

/// The transcript-to-summary pipeline: extract → fetch → summarize.
///
/// One linear run per URL, no retries, nothing shared across runs beyond
/// the injected configuration.
pub struct Pipeline<C, S> {
    config: Config,
    source: C,
    backend: S,
}

impl<C: CaptionSource, S: SummaryBackend> Pipeline<C, S> {
    pub fn new(config: Config, source: C, backend: S) -> Self {
        Self { config, source, backend }
    }

    /// Run the pipeline for one URL.
    ///
    /// The only error a run can return is a malformed URL; fetch and
    /// summarize failures are folded into the report. The backend is never
    /// invoked without a non-empty transcript.
    pub async fn run(&self, url: &str) -> Result<Report, ExtractError> {
        let video_id = extract_video_id(url)?;
        let watch_url = format!("https://www.youtube.com/watch?v={video_id}");
        info!("pipeline run: video={video_id} languages={:?}", self.config.languages);

        let Some(transcript) = self.source.fetch(&video_id, &self.config.languages).await else {
            info!("no transcript for video {video_id}");
            return Ok(Report {
                video_id,
                watch_url,
                outcome: Outcome::NoTranscript,
            });
        };

        let transcript_text = transcript.plain_text();
        if transcript_text.is_empty() {
            info!("empty transcript for video {video_id}");
            return Ok(Report {
                video_id,
                watch_url,
                outcome: Outcome::NoTranscript,
            });
        }

        let outcome = match self.backend.summarize(&transcript.title, &transcript_text).await {
            Ok(summary) => Outcome::Summarized { transcript_text, summary },
            Err(e) => {
                warn!("summarization failed for video {video_id}: {e}");
                Outcome::SummarizeFailed { transcript_text }
            }
        };

        Ok(Report { video_id, watch_url, outcome })
    }
}
