use std::fmt;

/// Failure to pull a video ID out of a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    /// The URL carries no `v` query parameter.
    MissingVideoParam,
    /// The `v` parameter is present but has no value.
    EmptyVideoParam,
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::MissingVideoParam => {
                write!(f, "URL has no v= video parameter")
            }
            ExtractError::EmptyVideoParam => {
                write!(f, "URL has an empty v= video parameter")
            }
        }
    }
}

impl std::error::Error for ExtractError {}

/// Failure from the generative-text service.
///
/// Callers inside the pipeline never see this escape a run; it is collapsed
/// to a fixed sentinel at the pipeline boundary.
#[derive(Debug)]
pub enum SummarizeError {
    /// Transport-level failure (connect, timeout, body decode).
    Http(reqwest::Error),
    /// The API answered with a non-success status.
    Api { status: reqwest::StatusCode, body: String },
    /// The API answered 200 but the response carried no generated text.
    MalformedResponse,
}

impl fmt::Display for SummarizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummarizeError::Http(e) => write!(f, "summarization request failed: {e}"),
            SummarizeError::Api { status, body } => {
                write!(f, "summarization API returned {status}: {body}")
            }
            SummarizeError::MalformedResponse => {
                write!(f, "summarization API response contained no text")
            }
        }
    }
}

impl std::error::Error for SummarizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SummarizeError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SummarizeError {
    fn from(e: reqwest::Error) -> Self {
        SummarizeError::Http(e)
    }
}
