pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod summarize;
pub mod youtube;

use error::ExtractError;

/// A single captioned line
#[derive(Debug, Clone)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Caption track for a video, in original order
#[derive(Debug, Clone)]
pub struct Transcript {
    pub video_id: String,
    pub title: String,
    pub language: String,
    pub segments: Vec<Segment>,
}

impl Transcript {
    /// Flatten the segments into one space-joined string.
    ///
    /// Timing information is dropped on purpose: the summarizer only
    /// consumes the spoken text.
    pub fn plain_text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Extract the video ID from a YouTube watch URL.
///
/// The ID is the value of the `v` query parameter, truncated at the first
/// `&` or `#`. A URL without a `v` parameter is an error rather than a
/// best-effort substring.
pub fn extract_video_id(url: &str) -> Result<String, ExtractError> {
    let url = url.trim();

    let re = regex::Regex::new(r"[?&]v=([^&#]*)").unwrap();
    match re.captures(url) {
        Some(caps) => {
            let id = caps[1].to_string();
            if id.is_empty() {
                Err(ExtractError::EmptyVideoParam)
            } else {
                Ok(id)
            }
        }
        None => Err(ExtractError::MissingVideoParam),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap(),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_watch_url_with_extra_params() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=abc123&t=30s").unwrap(),
            "abc123"
        );
    }

    #[test]
    fn test_watch_url_with_fragment() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=abc123#player").unwrap(),
            "abc123"
        );
    }

    #[test]
    fn test_v_not_first_param() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?list=PL1&v=abc123").unwrap(),
            "abc123"
        );
    }

    #[test]
    fn test_missing_v_param() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?list=PL1"),
            Err(ExtractError::MissingVideoParam)
        );
    }

    #[test]
    fn test_empty_v_param() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=&t=30s"),
            Err(ExtractError::EmptyVideoParam)
        );
    }

    #[test]
    fn test_not_a_url() {
        assert_eq!(
            extract_video_id("not-a-valid-url"),
            Err(ExtractError::MissingVideoParam)
        );
    }

    #[test]
    fn test_whitespace_trimming() {
        assert_eq!(
            extract_video_id("  https://www.youtube.com/watch?v=abc123  ").unwrap(),
            "abc123"
        );
    }

    fn transcript(texts: &[&str]) -> Transcript {
        Transcript {
            video_id: "test123".to_string(),
            title: "Test Video".to_string(),
            language: "en".to_string(),
            segments: texts
                .iter()
                .enumerate()
                .map(|(i, t)| Segment {
                    text: t.to_string(),
                    start: i as f64,
                    duration: 1.0,
                })
                .collect(),
        }
    }

    #[test]
    fn test_plain_text_joins_with_spaces() {
        assert_eq!(transcript(&["Hello", "world"]).plain_text(), "Hello world");
    }

    #[test]
    fn test_plain_text_preserves_order() {
        assert_eq!(transcript(&["A", "B", "C"]).plain_text(), "A B C");
    }

    #[test]
    fn test_plain_text_empty() {
        assert_eq!(transcript(&[]).plain_text(), "");
    }
}
