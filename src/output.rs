use crate::pipeline::{Outcome, Report};

const NO_TRANSCRIPT_NOTICE: &str = "Could not retrieve the transcript for this video. \
Make sure the video has either automatically generated subtitles or ones provided by the creator.";

const SUMMARIZE_FAILED_NOTICE: &str = "Error summarizing transcript.";

/// Render one pipeline report for the terminal: the watch link, the
/// summary block, and optionally the full transcript.
pub fn render_report(report: &Report, show_transcript: bool) -> String {
    let mut out = format!("Video: {}\n", report.watch_url);

    match &report.outcome {
        Outcome::NoTranscript => {
            out.push_str(&format!("\n{NO_TRANSCRIPT_NOTICE}\n"));
        }
        Outcome::Summarized { transcript_text, summary } => {
            out.push_str(&format!("\n--- Summary ---\n{summary}\n"));
            if show_transcript {
                out.push_str(&format!("\n--- Full transcript ---\n{transcript_text}\n"));
            }
        }
        Outcome::SummarizeFailed { transcript_text } => {
            out.push_str(&format!("\n{SUMMARIZE_FAILED_NOTICE}\n"));
            if show_transcript {
                out.push_str(&format!("\n--- Full transcript ---\n{transcript_text}\n"));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summarized_report() -> Report {
        Report {
            video_id: "abc123".to_string(),
            watch_url: "https://www.youtube.com/watch?v=abc123".to_string(),
            outcome: Outcome::Summarized {
                transcript_text: "A B C".to_string(),
                summary: "Short summary.".to_string(),
            },
        }
    }

    #[test]
    fn test_render_summarized() {
        let out = render_report(&summarized_report(), false);
        assert!(out.contains("https://www.youtube.com/watch?v=abc123"));
        assert!(out.contains("Short summary."));
        assert!(!out.contains("A B C"));
    }

    #[test]
    fn test_render_summarized_with_transcript() {
        let out = render_report(&summarized_report(), true);
        assert!(out.contains("--- Full transcript ---"));
        assert!(out.contains("A B C"));
    }

    #[test]
    fn test_render_no_transcript() {
        let report = Report {
            video_id: "xyz".to_string(),
            watch_url: "https://www.youtube.com/watch?v=xyz".to_string(),
            outcome: Outcome::NoTranscript,
        };
        let out = render_report(&report, true);
        assert!(out.contains("Could not retrieve the transcript"));
        assert!(!out.contains("--- Summary ---"));
        assert!(!out.contains("--- Full transcript ---"));
    }

    #[test]
    fn test_render_summarize_failed() {
        let report = Report {
            video_id: "xyz".to_string(),
            watch_url: "https://www.youtube.com/watch?v=xyz".to_string(),
            outcome: Outcome::SummarizeFailed {
                transcript_text: "A B C".to_string(),
            },
        };
        let out = render_report(&report, true);
        assert!(out.contains("Error summarizing transcript."));
        assert!(out.contains("A B C"));
    }
}
