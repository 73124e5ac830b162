use log::debug;

use crate::error::SummarizeError;

const SUMMARY_INSTRUCTION: &str = "You are a helpful assistant that summarizes video transcripts. \
Provide a clear, structured summary that captures the key points, main arguments, and important details. \
Use bullet points for key takeaways.";

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Summarize a transcript via the Gemini generateContent API.
///
/// Single-pass stuff strategy: the whole transcript goes into one prompt.
/// A transcript longer than the model's input window fails like any other
/// API error.
pub async fn summarize(
    client: &reqwest::Client,
    api_key: &str,
    model: &str,
    title: &str,
    transcript_text: &str,
) -> Result<String, SummarizeError> {
    debug!("Summarizing via Gemini API with model {model}");

    let url = endpoint_url(GEMINI_BASE_URL, model, api_key);
    let body = request_body(title, transcript_text);

    let resp = client
        .post(&url)
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(SummarizeError::Api { status, body });
    }

    let json: serde_json::Value = resp.json().await?;
    extract_gemini_text(&json)
}

fn endpoint_url(base: &str, model: &str, api_key: &str) -> String {
    format!("{base}/{model}:generateContent?key={api_key}")
}

fn request_body(title: &str, transcript_text: &str) -> serde_json::Value {
    let user_prompt = format!("Summarize this transcript from the video \"{title}\":\n\n{transcript_text}");
    serde_json::json!({
        "systemInstruction": {
            "parts": [{ "text": SUMMARY_INSTRUCTION }]
        },
        "contents": [
            {
                "role": "user",
                "parts": [{ "text": user_prompt }]
            }
        ]
    })
}

fn extract_gemini_text(json: &serde_json::Value) -> Result<String, SummarizeError> {
    let parts = json
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array());

    if let Some(parts) = parts {
        let text: String = parts
            .iter()
            .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
            .collect::<Vec<_>>()
            .join("");
        if !text.is_empty() {
            return Ok(text);
        }
    }
    Err(SummarizeError::MalformedResponse)
}
