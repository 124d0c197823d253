//! Wire types for the Gemini `generateContent` REST endpoint.

use meridian_core::RemoteFailure;
use serde::{Deserialize, Serialize};

/// Request body for a search-grounded generate call.
#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest {
    contents: Vec<Content>,
    tools: Vec<ToolSpec>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

impl GenerateRequest {
    /// A single-turn request carrying the question with the Google Search
    /// tool enabled.
    pub(crate) fn with_search(question: &str, temperature: f32) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: question.to_string(),
                }],
            }],
            tools: vec![ToolSpec {
                google_search: GoogleSearch {},
            }],
            generation_config: GenerationConfig { temperature },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
struct ToolSpec {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

/// Success response body; only the text path is consumed.
#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate; `None` when the
    /// response carries no usable text.
    pub(crate) fn answer_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text = content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect::<String>();
        if text.is_empty() { None } else { Some(text) }
    }
}

/// Standard Gemini error envelope.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Translate a non-success HTTP response into the structured failure the
/// classifier consumes. Unparseable bodies keep the raw text as the message
/// so detail is never lost.
pub(crate) fn failure_from_response(http_status: u16, body: &str) -> RemoteFailure {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => RemoteFailure {
            status: Some(http_status),
            code: envelope.error.status,
            message: envelope.error.message,
        },
        Err(_) => RemoteFailure {
            status: Some(http_status),
            code: None,
            message: body.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_error_envelope() {
        let body = r#"{
            "error": {
                "code": 429,
                "message": "Resource has been exhausted",
                "status": "RESOURCE_EXHAUSTED"
            }
        }"#;
        let failure = failure_from_response(429, body);
        assert_eq!(failure.status, Some(429));
        assert_eq!(failure.code.as_deref(), Some("RESOURCE_EXHAUSTED"));
        assert_eq!(failure.message, "Resource has been exhausted");
    }

    #[test]
    fn keeps_raw_body_when_envelope_is_absent() {
        let failure = failure_from_response(502, "<html>bad gateway</html>");
        assert_eq!(failure.status, Some(502));
        assert_eq!(failure.code, None);
        assert_eq!(failure.message, "<html>bad gateway</html>");
    }

    #[test]
    fn extracts_first_candidate_text() {
        let body = r#"{
            "candidates": [
                { "content": { "parts": [ { "text": "Hello" }, { "text": " world" } ] } },
                { "content": { "parts": [ { "text": "ignored" } ] } }
            ]
        }"#;
        let response: GenerateResponse = serde_json::from_str(body).expect("parse");
        assert_eq!(response.answer_text(), Some("Hello world".to_string()));
    }

    #[test]
    fn empty_candidates_yield_no_text() {
        let response: GenerateResponse = serde_json::from_str("{}").expect("parse");
        assert_eq!(response.answer_text(), None);

        let response: GenerateResponse =
            serde_json::from_str(r#"{ "candidates": [ { "content": { "parts": [] } } ] }"#)
                .expect("parse");
        assert_eq!(response.answer_text(), None);
    }

    #[test]
    fn request_body_carries_search_tool_and_temperature() {
        let request = GenerateRequest::with_search("question", 0.5);
        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "question");
        assert!(value["tools"][0]["google_search"].is_object());
        assert_eq!(value["generationConfig"]["temperature"], 0.5);
    }
}
