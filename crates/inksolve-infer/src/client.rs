//! Blocking Gemini client implementing the solve seam.

use crate::config::InferenceSettings;
use crate::envelope;
use inksolve_core::{SolveClient, SolveError};
use serde::{Deserialize, Serialize};

/// The fixed instruction sent with every drawing.
pub const INSTRUCTION: &str = "This is a hand-drawn image. It may contain math problems, \
physics or chemistry questions, or objects like trees. Interpret the image accurately and \
provide a solution or clear explanation.";

// --- wire types (generateContent) ---

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Synchronous client for the Gemini `generateContent` API.
///
/// One request, one text response; failures are terminal for that request.
pub struct GeminiClient {
    http: reqwest::blocking::Client,
    settings: InferenceSettings,
}

impl GeminiClient {
    /// Build a client from loaded settings.
    pub fn new(settings: InferenceSettings) -> Result<Self, SolveError> {
        let http = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| SolveError::Config(e.to_string()))?;
        Ok(Self { http, settings })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.settings.api_base, self.settings.model
        )
    }
}

impl SolveClient for GeminiClient {
    fn solve(&self, png: &[u8]) -> Result<String, SolveError> {
        let body = build_request(png);
        log::info!(
            "submitting {} byte drawing to {}",
            png.len(),
            self.settings.model
        );

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.settings.api_key.as_str())])
            .json(&body)
            .send()
            .map_err(|e| SolveError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SolveError::Status(status.as_u16()));
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| SolveError::MalformedResponse(e.to_string()))?;
        extract_text(parsed)
    }
}

/// Build the multimodal request: one instruction string plus one enveloped
/// PNG, deterministic decoding (temperature 0).
fn build_request(png: &[u8]) -> GenerateRequest {
    GenerateRequest {
        contents: vec![RequestContent {
            parts: vec![
                RequestPart {
                    text: Some(INSTRUCTION.to_owned()),
                    inline_data: None,
                },
                RequestPart {
                    text: None,
                    inline_data: Some(InlineData {
                        mime_type: envelope::PNG_MIME.to_owned(),
                        data: envelope::wrap(png),
                    }),
                },
            ],
        }],
        generation_config: GenerationConfig { temperature: 0.0 },
    }
}

/// Pull the first candidate's text out of a response body.
fn extract_text(response: GenerateResponse) -> Result<String, SolveError> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(SolveError::MalformedResponse(
            "no text in first candidate".to_owned(),
        ));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let body = serde_json::to_value(build_request(&[1, 2, 3])).unwrap();

        let parts = &body["contents"][0]["parts"];
        assert_eq!(parts[0]["text"], INSTRUCTION);
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[1]["inlineData"]["data"], "AQID");
        assert_eq!(body["generationConfig"]["temperature"], 0.0);
        // The instruction part carries no image and vice versa.
        assert!(parts[0].get("inlineData").is_none());
        assert!(parts[1].get("text").is_none());
    }

    #[test]
    fn test_extract_text() {
        let response: GenerateResponse = serde_json::from_value(serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": "x = "}, {"text": "2"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "x = 2");
    }

    #[test]
    fn test_extract_text_skips_later_candidates() {
        let response: GenerateResponse = serde_json::from_value(serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": "first"}]}},
                {"content": {"parts": [{"text": "second"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "first");
    }

    #[test]
    fn test_extract_text_rejects_empty_body() {
        let empty: GenerateResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(matches!(
            extract_text(empty),
            Err(SolveError::MalformedResponse(_))
        ));

        let blank: GenerateResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": "  \n"}]}}]
        }))
        .unwrap();
        assert!(extract_text(blank).is_err());
    }
}
