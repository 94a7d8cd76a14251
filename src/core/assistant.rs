//! Résumé-driven talking points from the Gemini `generateContent` API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{SYSTEM_PROMPT, gemini};
use crate::core::error::AssistantError;
use crate::core::retry::{HttpTransport, RetryPolicy, Sleeper, fetch_with_backoff};

// =============================================================================
// Wire types
// =============================================================================

/// `generateContent` request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    pub system_instruction: Content,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// The subset of the `generateContent` response we read.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl Content {
    fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part {
                text: Some(text.into()),
            }],
        }
    }
}

impl GenerateRequest {
    pub fn new(user_query: impl Into<String>, system_prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::text(user_query)],
            system_instruction: Content::text(system_prompt),
        }
    }
}

impl GenerateResponse {
    /// Text of the first part of the first candidate, if non-empty.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
            .filter(|t| !t.is_empty())
    }
}

// =============================================================================
// Prompt building
// =============================================================================

/// Endpoint URL for `model`, with `api_key` passed through unvalidated.
pub fn api_url(model: &str, api_key: &str) -> String {
    format!(
        "{}/{}:generateContent?key={}",
        gemini::BASE_URL,
        model,
        api_key
    )
}

/// User turn: the résumé followed by the company being hired for.
pub fn user_query(resume: &str, company: &str) -> String {
    format!(
        "Here is the resume:\n---\n{}\n---\nThe company I am hiring for is: \"{}\"\n\nGenerate the 3 bullet points.",
        resume, company
    )
}

/// Pull the answer out of a parsed response body. Anything not shaped like a
/// `generateContent` response counts as "no valid response".
pub fn extract_text(body: Value) -> Result<String, AssistantError> {
    serde_json::from_value::<GenerateResponse>(body)
        .ok()
        .and_then(|resp| resp.first_text().map(str::to_string))
        .ok_or(AssistantError::NoValidResponse)
}

// =============================================================================
// Client
// =============================================================================

/// Gemini client over an injectable transport and sleeper.
pub struct GeminiClient<T, S> {
    transport: T,
    sleeper: S,
    url: String,
    policy: RetryPolicy,
}

impl<T: HttpTransport, S: Sleeper> GeminiClient<T, S> {
    /// Client for the configured model and build-time API key.
    pub fn new(transport: T, sleeper: S, policy: RetryPolicy) -> Self {
        Self::with_url(transport, sleeper, policy, api_url(gemini::MODEL, gemini::API_KEY))
    }

    pub fn with_url(transport: T, sleeper: S, policy: RetryPolicy, url: String) -> Self {
        Self {
            transport,
            sleeper,
            url,
            policy,
        }
    }

    /// Ask for three talking points on why the résumé fits `company`.
    pub async fn talking_points(&self, resume: &str, company: &str) -> Result<String, AssistantError> {
        let request = GenerateRequest::new(user_query(resume, company), SYSTEM_PROMPT);
        tracing::info!(company, "requesting talking points");

        let body: Value =
            fetch_with_backoff(&self.transport, &self.sleeper, &self.url, &request, &self.policy)
                .await?;

        extract_text(body).inspect_err(|e| tracing::error!(error = %e, "unusable response"))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::core::error::FetchError;
    use crate::core::retry::testing::{RecordingSleeper, ScriptedTransport, ok, status};

    const URL: &str = "https://gemini.test/v1beta/models/m:generateContent?key=";

    fn client(script: Vec<Result<crate::core::retry::HttpResponse, FetchError>>) -> GeminiClient<ScriptedTransport, RecordingSleeper> {
        GeminiClient::with_url(
            ScriptedTransport::new(script),
            RecordingSleeper::default(),
            RetryPolicy::new(2, 10, 2.0).unwrap(),
            URL.to_string(),
        )
    }

    #[test]
    fn test_request_envelope() {
        let request = GenerateRequest::new("query", "system");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "contents": [{"parts": [{"text": "query"}]}],
                "systemInstruction": {"parts": [{"text": "system"}]}
            })
        );
    }

    #[test]
    fn test_api_url_passes_empty_key() {
        assert_eq!(
            api_url("gemini-x", ""),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-x:generateContent?key="
        );
    }

    #[test]
    fn test_user_query_quotes_company() {
        let query = user_query("RESUME", "acme");
        assert!(query.starts_with("Here is the resume:\n---\nRESUME\n---\n"));
        assert!(query.contains("hiring for is: \"acme\""));
        assert!(query.ends_with("Generate the 3 bullet points."));
    }

    #[test]
    fn test_extract_text() {
        let body = json!({"candidates": [{"content": {"parts": [{"text": "- one\n- two"}]}}]});
        assert_eq!(extract_text(body).unwrap(), "- one\n- two");
    }

    #[test]
    fn test_extract_text_rejects_bad_shapes() {
        for body in [
            json!({}),
            json!({"candidates": []}),
            json!({"candidates": [{}]}),
            json!({"candidates": [{"content": {"parts": []}}]}),
            json!({"candidates": [{"content": {"parts": [{"text": ""}]}}]}),
            json!({"candidates": "nope"}),
            json!([1, 2, 3]),
        ] {
            assert_eq!(extract_text(body), Err(AssistantError::NoValidResponse));
        }
    }

    #[tokio::test]
    async fn test_talking_points_success() {
        let client = client(vec![ok(
            r#"{"candidates":[{"content":{"parts":[{"text":"great fit"}]}}]}"#,
        )]);

        let text = client.talking_points("resume", "acme").await.unwrap();

        assert_eq!(text, "great fit");
        let requests = client.transport.requests.borrow();
        assert_eq!(requests[0].0, URL);
        let sent: Value = serde_json::from_str(&requests[0].1).unwrap();
        assert_eq!(sent["systemInstruction"]["parts"][0]["text"], SYSTEM_PROMPT);
        assert!(sent["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("\"acme\""));
    }

    #[tokio::test]
    async fn test_talking_points_retries_then_succeeds() {
        let client = client(vec![
            status(429, "Too Many Requests"),
            ok(r#"{"candidates":[{"content":{"parts":[{"text":"ok"}]}}]}"#),
        ]);

        assert_eq!(client.talking_points("r", "c").await.unwrap(), "ok");
        assert_eq!(*client.sleeper.delays.borrow(), vec![10]);
    }

    #[tokio::test]
    async fn test_talking_points_no_valid_response() {
        let client = client(vec![ok(r#"{"candidates":[]}"#)]);

        let err = client.talking_points("r", "c").await.unwrap_err();

        assert_eq!(err, AssistantError::NoValidResponse);
        assert_eq!(client.transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_talking_points_exhausted() {
        let client = client(vec![
            status(500, "Internal Server Error"),
            status(500, "Internal Server Error"),
            status(500, "Internal Server Error"),
        ]);

        let err = client.talking_points("r", "c").await.unwrap_err();

        assert!(matches!(
            err,
            AssistantError::Fetch(FetchError::RetriesExhausted { attempts: 3, .. })
        ));
    }
}
