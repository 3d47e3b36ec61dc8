//! JSON-over-HTTP chat backend client.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use super::ChatBackend;
use crate::error::{Error, Result};
use crate::session::{Role, Turn};

/// Request body sent to the backend.
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    messages: &'a [Turn],
}

/// JSON reply shape. `role` is optional; replies are assistant turns.
#[derive(Debug, Deserialize)]
struct CompletionReply {
    content: String,
    #[serde(default)]
    role: Option<Role>,
}

/// Chat backend reached over HTTP.
///
/// Posts `{"messages": [{"role", "content"}, ...]}` and accepts either a JSON
/// `{"content": ...}` object or a plain-text body (a text stream read to the
/// end).
#[derive(Debug, Clone)]
pub struct HttpChatBackend {
    endpoint: Url,
    http: reqwest::Client,
}

impl HttpChatBackend {
    /// Create a client for `endpoint` with a per-request timeout.
    pub fn new(endpoint: impl AsRef<str>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Self::with_client(endpoint, http)
    }

    /// Create a client with a custom reqwest client.
    pub fn with_client(endpoint: impl AsRef<str>, http: reqwest::Client) -> Result<Self> {
        let endpoint = Url::parse(endpoint.as_ref())?;
        match endpoint.scheme() {
            "http" | "https" => Ok(Self { endpoint, http }),
            other => Err(Error::Config(format!(
                "backend URL must be http(s), got scheme `{other}`"
            ))),
        }
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Interpret a backend response body.
fn parse_reply(body: &str) -> Result<Turn> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyReply);
    }

    if trimmed.starts_with('{') {
        if let Ok(reply) = serde_json::from_str::<CompletionReply>(trimmed) {
            if reply.content.trim().is_empty() {
                return Err(Error::EmptyReply);
            }
            if reply.role == Some(Role::User) {
                tracing::warn!(name: "backend.reply.role", "backend replied with a user role; treating as assistant");
            }
            return Ok(Turn::assistant(reply.content));
        }
    }

    Ok(Turn::assistant(trimmed))
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    async fn complete(&self, turns: &[Turn]) -> Result<Turn> {
        let started = std::time::Instant::now();
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&CompletionRequest { messages: turns })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            return Err(Error::Backend {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let turn = parse_reply(&body)?;

        tracing::debug!(
            name: "backend.request.completed",
            endpoint = %self.endpoint,
            turns = turns.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Backend reply received"
        );

        Ok(turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_reply() {
        let turn = parse_reply(r#"{"role":"assistant","content":"**Yes**."}"#).unwrap();
        assert_eq!(turn, Turn::assistant("**Yes**."));
    }

    #[test]
    fn json_reply_without_role() {
        let turn = parse_reply(r#"{"content":"ok"}"#).unwrap();
        assert_eq!(turn.role, Role::Assistant);
    }

    #[test]
    fn plain_text_reply() {
        let turn = parse_reply("  The answer is 42.\n").unwrap();
        assert_eq!(turn.content, "The answer is 42.");
    }

    #[test]
    fn brace_prefixed_text_is_kept_verbatim() {
        let turn = parse_reply("{not json} but text").unwrap();
        assert_eq!(turn.content, "{not json} but text");
    }

    #[test]
    fn empty_replies_are_errors() {
        assert!(matches!(parse_reply("   "), Err(Error::EmptyReply)));
        assert!(matches!(
            parse_reply(r#"{"content":""}"#),
            Err(Error::EmptyReply)
        ));
    }

    #[test]
    fn rejects_non_http_endpoints() {
        let err = HttpChatBackend::new("ftp://example.org/chat", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(matches!(
            HttpChatBackend::new("not a url", Duration::from_secs(1)),
            Err(Error::InvalidUrl(_))
        ));
    }
}
