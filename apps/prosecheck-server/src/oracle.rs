//! Client for the external grammar oracle
//!
//! The oracle is any LanguageTool-compatible service exposing
//! `POST /v2/check`. It is treated as opaque: this module only translates
//! between its wire shape and [`Finding`], all correction logic lives in
//! the engine.

use serde::Deserialize;
use shared_types::{AnalysisOutcome, Finding, FindingContext, Language, LanguageInfo};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Failure of an oracle call
#[derive(Debug, Error)]
pub enum OracleError {
    /// Request never produced a usable response (network, timeout, decode)
    #[error("grammar service unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// The oracle answered but rejected the request; the message is the
    /// oracle's own wherever it gave one
    #[error("{0}")]
    Rejected(String),
}

/// HTTP client for a LanguageTool-compatible analysis service
#[derive(Debug)]
pub struct OracleClient {
    http: reqwest::Client,
    base_url: String,
}

impl OracleClient {
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit content for analysis.
    ///
    /// The language is already coerced to a supported code by the caller.
    pub async fn check(
        &self,
        content: &str,
        language: Language,
    ) -> Result<AnalysisOutcome, OracleError> {
        let url = format!("{}/v2/check", self.base_url);
        debug!("Oracle request: {} ({} chars)", url, content.chars().count());

        let response = self
            .http
            .post(&url)
            .form(&[("text", content), ("language", language.code())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                format!("grammar service returned status {}", status)
            } else {
                body
            };
            return Err(OracleError::Rejected(message));
        }

        let decoded: CheckResponse = response.json().await?;
        Ok(AnalysisOutcome {
            matches: decoded.matches.into_iter().map(Finding::from).collect(),
            language: LanguageInfo {
                name: decoded.language.name,
                code: decoded.language.code,
            },
        })
    }
}

/// Wire shape of the oracle's check response
#[derive(Debug, Deserialize)]
struct CheckResponse {
    #[serde(default)]
    matches: Vec<OracleMatch>,
    language: OracleLanguage,
}

#[derive(Debug, Deserialize)]
struct OracleLanguage {
    name: String,
    code: String,
}

#[derive(Debug, Deserialize)]
struct OracleMatch {
    message: String,
    #[serde(default, rename = "shortMessage")]
    short_message: String,
    #[serde(default)]
    replacements: Vec<OracleReplacement>,
    offset: usize,
    length: usize,
    #[serde(default)]
    context: OracleContext,
}

/// The oracle nests each candidate in an object; we only keep the value
#[derive(Debug, Deserialize)]
struct OracleReplacement {
    value: String,
}

#[derive(Debug, Default, Deserialize)]
struct OracleContext {
    #[serde(default)]
    text: String,
    #[serde(default)]
    offset: usize,
    #[serde(default)]
    length: usize,
}

impl From<OracleMatch> for Finding {
    fn from(m: OracleMatch) -> Self {
        Finding {
            message: m.message,
            short_message: m.short_message,
            replacements: m.replacements.into_iter().map(|r| r.value).collect(),
            offset: m.offset,
            length: m.length,
            context: FindingContext {
                text: m.context.text,
                offset: m.context.offset,
                length: m.context.length,
            },
        }
    }
}
