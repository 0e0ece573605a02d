//! Wire models for the ProseCheck API

use chrono::{DateTime, Utc};
use correction_engine::{fingerprint, SentenceGroup};
use serde::{Deserialize, Serialize};
use shared_types::{Finding, LanguageInfo};
use uuid::Uuid;

use crate::error::FieldError;

/// Content length bounds, in characters
pub const MIN_CONTENT_CHARS: usize = 5;
pub const MAX_CONTENT_CHARS: usize = 800;

/// Validate a content submission, reporting violations per field.
///
/// Bounds are counted in characters so multi-byte text validates by what
/// the user sees, matching the character-based finding offsets.
pub fn validate_content(content: &str) -> Result<(), Vec<FieldError>> {
    let chars = content.chars().count();
    let mut errors = Vec::new();

    if chars < MIN_CONTENT_CHARS {
        errors.push(FieldError {
            field: "content",
            message: format!(
                "must be at least {} characters (got {})",
                MIN_CONTENT_CHARS, chars
            ),
        });
    }
    if chars > MAX_CONTENT_CHARS {
        errors.push(FieldError {
            field: "content",
            message: format!(
                "must be at most {} characters (got {})",
                MAX_CONTENT_CHARS, chars
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// A finding plus the key used to act on it
#[derive(Debug, Clone, Serialize)]
pub struct FindingView {
    pub fingerprint: String,
    #[serde(flatten)]
    pub finding: Finding,
}

impl From<Finding> for FindingView {
    fn from(finding: Finding) -> Self {
        Self {
            fingerprint: fingerprint(&finding),
            finding,
        }
    }
}

/// Request to create a new correction session
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSessionRequest {
    /// Language code; unsupported values fall back to English
    #[serde(default)]
    pub language: Option<String>,
}

/// Full session view returned by create/get/check
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub id: Uuid,
    /// idle | submitting | ready | failed
    pub status: &'static str,
    /// Failure message when status is failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub language: String,
    pub content: String,
    pub corrections: Vec<FindingView>,
    pub suggestions: Vec<FindingView>,
    pub groups: Vec<SentenceGroup>,
    pub resolved_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_language: Option<LanguageInfo>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to analyze content within a session
#[derive(Debug, Clone, Deserialize)]
pub struct CheckRequest {
    pub content: String,
}

/// Request to apply one fix within a session
#[derive(Debug, Clone, Deserialize)]
pub struct FixRequest {
    pub fingerprint: String,
    pub replacement: String,
}

/// Response to a session fix
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixResponse {
    pub success: bool,
    pub new_content: String,
    pub corrections: Vec<FindingView>,
    pub suggestions: Vec<FindingView>,
    pub resolved_count: usize,
}

/// Stateless fix application request, for clients that keep the buffer
/// locally instead of in a server session
#[derive(Debug, Clone, Deserialize)]
pub struct ApplyRequest {
    #[serde(rename = "match")]
    pub finding: Finding,
    pub replacement: String,
    pub content: String,
}

/// Stateless fix application response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyResponse {
    pub success: bool,
    pub new_content: String,
}

/// Supported languages response
#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub success: bool,
    pub languages: Vec<LanguageEntry>,
    pub count: usize,
}

/// One supported language
#[derive(Debug, Serialize)]
pub struct LanguageEntry {
    pub code: &'static str,
    pub name: &'static str,
}
