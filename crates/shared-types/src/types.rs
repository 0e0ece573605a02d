use serde::{Deserialize, Serialize};

/// One flagged span of text returned by the grammar oracle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// Human-readable description of the issue
    pub message: String,
    /// Abbreviated description (may be empty)
    #[serde(default)]
    pub short_message: String,
    /// Candidate replacement strings, in oracle order (possibly empty)
    #[serde(default)]
    pub replacements: Vec<String>,
    pub offset: usize, // Character offset into the content that was analyzed
    pub length: usize, // Span length in characters
    /// Sentence or local window containing the span
    pub context: FindingContext,
}

/// The sentence window around a finding, used for grouping and display
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FindingContext {
    pub text: String,
    /// Character offset of the flagged span within `text`
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub length: usize,
}

/// Languages the oracle can be asked to analyze in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
    Fr,
    Es,
    It,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::De,
        Language::Fr,
        Language::Es,
        Language::It,
    ];

    /// Parse a language code, coercing anything unsupported to English
    pub fn from_code(code: &str) -> Self {
        match code.to_lowercase().as_str() {
            "de" => Language::De,
            "fr" => Language::Fr,
            "es" => Language::Es,
            "it" => Language::It,
            _ => Language::En,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
            Language::Fr => "fr",
            Language::Es => "es",
            Language::It => "it",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::De => "German",
            Language::Fr => "French",
            Language::Es => "Spanish",
            Language::It => "Italian",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Language metadata reported by the oracle for a completed analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub name: String,
    pub code: String,
}

/// Result of one successful analysis pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub matches: Vec<Finding>,
    pub language: LanguageInfo,
}
