use serde::{Deserialize, Serialize};
use std::fmt;

/// The upstream text-generation services supported by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// An OpenAI-compatible chat-completions service. Instructed to return a
    /// structured JSON draft.
    #[default]
    GapGpt,
    /// Google Gemini's `generateContent` API. Returns plain markdown prose.
    Gemini,
}

impl ProviderKind {
    /// The identifier used in request payloads and the `providers` config map.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::GapGpt => "gapgpt",
            ProviderKind::Gemini => "gemini",
        }
    }

    /// The model used when the request does not name one and the config
    /// carries no `model_name` for this provider.
    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::GapGpt => "gpt-4o",
            ProviderKind::Gemini => "gemini-2.0-flash",
        }
    }

    /// The environment variable holding this provider's API key.
    pub fn credential_name(&self) -> &'static str {
        match self {
            ProviderKind::GapGpt => "GAPGPT_API_KEY",
            ProviderKind::Gemini => "GEMINI_API_KEY",
        }
    }

    /// What this provider is asked to return, and therefore which extraction
    /// path [`crate::draft::normalize`] applies to its output.
    pub fn response_format(&self) -> ResponseFormat {
        match self {
            ProviderKind::GapGpt => ResponseFormat::StructuredJson,
            ProviderKind::Gemini => ResponseFormat::PlainText,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The language an article should be drafted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fa,
    En,
}

/// The shape of a provider's raw output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// The provider was instructed to return a JSON object with `title`,
    /// `excerpt`, and `content` keys. Parsing is still best-effort.
    StructuredJson,
    /// The provider returns unstructured markdown prose.
    PlainText,
}

/// A reusable configuration for a specific AI provider instance.
#[derive(Clone, Deserialize, Default)]
pub struct ProviderConfig {
    /// The API URL. Optional for providers like Gemini where it can be
    /// derived from the model name.
    pub api_url: Option<String>,
    /// The API key. An empty string is treated as absent.
    pub api_key: Option<String>,
    pub model_name: Option<String>,
}

// Manual Debug so configuration can be logged without exposing the key.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model_name", &self.model_name)
            .finish()
    }
}

/// A normalized article draft, ready to be returned to the caller.
///
/// `title` and `excerpt` are never empty: when the upstream output cannot be
/// parsed into structured fields they are derived from the raw content and,
/// failing that, from the original topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    /// Echo of the provider the draft was generated with.
    pub provider: String,
    /// Echo of the model the draft was generated with.
    pub model: String,
}
