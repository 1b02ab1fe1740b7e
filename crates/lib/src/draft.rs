//! # Draft Normalization
//!
//! Pure, best-effort extraction of `{title, excerpt, content}` from raw
//! model output. None of these functions touch the network, so the whole
//! fallback ladder can be unit-tested with plain strings.
//!
//! A provider instructed to return JSON does not always comply, and a
//! plain-prose provider never does. Parse failures here are therefore not
//! errors: every path degrades to heuristics, and [`normalize`] guarantees
//! that the returned title and excerpt are non-empty.

use crate::types::ResponseFormat;
use serde::Deserialize;

/// How many characters of content a synthesized excerpt keeps.
const EXCERPT_CHARS: usize = 300;

/// Title, excerpt, and body extracted from raw model output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftFields {
    pub title: String,
    pub excerpt: String,
    pub content: String,
}

#[derive(Deserialize)]
struct StructuredDraft {
    #[serde(default)]
    title: String,
    #[serde(default)]
    excerpt: String,
    #[serde(default)]
    content: String,
}

/// Turns raw model output into draft fields, applying the extraction path
/// for the given response format and the final fallbacks: an empty title
/// becomes the original topic, an empty excerpt is synthesized from the
/// content.
pub fn normalize(format: ResponseFormat, topic: &str, raw: &str) -> DraftFields {
    let mut fields = match format {
        ResponseFormat::StructuredJson => parse_structured(raw).unwrap_or_else(|| DraftFields {
            title: title_from_label_line(raw).unwrap_or_default(),
            excerpt: make_excerpt(raw),
            content: raw.to_string(),
        }),
        ResponseFormat::PlainText => DraftFields {
            title: title_from_heading(raw).unwrap_or_default(),
            excerpt: make_excerpt(raw),
            content: raw.to_string(),
        },
    };

    if fields.title.trim().is_empty() {
        fields.title = topic.to_string();
    }
    if fields.excerpt.trim().is_empty() {
        fields.excerpt = make_excerpt(&fields.content);
    }
    fields
}

/// Attempts a strict parse of the output as a `{title, excerpt, content}`
/// JSON object, tolerating a surrounding markdown code fence.
///
/// Returns `None` on any parse failure so the caller can fall back to the
/// line heuristics. Swallowing the failure is intentional resilience, not a
/// bug: a model that ignores the format instruction still produced usable
/// prose.
pub fn parse_structured(raw: &str) -> Option<DraftFields> {
    let candidate = strip_code_fence(raw);
    let parsed: StructuredDraft = serde_json::from_str(candidate).ok()?;
    Some(DraftFields {
        title: parsed.title,
        excerpt: parsed.excerpt,
        content: parsed.content,
    })
}

/// Finds a title in a line carrying a `عنوان` or `title` label, taking the
/// text after the last colon on that line.
pub fn title_from_label_line(raw: &str) -> Option<String> {
    let line = raw
        .lines()
        .find(|line| line.contains("عنوان") || line.to_lowercase().contains("title"))?;
    let after_label = line.rsplit_once(':').map_or(line, |(_, rest)| rest);
    let title = after_label.trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

/// Takes the first markdown heading line as the title, with the heading
/// markers and surrounding whitespace stripped.
pub fn title_from_heading(raw: &str) -> Option<String> {
    let line = raw
        .lines()
        .map(str::trim_start)
        .find(|line| line.starts_with('#'))?;
    let title = line.trim_start_matches('#').trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

/// Synthesizes an excerpt as the first 300 characters of the content plus an
/// ellipsis. Counts characters, not bytes: the content is usually Persian.
pub fn make_excerpt(content: &str) -> String {
    let mut excerpt: String = content.chars().take(EXCERPT_CHARS).collect();
    excerpt.push_str("...");
    excerpt
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}
