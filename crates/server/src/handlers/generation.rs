//! # Generation Route Handlers
//!
//! The article-generation proxy endpoint. One inbound request maps to one
//! upstream call; there is no retry, no failover to the other provider, and
//! no persistence — the caller decides what to do with the draft.

use crate::{errors::AppError, state::AppState};
use axum::{extract::State, Json};
use serde::Deserialize;
use tahrir::{
    draft::{self, DraftFields},
    prompts,
    providers::factory::create_provider,
    ArticleDraft, Language, ProviderKind,
};
use tracing::info;

// --- API Payloads for Generation Handlers ---

#[derive(Deserialize, Debug)]
pub struct GenerateArticleRequest {
    /// The article topic. `Option` so an absent field gets the same 400 as
    /// an empty one instead of a deserialization rejection.
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub provider: ProviderKind,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub language: Language,
}

// --- Generation Handlers ---

/// Handler for the `/generate/article` endpoint.
///
/// Validates the topic, builds the selected provider from configuration
/// (failing before any upstream call if its key is absent), issues one
/// generation call, and normalizes whatever came back into an
/// [`ArticleDraft`] with guaranteed non-empty title and excerpt.
pub async fn generate_article_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<GenerateArticleRequest>,
) -> Result<Json<ArticleDraft>, AppError> {
    let topic = payload.prompt.as_deref().map(str::trim).unwrap_or_default();
    if topic.is_empty() {
        return Err(AppError::BadRequest("موضوع مقاله الزامی است".to_string()));
    }

    let kind = payload.provider;
    info!("Received article generation request for topic '{topic}' via '{kind}'");

    let provider_config = app_state.provider_config(kind);
    let (provider, model) = create_provider(kind, &provider_config, payload.model.as_deref())
        .map_err(|source| AppError::Generate {
            provider: kind,
            source,
        })?;

    let system_prompt = prompts::system_instruction(kind, payload.language, topic);
    let raw = provider
        .generate(&system_prompt, topic)
        .await
        .map_err(|source| AppError::Generate {
            provider: kind,
            source,
        })?;

    let DraftFields {
        title,
        excerpt,
        content,
    } = draft::normalize(kind.response_format(), topic, &raw);

    Ok(Json(ArticleDraft {
        title,
        excerpt,
        content,
        provider: kind.as_str().to_string(),
        model,
    }))
}
