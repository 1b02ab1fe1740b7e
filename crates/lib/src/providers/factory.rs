//! # AI Provider Factory
//!
//! Centralizes the logic for turning a provider selection plus its resolved
//! configuration into a usable client. Keys are checked here, before any
//! upstream call is attempted, so a missing credential surfaces as a
//! configuration error rather than an authentication failure from the
//! provider.

use crate::{
    errors::GenerateError,
    providers::ai::{gapgpt::GapGptProvider, gemini::GeminiProvider, AiProvider},
    types::{ProviderConfig, ProviderKind},
};
use tracing::info;

const GAPGPT_API_URL: &str = "https://api.gapgpt.app/v1/chat/completions";

/// A tuple containing the instantiated provider and the name of the model
/// it is configured for.
pub type ProviderResult = (Box<dyn AiProvider>, String);

/// Creates an AI provider instance for one request.
///
/// The model is resolved in order: per-request override, configured
/// `model_name`, the provider's built-in default. The API URL falls back to
/// the provider's public endpoint (derived from the model name for Gemini),
/// which is what configuration overrides in tests point at a mock server.
pub fn create_provider(
    kind: ProviderKind,
    config: &ProviderConfig,
    model_override: Option<&str>,
) -> Result<ProviderResult, GenerateError> {
    let model = model_override
        .map(str::to_string)
        .or_else(|| config.model_name.clone())
        .unwrap_or_else(|| kind.default_model().to_string());

    let api_key = config
        .api_key
        .as_deref()
        .filter(|key| !key.is_empty())
        .ok_or_else(|| GenerateError::MissingApiKey(kind.credential_name().to_string()))?;

    info!("Configuring provider '{kind}' with model '{model}'");

    let provider: Box<dyn AiProvider> = match kind {
        ProviderKind::GapGpt => {
            let api_url = config
                .api_url
                .clone()
                .unwrap_or_else(|| GAPGPT_API_URL.to_string());
            Box::new(GapGptProvider::new(
                api_url,
                api_key.to_string(),
                model.clone(),
            )?)
        }
        ProviderKind::Gemini => {
            let api_url = config.api_url.clone().unwrap_or_else(|| {
                format!(
                    "https://generativelanguage.googleapis.com/v1beta/models/{model}:generateContent"
                )
            });
            Box::new(GeminiProvider::new(api_url, api_key.to_string())?)
        }
    };

    Ok((provider, model))
}
