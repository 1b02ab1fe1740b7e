use crate::{errors::GenerateError, providers::ai::AiProvider};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Long-form prose needs headroom, so the generation parameters are fixed
/// rather than caller-tunable.
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: i32 = 4000;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

// --- OpenAI-compatible request and response structures ---

#[derive(Serialize)]
struct GapGptRequest<'a> {
    model: &'a str,
    messages: Vec<GapGptMessage>,
    temperature: f32,
    max_tokens: i32,
    stream: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct GapGptMessage {
    role: String,
    content: String,
}

#[derive(Deserialize, Debug)]
struct GapGptResponse {
    choices: Vec<GapGptChoice>,
}

#[derive(Deserialize, Debug)]
struct GapGptChoice {
    message: GapGptMessage,
}

// --- GapGPT Provider implementation ---

/// A provider for the GapGPT chat-completions API, or any service speaking
/// the OpenAI wire format.
#[derive(Clone, Debug)]
pub struct GapGptProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: String,
    model: String,
}

impl GapGptProvider {
    /// Creates a new `GapGptProvider`.
    pub fn new(api_url: String, api_key: String, model: String) -> Result<Self, GenerateError> {
        let client = ReqwestClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(GenerateError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
            model,
        })
    }
}

#[async_trait]
impl AiProvider for GapGptProvider {
    /// Generates article text via one chat-completions call.
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GenerateError> {
        let messages = vec![
            GapGptMessage {
                role: "system".to_string(),
                content: system_prompt.to_string(),
            },
            GapGptMessage {
                role: "user".to_string(),
                content: user_prompt.to_string(),
            },
        ];

        let request_body = GapGptRequest {
            model: &self.model,
            messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            stream: false,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(GenerateError::AiRequest)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerateError::AiApi { status, body });
        }

        let gapgpt_response: GapGptResponse = response
            .json()
            .await
            .map_err(GenerateError::AiDeserialization)?;

        let raw_response = gapgpt_response
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .unwrap_or_default();

        Ok(raw_response)
    }
}
