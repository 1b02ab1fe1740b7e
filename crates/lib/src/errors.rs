use thiserror::Error;

/// Custom error types for the generation pipeline.
///
/// API key values must never appear in any of these messages; only the
/// credential's environment variable name is ever referenced.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI provider returned status {status}: {body}")]
    AiApi { status: u16, body: String },
    #[error("API key `{0}` is not configured")]
    MissingApiKey(String),
}
