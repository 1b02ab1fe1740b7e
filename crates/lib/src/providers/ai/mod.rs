pub mod gapgpt;
pub mod gemini;

use crate::errors::GenerateError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with an AI provider.
///
/// This trait defines a common interface for generating article text from a
/// system instruction and a topic prompt using different upstream services
/// (e.g., GapGPT, Gemini).
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a response from a given system and user prompt.
    ///
    /// The result is the provider's raw text output. No retry is attempted;
    /// a non-success upstream status is reported as
    /// [`GenerateError::AiApi`] with the status attached.
    async fn generate(&self, system_prompt: &str, user_prompt: &str)
        -> Result<String, GenerateError>;
}

dyn_clone::clone_trait_object!(AiProvider);
