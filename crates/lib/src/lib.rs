//! # Tahrir
//!
//! This crate turns a topic prompt into a normalized article draft using a
//! configurable AI provider. It shields callers from each provider's
//! request/response format and from unstructured or malformed model output:
//! whatever the upstream returns, the resulting draft always carries a
//! non-empty title and excerpt alongside the full generated content.

pub mod draft;
pub mod errors;
pub mod prompts;
pub mod providers;
pub mod types;

pub use errors::GenerateError;
pub use types::{ArticleDraft, Language, ProviderConfig, ProviderKind, ResponseFormat};
