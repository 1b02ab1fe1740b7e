use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tahrir::{GenerateError, ProviderKind};
use tracing::error;

/// A custom error type for the server application.
///
/// This enum encapsulates different kinds of errors that can occur within
/// the server, allowing them to be converted into appropriate HTTP
/// responses. User-facing messages are in Persian to match the calling UI.
pub enum AppError {
    /// The request itself was unusable (e.g. an empty topic prompt).
    BadRequest(String),
    /// Errors from the generation pipeline, tagged with the provider in use.
    Generate {
        provider: ProviderKind,
        source: GenerateError,
    },
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

/// Conversion from `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

/// The provider's name as shown in user-facing Persian messages.
fn provider_display_name(kind: ProviderKind) -> &'static str {
    match kind {
        ProviderKind::GapGpt => "گپ جی‌پی‌تی",
        ProviderKind::Gemini => "جمینی",
    }
}

/// A diagnostic string safe to return to the caller. The upstream status is
/// kept for debugging; response bodies and credentials are not echoed.
fn generate_error_details(err: &GenerateError) -> String {
    match err {
        GenerateError::AiApi { status, .. } => format!("AI provider returned status {status}"),
        other => other.to_string(),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, body) = match self {
            AppError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            AppError::Generate { provider, source } => {
                // Log the original error for debugging purposes
                error!("GenerateError from '{provider}': {source:?}");
                match source {
                    // A deployment fault, not a user fault: reported as a
                    // server error naming the unconfigured provider.
                    GenerateError::MissingApiKey(_) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        json!({
                            "error": format!(
                                "کلید API {} تنظیم نشده است",
                                provider_display_name(provider)
                            ),
                        }),
                    ),
                    other => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        json!({
                            "error": "خطا در تولید مقاله با هوش مصنوعی",
                            "details": generate_error_details(&other),
                        }),
                    ),
                }
            }
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "خطا در تولید مقاله با هوش مصنوعی",
                        "details": "An internal server error occurred.",
                    }),
                )
            }
        };

        (status_code, Json(body)).into_response()
    }
}
