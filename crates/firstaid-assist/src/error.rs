use firstaid_core::{Notice, NoticeSink};
use firstaid_gemini::CompletionError;
use thiserror::Error;

pub(crate) const MODEL_NOT_FOUND_NOTICE: &str =
    "Error: Model not found. Please check the configured model name.";

#[derive(Debug, Error)]
pub enum AssistError {
    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("image could not be decoded: {0}")]
    InvalidImage(String),

    #[error("unsupported image format: {0} (expected PNG, JPEG, or WebP)")]
    UnsupportedImageFormat(String),

    #[error("injury description must not be blank")]
    EmptyDescription,

    #[error("geocoding failed: {0}")]
    Geocode(String),
}

/// Logs an absorbed failure and turns it into the notice the user sees.
pub(crate) fn report_failure(notices: &dyn NoticeSink, err: &AssistError, context: &str) {
    tracing::warn!(error = %err, context, "request failed; returning fallback");
    let notice = match err {
        AssistError::Completion(e) if e.is_model_not_found() => {
            Notice::error(MODEL_NOT_FOUND_NOTICE)
        }
        AssistError::EmptyDescription => Notice::warning("Please describe the injury."),
        other => Notice::error(format!("{context}: {other}")),
    };
    notices.notify(notice);
}
