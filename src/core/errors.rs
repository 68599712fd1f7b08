//! Error types for the assistant.

use reqwest::StatusCode;

/// Errors surfaced to the caller of the assistant service.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("HF_TOKEN is missing. Please add it to .env.")]
    MissingToken,
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    #[error("⚠️ Please load a model first from the sidebar.")]
    NoModelLoaded,
    #[error("Question must not be empty")]
    EmptyQuestion,
}

/// Failures of a single hosted inference call. These never leave the handler;
/// they are folded into the response text.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("invalid response body: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("no completion choices returned")]
    NoChoices,
}
