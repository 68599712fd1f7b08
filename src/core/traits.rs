//! DI "Interfaces"

use crate::core::assistant::{LoadedModel, ModelMode};
use crate::core::errors::AssistantError;
use async_trait::async_trait;
use uuid::Uuid;

/// A function from prompt text to response text.
///
/// Handlers never fail: errors from a backing service are turned into text.
#[async_trait]
pub trait ModelHandler: Send + Sync {
    async fn respond(&self, prompt: &str) -> String;
}

#[async_trait]
pub trait AssistantService: Send + Sync {
    /// Builds a handler for `mode` and makes it the session's active model.
    ///
    /// Returns `Err` if the handler cannot be built, e.g. the API token is missing. The
    /// previously loaded model, if any, stays active in that case.
    async fn load_model(
        &self,
        session_id: Uuid,
        mode: ModelMode,
    ) -> Result<LoadedModel, AssistantError>;

    /// The model currently loaded for the session.
    async fn current_model(&self, session_id: Uuid) -> Option<LoadedModel>;

    /// Sends a question to the session's model.
    ///
    /// Returns `Err` if the question is empty or no model has been loaded yet.
    async fn ask(&self, session_id: Uuid, question: String) -> Result<String, AssistantError>;
}
