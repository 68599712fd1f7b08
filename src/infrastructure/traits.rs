//! Infrastructure traits, used for DI on higher levels

use crate::core::assistant::LoadedModel;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn current_model(&self, session_id: Uuid) -> Option<LoadedModel>;

    /// Stores `model` as the session's only model, returning the one it displaced.
    async fn replace_model(&self, session_id: Uuid, model: LoadedModel) -> Option<LoadedModel>;
}
