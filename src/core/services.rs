//! Implementations for the service the app needs.
//!

use crate::core::assistant::{LoadedModel, ModelMode, load_llm};
use crate::core::errors::AssistantError;
use crate::core::traits::AssistantService;
use crate::infrastructure::config::Settings;
use crate::infrastructure::traits::SessionRepository;
use async_trait::async_trait;
use di::{Ref, injectable};
use log::{error, info};
use uuid::Uuid;

#[injectable(AssistantService)]
pub struct MyAssistantService {
    sessions: Ref<dyn SessionRepository>,
    settings: Ref<Settings>,
}

#[async_trait]
impl AssistantService for MyAssistantService {
    async fn load_model(
        &self,
        session_id: Uuid,
        mode: ModelMode,
    ) -> Result<LoadedModel, AssistantError> {
        let loaded = load_llm(mode, &self.settings).map_err(|e| {
            error!("session {session_id}: failed to load {mode}: {e}");
            e
        })?;

        self.sessions.replace_model(session_id, loaded.clone()).await;
        info!("session {session_id}: model ready ({})", mode.label());

        Ok(loaded)
    }

    async fn current_model(&self, session_id: Uuid) -> Option<LoadedModel> {
        self.sessions.current_model(session_id).await
    }

    async fn ask(&self, session_id: Uuid, question: String) -> Result<String, AssistantError> {
        if question.is_empty() {
            return Err(AssistantError::EmptyQuestion);
        }

        let model = self
            .sessions
            .current_model(session_id)
            .await
            .ok_or(AssistantError::NoModelLoaded)?;

        Ok(model.handler.respond(&question).await)
    }
}
