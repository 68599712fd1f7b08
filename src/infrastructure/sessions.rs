//! In-memory session store

use crate::core::assistant::LoadedModel;
use crate::infrastructure::traits::SessionRepository;
use async_trait::async_trait;
use di::{inject, injectable};
use log::debug;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

pub struct InMemorySessionRepository {
    models: RwLock<HashMap<Uuid, LoadedModel>>,
}

#[injectable(SessionRepository)]
impl InMemorySessionRepository {
    #[inject]
    pub fn create() -> InMemorySessionRepository {
        InMemorySessionRepository {
            models: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn current_model(&self, session_id: Uuid) -> Option<LoadedModel> {
        self.models.read().await.get(&session_id).cloned()
    }

    async fn replace_model(&self, session_id: Uuid, model: LoadedModel) -> Option<LoadedModel> {
        let previous = self.models.write().await.insert(session_id, model);
        if let Some(previous) = &previous {
            debug!("session {session_id}: replaced {} handler", previous.mode);
        }
        previous
    }
}
