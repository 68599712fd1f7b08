//! Model handlers and the factory that builds them.
//!

use crate::core::errors::{AssistantError, InferenceError};
use crate::core::traits::ModelHandler;
use crate::infrastructure::config::Settings;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Which handler the user picked in the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelMode {
    Mistral,
    Oss,
}

impl ModelMode {
    pub const ALL: [ModelMode; 2] = [ModelMode::Mistral, ModelMode::Oss];

    pub fn id(self) -> &'static str {
        match self {
            ModelMode::Mistral => "mistral",
            ModelMode::Oss => "oss",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ModelMode::Mistral => "Mistral (fast via API)",
            ModelMode::Oss => "OSS (offline demo)",
        }
    }
}

impl fmt::Display for ModelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ModelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mistral" => Ok(ModelMode::Mistral),
            "oss" => Ok(ModelMode::Oss),
            other => Err(format!("unknown model mode `{other}`")),
        }
    }
}

/// A handler together with what it was loaded as.
#[derive(Clone)]
pub struct LoadedModel {
    pub mode: ModelMode,
    pub handler: Arc<dyn ModelHandler>,
    pub loaded_at: DateTime<Utc>,
}

impl fmt::Debug for LoadedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedModel")
            .field("mode", &self.mode)
            .field("loaded_at", &self.loaded_at)
            .finish_non_exhaustive()
    }
}

/// Builds the handler for `mode`.
///
/// The hosted mode needs `HF_TOKEN`; without it this fails before any handler exists.
pub fn load_llm(mode: ModelMode, settings: &Settings) -> Result<LoadedModel, AssistantError> {
    let handler: Arc<dyn ModelHandler> = match mode {
        ModelMode::Mistral => {
            let token = settings
                .hf_token
                .clone()
                .ok_or(AssistantError::MissingToken)?;
            Arc::new(HostedModel::new(settings, token)?)
        }
        ModelMode::Oss => Arc::new(OfflineModel),
    };

    info!("Loaded model handler: {}", mode.label());

    Ok(LoadedModel {
        mode,
        handler,
        loaded_at: Utc::now(),
    })
}

/// Calls a hosted OpenAI-compatible chat completions endpoint.
pub struct HostedModel {
    client: reqwest::Client,
    endpoint: String,
    token: String,
    model: String,
    max_tokens: u32,
}

#[derive(Serialize, Debug)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<RequestMessage<'a>>,
    max_tokens: u32,
}

#[derive(Serialize, Debug)]
struct RequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize, Debug)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize, Debug)]
struct ChoiceMessage {
    content: Option<String>,
}

impl HostedModel {
    pub fn new(settings: &Settings, token: String) -> Result<HostedModel, AssistantError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(AssistantError::HttpClient)?;

        Ok(HostedModel {
            client,
            endpoint: format!("{}/chat/completions", settings.base_url),
            token,
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
        })
    }

    async fn complete(&self, prompt: &str) -> Result<String, InferenceError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![RequestMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(InferenceError::Status { status, body });
        }

        let completion: ChatCompletion =
            serde_json::from_str(&body).map_err(InferenceError::Decode)?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or(InferenceError::NoChoices)
    }
}

#[async_trait]
impl ModelHandler for HostedModel {
    async fn respond(&self, prompt: &str) -> String {
        match self.complete(prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Hosted inference call to {} failed: {e}", self.endpoint);
                format!("⚠️ Mistral API failed: {e}")
            }
        }
    }
}

/// Stub handler for demos without network access.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineModel;

#[async_trait]
impl ModelHandler for OfflineModel {
    async fn respond(&self, prompt: &str) -> String {
        format!("(Offline Demo Mode) You asked: '{prompt}'. Imagine a smart answer here 😉")
    }
}
