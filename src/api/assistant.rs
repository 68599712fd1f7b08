//! Assistant endpoints

use crate::api::ExtractSession;
use crate::api::assistant::schemas::{
    Answer, AskQuestion, ErrorBody, LoadModel, ModeList, ModelStatus,
};
use crate::core::assistant::ModelMode;
use crate::core::errors::AssistantError;
use crate::core::traits::AssistantService;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use di_axum::Inject;

pub fn router() -> Router {
    Router::new()
        .route("/modes", get(list_modes))
        .route("/model", get(current_model).post(load_model))
        .route("/ask", post(ask))
}

async fn list_modes() -> (StatusCode, Json<ModeList>) {
    (
        StatusCode::OK,
        ModeList {
            modes: ModelMode::ALL
                .into_iter()
                .map(schemas::ModeOption::from)
                .collect(),
        }
        .into(),
    )
}

async fn current_model(
    Inject(assistant_service): Inject<dyn AssistantService>,
    ExtractSession(session): ExtractSession,
) -> (StatusCode, Json<ModelStatus>) {
    let status = assistant_service
        .current_model(session)
        .await
        .map(ModelStatus::from)
        .unwrap_or_default();

    (StatusCode::OK, Json(status))
}

async fn load_model(
    Inject(assistant_service): Inject<dyn AssistantService>,
    ExtractSession(session): ExtractSession,
    Json(request): Json<LoadModel>,
) -> Response {
    match assistant_service.load_model(session, request.mode).await {
        Ok(loaded) => (StatusCode::OK, Json(ModelStatus::from(loaded))).into_response(),
        Err(e) => error_response(e),
    }
}

async fn ask(
    Inject(assistant_service): Inject<dyn AssistantService>,
    ExtractSession(session): ExtractSession,
    Json(request): Json<AskQuestion>,
) -> Response {
    match assistant_service
        .ask(session, request.question.clone())
        .await
    {
        Ok(response) => (
            StatusCode::OK,
            Json(Answer {
                question: request.question,
                response,
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(error: AssistantError) -> Response {
    let status = match error {
        AssistantError::EmptyQuestion => StatusCode::BAD_REQUEST,
        AssistantError::NoModelLoaded => StatusCode::CONFLICT,
        AssistantError::MissingToken | AssistantError::HttpClient(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (
        status,
        Json(ErrorBody {
            error: error.to_string(),
        }),
    )
        .into_response()
}

pub mod schemas {
    use crate::core::assistant::{LoadedModel, ModelMode};
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Debug)]
    pub struct ModeOption {
        pub id: ModelMode,
        pub label: &'static str,
    }

    impl From<ModelMode> for ModeOption {
        fn from(mode: ModelMode) -> Self {
            ModeOption {
                id: mode,
                label: mode.label(),
            }
        }
    }

    #[derive(Serialize, Debug)]
    pub struct ModeList {
        pub modes: Vec<ModeOption>,
    }

    #[derive(Deserialize, Debug)]
    pub struct LoadModel {
        pub mode: ModelMode,
    }

    #[derive(Serialize, Debug, Default)]
    pub struct ModelStatus {
        pub mode: Option<ModelMode>,
        pub label: Option<&'static str>,
        pub loaded_at: Option<DateTime<Utc>>,
    }

    impl From<LoadedModel> for ModelStatus {
        fn from(loaded: LoadedModel) -> Self {
            ModelStatus {
                mode: Some(loaded.mode),
                label: Some(loaded.mode.label()),
                loaded_at: Some(loaded.loaded_at),
            }
        }
    }

    #[derive(Deserialize, Debug)]
    pub struct AskQuestion {
        pub question: String,
    }

    #[derive(Serialize, Debug)]
    pub struct Answer {
        pub question: String,
        pub response: String,
    }

    #[derive(Serialize, Debug)]
    pub struct ErrorBody {
        pub error: String,
    }
}
