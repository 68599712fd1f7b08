use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;
use std::str::FromStr;
use uuid::Uuid;

pub mod assistant;
pub mod pages;

const X_SESSION_ID: &str = "X-Session-ID";

/// The browser session a request belongs to. The page generates the id once per tab.
#[derive(Debug)]
pub struct ExtractSession(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for ExtractSession
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, (StatusCode, &'static str)> {
        if let Some(session_id) = parts.headers.get(X_SESSION_ID) {
            let session_id = session_id
                .to_str()
                .map_err(|_| (StatusCode::BAD_REQUEST, "invalid session id"))?;
            let session_id = Uuid::from_str(session_id)
                .map_err(|_| (StatusCode::BAD_REQUEST, "invalid session id"))?;
            Ok(ExtractSession(session_id))
        } else {
            Err((StatusCode::BAD_REQUEST, "`X-Session-ID` header is missing"))
        }
    }
}
