use crate::error::HttpAppError;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use cliphouse_core::AppError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid, // user_id
    pub exp: i64,  // expiration timestamp
    pub iat: i64,  // issued at timestamp
}

/// Caller identity established by the auth middleware and stored in request
/// extensions.
#[derive(Debug, Clone)]
pub struct UserContext {
    pub user_id: Uuid,
}

// Implement FromRequestParts for UserContext so it composes with Multipart:
// Extension cannot be combined with body extractors, so we read the request
// parts directly.
impl<S> FromRequestParts<S> for UserContext
where
    S: Send + Sync,
{
    type Rejection = HttpAppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<UserContext>()
            .cloned()
            .ok_or_else(|| {
                HttpAppError(AppError::Unauthorized(
                    "Missing authentication context".to_string(),
                ))
            })
    }
}
