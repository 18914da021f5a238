//! Auth middleware: validates the bearer token and establishes the caller
//! identity before any handler runs. Requests failing here never reach the
//! staging or persistence stages.

use crate::auth::jwt::extract_bearer;
use crate::auth::models::UserContext;
use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = match extract_bearer(request.headers()) {
        Ok(token) => token.to_string(),
        Err(e) => return HttpAppError(e).into_response(),
    };

    match state.jwt.verify(&token) {
        Ok(claims) => {
            request
                .extensions_mut()
                .insert(UserContext {
                    user_id: claims.sub,
                });
            next.run(request).await
        }
        Err(e) => HttpAppError(e).into_response(),
    }
}
