//! Authentication endpoints.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use menuboard_common::AppResult;
use menuboard_core::{CredentialsInput, LoginOutput};

use crate::{extractors::FormData, middleware::AppState, response::MessageResponse};

/// Create auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

fn credentials(form: &FormData) -> CredentialsInput {
    CredentialsInput {
        email: form.text_or_default("email"),
        password: form.text_or_default("password"),
    }
}

/// Register an admin account.
async fn signup(
    State(state): State<AppState>,
    form: FormData,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state.auth_service.register(credentials(&form)).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

/// Log in and receive an access token.
async fn login(State(state): State<AppState>, form: FormData) -> AppResult<Json<LoginOutput>> {
    let output = state.auth_service.login(credentials(&form)).await?;
    Ok(Json(output))
}
