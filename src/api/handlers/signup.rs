use crate::AppState;
use crate::api::error::AppError;
use crate::services::provisioner::ProvisionError;
use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct SignupResponse {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = SignupResponse),
        (status = 400, description = "Missing fields or provider rejection")
    ),
    tag = "auth"
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), AppError> {
    // Checked before the provider is contacted.
    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(AppError::MissingField);
    }

    let user_id = state
        .provisioner
        .create_account(&payload.email, &payload.password)
        .await
        .map_err(|e| match e {
            ProvisionError::Rejected(message) => AppError::Provisioning(message),
            ProvisionError::Transport(reason) => AppError::Internal(reason),
        })?;

    info!("🆕 Provisioned account {}", user_id);

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: format!("Successfully created new user: {}", user_id),
        }),
    ))
}
