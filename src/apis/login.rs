use super::{request::LoginRequest, response::LoginResponse};
use crate::{entity::Entity, log::*, state::AppState, table::VoterTable};
use axum::{
  extract::{Query, State},
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug)]
pub enum LoginError {
  InvalidRequest,
  InvalidCredentials,
  DatabaseConnectionFailed,
  InternalServerError,
}

impl IntoResponse for LoginError {
  fn into_response(self) -> Response {
    let (status, error_message) = match self {
      LoginError::InvalidRequest => (StatusCode::BAD_REQUEST, "Invalid request"),
      LoginError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
      LoginError::DatabaseConnectionFailed => (StatusCode::INTERNAL_SERVER_ERROR, "Database connection failed"),
      LoginError::InternalServerError => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
    };
    let body = Json(json!({
        "success": false,
        "message": error_message,
    }));
    (status, body).into_response()
  }
}

/// Credential lookup against the voters table. Matching is plain string
/// equality over both columns; the stored role is echoed back on success.
pub async fn login(
  State(state): State<Arc<AppState>>,
  Query(input): Query<LoginRequest>,
) -> Result<Json<LoginResponse>, LoginError> {
  // Check voter id and password form
  let (Ok(voter_id), Ok(password)) = (input.voter_id(), input.password()) else {
    return Err(LoginError::InvalidRequest);
  };

  let found = match state.table.voter.find_by_credentials(&voter_id, &password).await {
    Ok(found) => found,
    Err(e) if e.is_connection_failure() => {
      error!("Error connecting to MySQL: {e}");
      return Err(LoginError::DatabaseConnectionFailed);
    }
    Err(e) => {
      // Detail stays in the log; the caller only sees the generic message.
      error!("Error during login: {e}");
      return Err(LoginError::InternalServerError);
    }
  };

  let Some(voter) = found else {
    return Err(LoginError::InvalidCredentials);
  };

  debug!("{} logged in with role {}", voter_id.as_str(), voter.role());

  Ok(Json(LoginResponse {
    success: true,
    role: voter.into_role(),
  }))
}
