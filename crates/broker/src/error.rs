use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;
use uuid::Uuid;

use crate::search::types::FailureBody;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid query: {0}")]
    BadRequest(String),

    /// Store text stays in the log; clients only see `error_id`.
    #[error("Failed to fetch courses")]
    Store { error_id: Uuid },
}

impl ApiError {
    pub fn store(err: anyhow::Error) -> Self {
        let error_id = Uuid::new_v4();
        error!(%error_id, error = ?err, "course search failed");
        ApiError::Store { error_id }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_id) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, None),
            ApiError::Store { error_id } => {
                (StatusCode::INTERNAL_SERVER_ERROR, Some(error_id.to_string()))
            }
        };

        (status, Json(FailureBody::new(self.to_string(), error_id))).into_response()
    }
}
