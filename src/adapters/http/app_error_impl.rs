use crate::app_error::AppError;
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

const INTERNAL_MESSAGE: &str = "Internal server error";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::DuplicateEmail => (StatusCode::CONFLICT, "Email already registered"),
            AppError::WaitlistClosed => (StatusCode::FORBIDDEN, "Waitlist is now closed"),
            AppError::StoreUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Waitlist functionality is currently unavailable",
            ),
            AppError::Store { stage, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, stage.public_message())
            }
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE),
        };

        // Log the error before it gets converted into a status response.
        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        } else {
            tracing::info!(error = %self, status = status.as_u16(), "Request rejected");
        }

        error_resp(status, message)
    }
}

fn error_resp(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_error::StoreStage;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn maps_errors_to_status_and_body() {
        let cases = [
            (
                AppError::InvalidInput("Valid email is required".into()),
                StatusCode::BAD_REQUEST,
                "Valid email is required",
            ),
            (AppError::DuplicateEmail, StatusCode::CONFLICT, "Email already registered"),
            (AppError::WaitlistClosed, StatusCode::FORBIDDEN, "Waitlist is now closed"),
            (
                AppError::StoreUnavailable,
                StatusCode::INTERNAL_SERVER_ERROR,
                "Waitlist functionality is currently unavailable",
            ),
            (
                AppError::Store {
                    stage: StoreStage::Insert,
                    message: "boom".into(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to save to waitlist",
            ),
            (
                AppError::Database("password=hunter2".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_MESSAGE,
            ),
        ];

        for (err, status, message) in cases {
            let (got_status, body) = render(err).await;
            assert_eq!(got_status, status);
            assert_eq!(body, serde_json::json!({ "error": message }));
        }
    }
}
