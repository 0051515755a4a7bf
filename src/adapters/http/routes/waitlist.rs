use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::{
    adapters::http::app_state::AppState,
    app_error::AppResult,
    domain::entities::waitlist_entry::WaitlistEntry,
    use_cases::{waitlist::WaitlistUseCases, waitlist_count::WaitlistCountUseCases},
};

const NO_CACHE_HEADERS: [(header::HeaderName, &str); 3] = [
    (header::CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
    (header::PRAGMA, "no-cache"),
    (header::EXPIRES, "0"),
];

#[derive(Deserialize)]
struct JoinPayload {
    email: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JoinResponse {
    success: bool,
    message: &'static str,
    data: WaitlistEntry,
    is_founder: bool,
    total_count: i64,
}

#[derive(Serialize)]
struct CountResponse {
    count: i64,
}

#[derive(Serialize)]
struct CountErrorResponse {
    error: &'static str,
    count: i64,
}

pub fn router() -> Router<AppState> {
    let signup = Router::new()
        .route("/waitlist", post(join).options(preflight))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ));

    Router::new()
        .merge(signup)
        .route("/waitlist-count", get(total_count))
        .route("/waitlist-founder-count", get(founder_count))
}

async fn join(
    State(waitlist): State<Arc<WaitlistUseCases>>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    // Missing or malformed bodies fall through to the email validation error.
    let email = match serde_json::from_slice::<JoinPayload>(&body) {
        Ok(payload) => payload.email.unwrap_or_default(),
        Err(err) => {
            tracing::debug!(error = %err, "Unparseable signup body");
            String::new()
        }
    };

    let admission = waitlist.join(&email).await?;

    Ok(Json(JoinResponse {
        success: true,
        message: "Successfully added to waitlist",
        data: admission.entry,
        is_founder: admission.is_founder,
        total_count: admission.total_count,
    }))
}

async fn preflight() -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
}

async fn total_count(State(counts): State<Arc<WaitlistCountUseCases>>) -> Response {
    count_response(counts.total_count().await)
}

async fn founder_count(State(counts): State<Arc<WaitlistCountUseCases>>) -> Response {
    count_response(counts.founder_count().await)
}

fn count_response(result: AppResult<i64>) -> Response {
    match result {
        Ok(count) => (StatusCode::OK, NO_CACHE_HEADERS, Json(CountResponse { count })).into_response(),
        Err(err) => {
            tracing::error!(error = ?err, "Failed to get waitlist count");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(CountErrorResponse {
                    error: "Failed to get waitlist count",
                    count: 0,
                }),
            )
                .into_response()
        }
    }
}
