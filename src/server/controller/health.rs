use axum::{http::StatusCode, response::IntoResponse};

pub const ALIVE_BODY: &str = "Bot is alive!";

/// Liveness probe for uptime monitors.
///
/// Answers independently of the Discord connection state.
pub async fn alive() -> impl IntoResponse {
    (StatusCode::OK, ALIVE_BODY)
}
