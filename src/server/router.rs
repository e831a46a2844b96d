use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::server::controller::health::alive;

pub fn router() -> Router {
    Router::new()
        .route("/", get(alive))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::server::controller::health::ALIVE_BODY;

    async fn send(method: Method, uri: &str) -> (StatusCode, String) {
        let response = router()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    /// Tests the liveness route answers with the fixed body.
    ///
    /// Expected: 200 OK with "Bot is alive!"
    #[tokio::test]
    async fn root_reports_alive() {
        let (status, body) = send(Method::GET, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, ALIVE_BODY);
    }

    /// Tests that only GET is routed on the root path.
    ///
    /// Expected: 405 Method Not Allowed
    #[tokio::test]
    async fn root_rejects_post() {
        let (status, _) = send(Method::POST, "/").await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    /// Tests that no other paths are exposed.
    ///
    /// Expected: 404 Not Found
    #[tokio::test]
    async fn unknown_path_not_found() {
        let (status, _) = send(Method::GET, "/health").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
