//! HTTP server wiring.
//!
//! Builds the axum router over the shared store state and drives it on a
//! tokio TCP listener until the caller's shutdown future resolves.

use std::future::Future;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::handlers::{create_fruit, get_fruit, list_fruits, AppState};

/// Build the fruit catalog router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/fruits", post(create_fruit).get(list_fruits))
        .route("/fruits/:id", get(get_fruit))
        .with_state(state)
}

/// Bind `addr` and serve the catalog until `shutdown` resolves.
pub async fn serve<F>(addr: SocketAddr, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(%addr, "fruitd listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use fruitd_store::FruitStore;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_router() -> Router {
        router(AppState::new(FruitStore::new()))
    }

    fn post_fruit(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/fruits")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(body: Body) -> Value {
        let bytes = to_bytes(body, usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_post_fruit_returns_201_with_id() {
        let app = test_router();

        let response = app
            .oneshot(post_fruit(json!({ "name": "apple", "price": 3.5 })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response.into_body()).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["name"], "apple");
        assert_eq!(body["price"], 3.5);
    }

    #[tokio::test]
    async fn test_post_duplicate_name_returns_409() {
        let app = test_router();

        let first = app
            .clone()
            .oneshot(post_fruit(json!({ "name": "apple", "price": 3.5 })))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        // Different price, same name.
        let second = app
            .oneshot(post_fruit(json!({ "name": "apple", "price": 9.0 })))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_post_malformed_payload_returns_422() {
        let app = test_router();

        let response = app.oneshot(post_fruit(json!({}))).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response.into_body()).await;
        assert!(body["error"].as_str().unwrap().contains("name"));
    }

    #[tokio::test]
    async fn test_get_fruits_empty_returns_200_with_empty_array() {
        let app = test_router();

        let response = app.oneshot(get_request("/fruits")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response.into_body()).await, json!([]));
    }

    #[tokio::test]
    async fn test_get_fruits_returns_all_in_order() {
        let app = test_router();

        for (name, price) in [("apple", 3.5), ("banana", 1.25)] {
            let response = app
                .clone()
                .oneshot(post_fruit(json!({ "name": name, "price": price })))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = app.oneshot(get_request("/fruits")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response.into_body()).await;
        let fruits = body.as_array().unwrap();
        assert_eq!(fruits.len(), 2);
        assert_eq!(fruits[0]["name"], "apple");
        assert_eq!(fruits[1]["name"], "banana");
        for fruit in fruits {
            assert!(fruit["id"].is_u64());
            assert!(fruit["name"].is_string());
            assert!(fruit["price"].is_number());
        }
    }

    #[tokio::test]
    async fn test_get_fruit_by_id_returns_200() {
        let app = test_router();

        app.clone()
            .oneshot(post_fruit(json!({ "name": "apple", "price": 3.5 })))
            .await
            .unwrap();

        let response = app.oneshot(get_request("/fruits/1")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response.into_body()).await;
        assert_eq!(body["name"], "apple");
    }

    #[tokio::test]
    async fn test_get_fruit_unknown_id_returns_404() {
        let app = test_router();

        let response = app.oneshot(get_request("/fruits/99999999")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_fruit_malformed_id_returns_400() {
        let app = test_router();

        let response = app.oneshot(get_request("/fruits/erro")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
