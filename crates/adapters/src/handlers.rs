//! Fruit route handlers.
//!
//! Each handler translates one HTTP request into a core operation and maps
//! the classified failure back to a status code. The store itself never sees
//! HTTP types.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use tokio::sync::Mutex;
use tracing::{debug, info};

use fruitd_store::{parse_fruit_id, validate_create_request, Fruit, FruitStore, StoreError};

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// The single authoritative store. The mutex keeps insert's
    /// check-then-append sequence atomic per request.
    pub store: Arc<Mutex<FruitStore>>,
}

impl AppState {
    /// Wrap a store for sharing across handlers.
    pub fn new(store: FruitStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}

/// Store failure carried through axum's response machinery.
pub struct ApiError(StoreError);

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            StoreError::ValidationFailed { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            StoreError::DuplicateName { .. } => StatusCode::CONFLICT,
            StoreError::InvalidIdFormat { .. } => StatusCode::BAD_REQUEST,
            StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        };

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

/// POST /fruits
///
/// Validates the raw payload, then inserts. 201 with the created fruit on
/// success; 422 on a malformed payload, 409 on a name collision.
pub async fn create_fruit(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Fruit>), ApiError> {
    let new = validate_create_request(&payload)?;

    let mut store = state.store.lock().await;
    let fruit = store.insert(new)?;

    info!(id = fruit.id, name = %fruit.name, "fruit created");
    Ok((StatusCode::CREATED, Json(fruit)))
}

/// GET /fruits
///
/// Returns every fruit in insertion order; an empty catalog is 200 with `[]`.
pub async fn list_fruits(State(state): State<AppState>) -> Json<Vec<Fruit>> {
    let store = state.store.lock().await;
    let fruits = store.list();

    debug!(count = fruits.len(), "fruits listed");
    Json(fruits)
}

/// GET /fruits/:id
///
/// The id is parsed before the store is touched, so a malformed key is 400
/// rather than 404.
pub async fn get_fruit(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Fruit>, ApiError> {
    let id = parse_fruit_id(&raw_id)?;

    let store = state.store.lock().await;
    let fruit = store.get_by_id(id)?;

    debug!(id = fruit.id, "fruit fetched");
    Ok(Json(fruit))
}
