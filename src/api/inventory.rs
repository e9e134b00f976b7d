//! Product endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::record::{Product, ProductDraft, ProductId};

use super::{reject, AppState};

/// `GET /inventory`: every product, ascending by id.
pub async fn list(State(state): State<AppState>) -> Json<Vec<Product>> {
    tracing::info!("GET /inventory");
    Json(state.inventory().list())
}

/// `POST /inventory`: create a product. 201 with the stored record, 409
/// when the name is taken.
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<ProductDraft>,
) -> Result<(StatusCode, Json<Product>), StatusCode> {
    tracing::info!(name = %draft.name, "POST /inventory");
    match state.inventory().create(draft) {
        Ok(product) => Ok((StatusCode::CREATED, Json(product))),
        Err(err) => Err(reject(&err)),
    }
}

/// `PUT /inventory`: replace the product with the body's id wholesale.
/// 404 when no product has that id.
pub async fn update(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> Result<Json<Product>, StatusCode> {
    tracing::info!(id = product.id, "PUT /inventory");
    match state.inventory().update(product) {
        Ok(Some(updated)) => Ok(Json(updated)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(err) => Err(reject(&err)),
    }
}

/// `GET /inventory/{id}`: one product, or 404.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>, StatusCode> {
    tracing::info!(id, "GET /inventory/{{id}}");
    state
        .inventory()
        .get(id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// `DELETE /inventory/{id}`: remove a product, or 404.
pub async fn delete(State(state): State<AppState>, Path(id): Path<ProductId>) -> StatusCode {
    tracing::info!(id, "DELETE /inventory/{{id}}");
    match state.inventory().delete(id) {
        Ok(true) => StatusCode::OK,
        Ok(false) => StatusCode::NOT_FOUND,
        Err(err) => reject(&err),
    }
}

/// Query string for [`search`].
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    keyword: Option<String>,
}

/// `GET /inventory/search?keyword=k`: name search. Zero matches is a 200
/// with an empty array, never a 404; so is a missing keyword.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Product>> {
    tracing::info!(keyword = ?params.keyword, "GET /inventory/search");
    Json(state.inventory().search(params.keyword.as_deref()))
}
