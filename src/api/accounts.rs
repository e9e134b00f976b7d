//! Account endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::record::{AccountDraft, Cart, UserAccount};

use super::{reject, AppState};

/// `POST /users`: register an account. 201 with the stored record, 409
/// when the username is taken.
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<AccountDraft>,
) -> Result<(StatusCode, Json<UserAccount>), StatusCode> {
    tracing::info!(user = %draft.user_name, "POST /users");
    match state.accounts().create(draft) {
        Ok(account) => Ok((StatusCode::CREATED, Json(account))),
        Err(err) => Err(reject(&err)),
    }
}

/// `PUT /users`: replace the account with the body's username wholesale,
/// cart included. 404 when no such account exists.
pub async fn update(
    State(state): State<AppState>,
    Json(account): Json<UserAccount>,
) -> Result<Json<UserAccount>, StatusCode> {
    tracing::info!(user = %account.user_name, "PUT /users");
    match state.accounts().update(account) {
        Ok(Some(updated)) => Ok(Json(updated)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(err) => Err(reject(&err)),
    }
}

/// `GET /users/{username}`: one account, or 404.
pub async fn get(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserAccount>, StatusCode> {
    tracing::info!(user = %username, "GET /users/{{username}}");
    state
        .accounts()
        .get(&username)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// `DELETE /users/{username}`: remove an account, or 404.
pub async fn delete(State(state): State<AppState>, Path(username): Path<String>) -> StatusCode {
    tracing::info!(user = %username, "DELETE /users/{{username}}");
    match state.accounts().delete(&username) {
        Ok(true) => StatusCode::OK,
        Ok(false) => StatusCode::NOT_FOUND,
        Err(err) => reject(&err),
    }
}

/// `GET /users/{username}/{password}`: credential check. The body is the
/// boolean verdict; an unverified login is a 404 carrying `false`.
pub async fn login(
    State(state): State<AppState>,
    Path((username, password)): Path<(String, String)>,
) -> (StatusCode, Json<bool>) {
    tracing::info!(user = %username, "login attempt");
    let verified = state.accounts().authenticate(&username, &password);
    let status = if verified {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    (status, Json(verified))
}

/// `GET /users/cart/{username}`: the account's cart, or 404.
pub async fn cart(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Cart>, StatusCode> {
    tracing::info!(user = %username, "GET /users/cart/{{username}}");
    state
        .accounts()
        .cart(&username)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// `DELETE /users/cart/{username}`: reset the cart to empty, or 404.
pub async fn clear_cart(State(state): State<AppState>, Path(username): Path<String>) -> StatusCode {
    tracing::info!(user = %username, "DELETE /users/cart/{{username}}");
    match state.accounts().clear_cart(&username) {
        Ok(true) => StatusCode::OK,
        Ok(false) => StatusCode::NOT_FOUND,
        Err(err) => reject(&err),
    }
}
