//! Poll API routes and handlers.
//!
//! Three operations map one-to-one onto the store: create a poll, cast a
//! vote, read results. Handlers never hold a lock across an await point;
//! all store work is synchronous and bounded.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;

use crate::polls::{PollError, PollStore};

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<PollStore>,
}

/// Server startup errors.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("invalid bind address '{0}'")]
    BadAddress(String),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Request body for poll creation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePollRequest {
    pub poll_id: String,
    pub options: Vec<String>,
}

/// Request body for casting a vote.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteRequest {
    pub poll_id: String,
    pub option: String,
}

/// Query parameters for the results endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsQuery {
    pub poll_id: Option<String>,
}

/// Success response for create/vote.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub status: &'static str,
    pub poll_id: String,
}

/// Success response for the results endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsResponse {
    pub poll_id: String,
    pub results: HashMap<String, u64>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub polls: usize,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// API-level error with its HTTP status mapping.
///
/// Store errors pass through unchanged; the two boundary-only conditions
/// (unparseable body, missing query parameter) never reach the store.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request")]
    InvalidRequest,

    #[error("pollId required")]
    MissingPollId,

    #[error(transparent)]
    Store(#[from] PollError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest | ApiError::MissingPollId => StatusCode::BAD_REQUEST,
            ApiError::Store(PollError::AlreadyExists(_)) => StatusCode::CONFLICT,
            ApiError::Store(PollError::PollNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Store(
                PollError::OptionNotFound(_) | PollError::EmptyPollId | PollError::NoOptions,
            ) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

/// Build the API router with shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/polls", post(create_poll_handler))
        .route("/votes", post(cast_vote_handler))
        .route("/results", get(results_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// POST /polls - register a new poll.
async fn create_poll_handler(
    State(state): State<AppState>,
    body: Result<Json<CreatePollRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body.map_err(|_| ApiError::InvalidRequest)?;
    state.store.create_poll(&req.poll_id, req.options)?;

    tracing::info!(poll_id = %req.poll_id, "poll created");
    Ok((
        StatusCode::CREATED,
        Json(StatusResponse {
            status: "created",
            poll_id: req.poll_id,
        }),
    ))
}

/// POST /votes - cast one vote for an option.
async fn cast_vote_handler(
    State(state): State<AppState>,
    body: Result<Json<CastVoteRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body.map_err(|_| ApiError::InvalidRequest)?;
    state.store.cast_vote(&req.poll_id, &req.option)?;

    tracing::debug!(poll_id = %req.poll_id, option = %req.option, "vote cast");
    Ok(Json(StatusResponse {
        status: "vote cast",
        poll_id: req.poll_id,
    }))
}

/// GET /results?pollId=... - current tallies for one poll.
async fn results_handler(
    State(state): State<AppState>,
    Query(query): Query<ResultsQuery>,
) -> Result<Json<ResultsResponse>, ApiError> {
    let poll_id = query.poll_id.ok_or(ApiError::MissingPollId)?;
    let results = state.store.snapshot(&poll_id)?;

    Ok(Json(ResultsResponse { poll_id, results }))
}

/// GET /health - liveness probe with a poll count.
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        polls: state.store.len(),
    })
}

/// Bind and serve the API until interrupted.
pub async fn serve(bind: &str, port: u16, store: Arc<PollStore>) -> Result<(), ServeError> {
    let addr: SocketAddr = format!("{}:{}", bind, port)
        .parse()
        .map_err(|_| ServeError::BadAddress(format!("{}:{}", bind, port)))?;

    let app = router(AppState { store });

    tracing::info!(address = %addr, "starting poll server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
