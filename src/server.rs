// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTTP front end.
//!
//! `GET /search?q=...` answers with a JSON array of HTML excerpts.
//! `GET /health` answers `ok`. The search itself is CPU-bound and fans out on
//! rayon, so each request hands it to tokio's blocking pool. If the client
//! goes away before it finishes, dropping the request cancels the search.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::error::SearchError;
use crate::search::{Budget, Searcher};
use crate::types::Excerpt;

/// Body of the 400 returned when `q` is missing or empty.
pub const MISSING_QUERY: &str = "missing search query in URL params";

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Routes for `/search` and `/health`, sharing one searcher.
pub fn router(searcher: Arc<Searcher>) -> Router {
    Router::new()
        .route("/search", get(handle_search))
        .route("/health", get(|| async { "ok" }))
        .with_state(searcher)
}

/// Bind `addr` and serve until ctrl-c.
pub async fn serve(searcher: Arc<Searcher>, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router(searcher))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c: {}", err);
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

async fn handle_search(
    State(searcher): State<Arc<Searcher>>,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = match params.q {
        Some(q) if !q.is_empty() => q,
        _ => return (StatusCode::BAD_REQUEST, MISSING_QUERY).into_response(),
    };

    let budget = searcher.config().budget();
    match search_html_cancellable(searcher, query, budget).await {
        Ok(Ok(excerpts)) => Json(excerpts).into_response(),
        Ok(Err(err)) => search_error_response(&err),
        Err(err) => {
            error!("search task failed: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "search failed").into_response()
        }
    }
}

/// Cancels its budget when dropped.
struct CancelOnDrop(Budget);

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        self.0.cancel();
    }
}

/// Runs the search on the blocking pool. Dropping the returned future
/// cancels `budget`, so the matchers stop at their next checkpoint.
async fn search_html_cancellable(
    searcher: Arc<Searcher>,
    query: String,
    budget: Budget,
) -> Result<Result<Vec<String>, SearchError>, tokio::task::JoinError> {
    let _guard = CancelOnDrop(budget.clone());
    tokio::task::spawn_blocking(move || {
        let excerpts = searcher.search_with_budget(&query, &budget)?;
        Ok(excerpts.iter().map(Excerpt::to_html).collect())
    })
    .await
}

fn search_error_response(err: &SearchError) -> Response {
    let status = match err {
        SearchError::EmptyQuery => return (StatusCode::BAD_REQUEST, MISSING_QUERY).into_response(),
        SearchError::TimedOut(_) => StatusCode::GATEWAY_TIMEOUT,
        SearchError::Cancelled => StatusCode::INTERNAL_SERVER_ERROR,
    };
    warn!("search failed: {}", err);
    (status, err.to_string()).into_response()
}
