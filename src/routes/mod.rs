//! Router assembly: operational routes, resource routes, and the middleware stack.

pub mod common;
pub mod resource;

pub use common::common_routes;
pub use resource::{resource_routes, API_PREFIX};

use crate::config::Settings;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application: every route plus tracing, panic recovery, and the body size cap.
///
/// `max_body_bytes` is the only body limit; axum's built-in extractor limit is disabled.
pub fn build_router(state: AppState, settings: &Settings) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(settings.max_body_bytes));

    Router::new()
        .merge(common_routes(state.clone()))
        .merge(resource_routes(state))
        .layer(middleware)
}
