//! HTTP API Layer
//!
//! This crate exposes the underwriting domain over REST using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: form catalogue, underwriting, tool calls, health
//! - **Middleware**: tracing, audit logging, body limits
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_underwriting::{RiskEvaluator, ToolDispatcher};

use crate::config::ApiConfig;
use crate::handlers::{forms, health, tool_calls, underwriting};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub evaluator: RiskEvaluator,
    pub dispatcher: ToolDispatcher,
    pub config: ApiConfig,
}

impl AppState {
    /// Builds state over the standard rule registry
    pub fn new(config: ApiConfig) -> Self {
        Self::with_evaluator(config, RiskEvaluator::standard())
    }

    /// Builds state over a specific evaluator
    pub fn with_evaluator(config: ApiConfig, evaluator: RiskEvaluator) -> Self {
        Self {
            dispatcher: ToolDispatcher::new(evaluator.clone()),
            evaluator,
            config,
        }
    }
}

/// Creates the main API router
pub fn create_router(config: ApiConfig) -> Router {
    router_with_state(AppState::new(config))
}

/// Creates the router over prepared state
pub fn router_with_state(state: AppState) -> Router {
    let public_routes = Router::new().route("/health", get(health::health_check));

    let form_routes = Router::new()
        .route("/", get(forms::list_forms))
        .route("/:form", get(forms::get_form))
        .route("/:form/underwrite", post(underwriting::underwrite));

    let api_routes = Router::new()
        .nest("/forms", form_routes)
        .route("/tools", get(forms::list_tools))
        .route("/tool-calls", post(tool_calls::answer_tool_call))
        .layer(axum_middleware::from_fn(audit_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
        // Cors must wrap Trace (as a ServiceBuilder stack would); applied as
        // separate router layers so the inner body is boxed to `Body`.
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
