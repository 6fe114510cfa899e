mod handlers;

pub use handlers::{ItemInput, ItemOutcome};

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::models::Variant;
use crate::render::{PageRenderer, RenderError};
use crate::session::SessionRegistry;

/// Shared state handed to every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub sessions: SessionRegistry,
    pub renderer: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(variant: Variant, restock_threshold: usize) -> Result<Self, RenderError> {
        Ok(Self {
            sessions: SessionRegistry::new(variant, restock_threshold),
            renderer: Arc::new(PageRenderer::new()?),
        })
    }
}

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        // Sessions
        .route("/sessions", post(handlers::create_session))
        .route(
            "/sessions/{id}",
            get(handlers::get_session).delete(handlers::end_session),
        )
        // Items
        .route("/sessions/{id}/items", post(handlers::add_item))
        .route("/sessions/{id}/items/remove", post(handlers::remove_item))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        // Browser page
        .route("/", get(handlers::start_page))
        .route("/sessions/{id}", get(handlers::show_page))
        .route("/sessions/{id}/add", post(handlers::submit_add))
        .route("/sessions/{id}/remove", post(handlers::submit_remove))
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
