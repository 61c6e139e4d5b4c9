//! sustain-api — REST API for the Sustain initiative catalog.
//!
//! Provides axum route handlers for the six read-only category
//! endpoints. All origins are permitted (the public site is served from
//! a different origin than the API).
//!
//! # API Routes
//!
//! | Method | Path | Description |
//! |---|---|---|
//! | GET | `/api/food` | Initiatives where category=FOOD |
//! | GET | `/api/water` | Initiatives where category=WATER |
//! | GET | `/api/shelter` | Initiatives where category=SHELTER |
//! | GET | `/api/education` | Initiatives where category=EDUCATION |
//! | GET | `/api/work` | Initiatives where category=WORK |
//! | GET | `/api/energy` | Initiatives where category=ENERGY |
//!
//! Each endpoint takes no parameters and returns a bare JSON array of
//! initiative records, in the store's ascending-id order. A category
//! with no records returns `[]` with status 200, not 404.

pub mod handlers;

use axum::Router;
use axum::extract::State;
use axum::routing::get;
use sustain_core::Category;
use sustain_store::Store;
use tower_http::cors::CorsLayer;

/// Shared state for API handlers.
#[derive(Clone)]
pub struct ApiState {
    pub store: Store,
}

/// Build the complete API router: one GET route per category, registered
/// from a single parameterized handler rather than six copies.
pub fn build_router(store: Store) -> Router {
    let state = ApiState { store };

    let mut api_routes = Router::new();
    for category in Category::ALL {
        api_routes = api_routes.route(
            &format!("/{}", category.slug()),
            get(move |state: State<ApiState>| handlers::list_category(state, category)),
        );
    }

    Router::new()
        .nest("/api", api_routes.with_state(state))
        .layer(CorsLayer::permissive())
}
