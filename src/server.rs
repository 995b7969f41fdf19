//! HTTP routes for the lookup service.
//!
//! | Route | Lookup |
//! |-------|--------|
//! | `GET /name/:full_name/:place` | [`LookupService::by_name`] |
//! | `GET /email/:email` | [`LookupService::by_email`] |
//! | `GET /phone/:phone_number` | [`LookupService::by_phone`] |
//!
//! Every route answers with a JSON array of records. An invalid phone number
//! answers `400` with `{"error": "..."}`.

use crate::error::LookupError;
use crate::lookup::LookupService;
use crate::models::PersonRecord;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Clone)]
struct AppState {
    lookup: Arc<LookupService>,
}

/// Build the application router.
pub fn router(lookup: LookupService) -> Router {
    let state = AppState {
        lookup: Arc::new(lookup),
    };

    Router::new()
        .route("/name/:full_name/:place", get(name_handler))
        .route("/email/:email", get(email_handler))
        .route("/phone/:phone_number", get(phone_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Bind `0.0.0.0:<port>` and serve until the process exits.
pub async fn serve(port: u16, lookup: LookupService) -> Result<(), Box<dyn Error>> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Server is running");

    axum::serve(listener, router(lookup)).await?;
    Ok(())
}

async fn name_handler(
    State(state): State<AppState>,
    Path((full_name, place)): Path<(String, String)>,
) -> Json<Vec<PersonRecord>> {
    Json(state.lookup.by_name(&full_name, &place).await)
}

async fn email_handler(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Json<Vec<PersonRecord>> {
    Json(state.lookup.by_email(&email).await)
}

async fn phone_handler(
    State(state): State<AppState>,
    Path(phone_number): Path<String>,
) -> Result<Json<Vec<PersonRecord>>, LookupError> {
    state.lookup.by_phone(&phone_number).await.map(Json)
}
